use serde::{Deserialize, Serialize};
use mongodb::bson::oid::ObjectId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "CID")]
    pub cid: i64,
    #[serde(rename = "CurrentStatus")]
    pub current_status: String,
    #[serde(rename = "UpdateStatus")]
    pub update_status: String,
    #[serde(rename = "OpenNos")]
    pub open_nos: i32,
    #[serde(rename = "CloseNo")]
    pub close_no: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenItem {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "CID")]
    pub cid: i64,
    #[serde(rename = "Items")]
    pub items: Vec<String>,
}

/// A ticket as returned by the `$lookup` join, with its open-item records attached
#[derive(Debug, Clone, Deserialize)]
pub struct JoinedTicket {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    #[serde(rename = "CID")]
    pub cid: i64,
    #[serde(rename = "CurrentStatus")]
    pub current_status: String,
    #[serde(rename = "UpdateStatus")]
    pub update_status: String,
    #[serde(rename = "OpenNos")]
    pub open_nos: i32,
    #[serde(rename = "CloseNo")]
    pub close_no: i32,
    #[serde(rename = "items", default)]
    pub open_items: Vec<OpenItem>,
}

impl Ticket {
    pub fn new(
        cid: i64,
        current_status: impl Into<String>,
        update_status: impl Into<String>,
        open_nos: i32,
        close_no: i32,
    ) -> Self {
        Self {
            id: None,
            cid,
            current_status: current_status.into(),
            update_status: update_status.into(),
            open_nos,
            close_no,
        }
    }
}

impl OpenItem {
    pub fn new<I, S>(cid: i64, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: None,
            cid,
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

use mongodb::bson::{Document, doc};

use super::models::*;
use super::{OPEN_ITEMS_COLLECTION, Session, TICKETS_COLLECTION};
use crate::error::{AppError, Result};

pub const OPEN_STATUS: &str = "Open";
pub const JOINED_ITEMS_FIELD: &str = "items";

pub async fn insert_ticket(session: &Session, ticket: &Ticket) -> Result<()> {
    session
        .tickets()
        .insert_one(ticket)
        .await
        .map_err(|source| AppError::Insert {
            collection: TICKETS_COLLECTION,
            source,
        })?;

    tracing::info!("Inserted ticket CID {}", ticket.cid);
    Ok(())
}

/// First ticket with the given CID, in the server's natural order
pub async fn find_ticket_by_cid(session: &Session, cid: i64) -> Result<Ticket> {
    session
        .tickets()
        .find_one(doc! { "CID": cid })
        .await
        .map_err(|source| AppError::Query {
            collection: TICKETS_COLLECTION,
            source,
        })?
        .ok_or(AppError::NotFound {
            collection: TICKETS_COLLECTION,
            cid,
        })
}

pub async fn insert_open_items(session: &Session, open_item: &OpenItem) -> Result<()> {
    session
        .open_items()
        .insert_one(open_item)
        .await
        .map_err(|source| AppError::Insert {
            collection: OPEN_ITEMS_COLLECTION,
            source,
        })?;

    tracing::info!(
        "Inserted {} open items for CID {}",
        open_item.items.len(),
        open_item.cid
    );
    Ok(())
}

pub async fn find_open_items_by_cid(session: &Session, cid: i64) -> Result<OpenItem> {
    session
        .open_items()
        .find_one(doc! { "CID": cid })
        .await
        .map_err(|source| AppError::Query {
            collection: OPEN_ITEMS_COLLECTION,
            source,
        })?
        .ok_or(AppError::NotFound {
            collection: OPEN_ITEMS_COLLECTION,
            cid,
        })
}

/// `$match` on ticket status, then `$lookup` of open items sharing the CID
pub fn open_tickets_pipeline(status: &str) -> Vec<Document> {
    vec![
        doc! {
            "$match": { "CurrentStatus": status }
        },
        doc! {
            "$lookup": {
                "from": OPEN_ITEMS_COLLECTION,
                "localField": "CID",
                "foreignField": "CID",
                "as": JOINED_ITEMS_FIELD,
            }
        },
    ]
}

pub async fn joined_open_tickets(session: &Session) -> Result<Vec<JoinedTicket>> {
    let pipeline = open_tickets_pipeline(OPEN_STATUS);
    tracing::debug!("Running aggregation on '{}': {:?}", TICKETS_COLLECTION, pipeline);

    // Dropping the cursor kills it server-side, so every early return releases it
    let mut cursor = session
        .tickets()
        .aggregate(pipeline)
        .await
        .map_err(|source| AppError::Aggregate {
            collection: TICKETS_COLLECTION,
            source,
        })?
        .with_type::<JoinedTicket>();

    let mut joined = Vec::new();
    while cursor.advance().await.map_err(AppError::Cursor)? {
        joined.push(cursor.deserialize_current().map_err(AppError::Decode)?);
    }

    tracing::info!("Aggregation returned {} open tickets", joined.len());
    Ok(joined)
}

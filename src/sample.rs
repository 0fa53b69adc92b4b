use crate::db_mongo::models::{OpenItem, Ticket};

pub const SAMPLE_CID: i64 = 1;

pub fn sample_ticket() -> Ticket {
    Ticket::new(SAMPLE_CID, "Open", "In Progress", 3, 0)
}

pub fn sample_open_items() -> OpenItem {
    OpenItem::new(SAMPLE_CID, ["Item 1", "Item 2"])
}

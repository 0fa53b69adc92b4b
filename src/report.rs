use crate::db_mongo::models::{JoinedTicket, OpenItem, Ticket};

/// Renders an item list as `[Item 1 Item 2]`
pub fn format_items(items: &[String]) -> String {
    format!("[{}]", items.join(" "))
}

pub fn ticket_lines(ticket: &Ticket) -> Vec<String> {
    vec![
        format!("Ticket CID: {}", ticket.cid),
        format!("Current Status: {}", ticket.current_status),
    ]
}

pub fn open_items_line(open_item: &OpenItem) -> String {
    format!(
        "Open Items for CID {}: {}",
        open_item.cid,
        format_items(&open_item.items)
    )
}

pub fn joined_lines(joined: &JoinedTicket) -> Vec<String> {
    let mut lines = Vec::with_capacity(joined.open_items.len() + 2);
    lines.push(format!("Ticket CID: {}", joined.cid));
    lines.push("Open Items:".to_string());
    lines.extend(joined.open_items.iter().map(|o| format_items(&o.items)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(cid: i64, open_items: Vec<OpenItem>) -> JoinedTicket {
        JoinedTicket {
            id: None,
            cid,
            current_status: "Open".to_string(),
            update_status: "In Progress".to_string(),
            open_nos: 3,
            close_no: 0,
            open_items,
        }
    }

    #[test]
    fn test_ticket_lines() {
        let ticket = Ticket::new(1, "Open", "In Progress", 3, 0);
        assert_eq!(
            ticket_lines(&ticket),
            vec!["Ticket CID: 1", "Current Status: Open"]
        );
    }

    #[test]
    fn test_open_items_line() {
        let open_item = OpenItem::new(1, ["Item 1", "Item 2"]);
        assert_eq!(
            open_items_line(&open_item),
            "Open Items for CID 1: [Item 1 Item 2]"
        );
    }

    #[test]
    fn test_joined_lines() {
        let result = joined(
            1,
            vec![
                OpenItem::new(1, ["Item 1", "Item 2"]),
                OpenItem::new(1, ["Item 3"]),
            ],
        );
        assert_eq!(
            joined_lines(&result),
            vec![
                "Ticket CID: 1",
                "Open Items:",
                "[Item 1 Item 2]",
                "[Item 3]"
            ]
        );
    }

    #[test]
    fn test_joined_lines_without_items() {
        assert_eq!(
            joined_lines(&joined(5, vec![])),
            vec!["Ticket CID: 5", "Open Items:"]
        );
    }

    #[test]
    fn test_format_empty_items() {
        assert_eq!(format_items(&[]), "[]");
    }
}

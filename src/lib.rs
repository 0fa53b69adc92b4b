pub mod config;
pub mod db_mongo;
pub mod error;
pub mod report;
pub mod sample;

use crate::config::Settings;
use crate::db_mongo::{Session, queries};
use crate::error::Result;

/// Connect, run the insert/read/join sequence, then close the client
pub async fn run(settings: &Settings) -> Result<()> {
    let session = Session::connect(settings).await?;
    run_with_session(&session).await?;
    session.shutdown().await;
    Ok(())
}

/// Insert and read back the sample ticket and open items, then print the join
pub async fn run_with_session(session: &Session) -> Result<()> {
    let new_ticket = sample::sample_ticket();
    queries::insert_ticket(session, &new_ticket).await?;

    let ticket = queries::find_ticket_by_cid(session, new_ticket.cid).await?;
    for line in report::ticket_lines(&ticket) {
        println!("{}", line);
    }

    let new_open_items = sample::sample_open_items();
    queries::insert_open_items(session, &new_open_items).await?;

    let open_items = queries::find_open_items_by_cid(session, new_open_items.cid).await?;
    println!("{}", report::open_items_line(&open_items));

    for joined in queries::joined_open_tickets(session).await? {
        for line in report::joined_lines(&joined) {
            println!("{}", line);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};

    // Needs a running MongoDB; run with `cargo test -- --ignored`
    #[tokio::test]
    #[ignore]
    async fn test_repeated_runs_duplicate_records() {
        let settings = Settings {
            database_name: format!("ticket_join_test_{}", ObjectId::new().to_hex()),
            ..Settings::from_env()
        };
        let session = Session::connect(&settings).await.unwrap();

        run_with_session(&session).await.unwrap();
        run_with_session(&session).await.unwrap();

        let filter = doc! { "CID": sample::SAMPLE_CID };
        let tickets = session.tickets().count_documents(filter.clone()).await.unwrap();
        let open_items = session.open_items().count_documents(filter).await.unwrap();
        assert_eq!(tickets, 2);
        assert_eq!(open_items, 2);

        // Each of the two open tickets now joins both open-item records
        let joined = queries::joined_open_tickets(&session).await.unwrap();
        assert_eq!(joined.len(), 2);
        assert!(joined.iter().all(|j| j.open_items.len() == 2));

        session.database().drop().await.unwrap();
        session.shutdown().await;
    }
}

pub mod models;
pub mod queries;

use mongodb::{Client, Collection, Database, bson::doc};

use crate::config::Settings;
use crate::error::{AppError, Result};
use models::{OpenItem, Ticket};

pub const TICKETS_COLLECTION: &str = "tickets";
pub const OPEN_ITEMS_COLLECTION: &str = "openItems";

/// Connected client plus the database holding both collections
#[derive(Debug, Clone)]
pub struct Session {
    client: Client,
    db: Database,
}

impl Session {
    pub async fn connect(settings: &Settings) -> Result<Self> {
        let client = create_client(&settings.mongodb_uri).await?;
        let db = get_database(&client, &settings.database_name);

        tracing::info!("Using database '{}'", settings.database_name);
        Ok(Self { client, db })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn tickets(&self) -> Collection<Ticket> {
        self.db.collection(TICKETS_COLLECTION)
    }

    pub fn open_items(&self) -> Collection<OpenItem> {
        self.db.collection(OPEN_ITEMS_COLLECTION)
    }

    pub async fn shutdown(self) {
        self.client.shutdown().await;
        tracing::info!("MongoDB client shut down");
    }
}

/// Create MongoDB connection
pub async fn create_client(uri: &str) -> Result<Client> {
    let client = Client::with_uri_str(uri)
        .await
        .map_err(|source| AppError::Connect {
            uri: uri.to_string(),
            source,
        })?;

    // Ping to verify connection
    client
        .database("admin")
        .run_command(doc! {"ping": 1})
        .await
        .map_err(AppError::Ping)?;

    tracing::info!("Successfully connected to MongoDB");
    Ok(client)
}

/// Get database handle
pub fn get_database(client: &Client, db_name: &str) -> Database {
    client.database(db_name)
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Every failure the demo run can hit. None of them are recovered from.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to connect to MongoDB at {uri}")]
    Connect {
        uri: String,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("Failed to ping MongoDB")]
    Ping(#[source] mongodb::error::Error),

    #[error("Failed to insert into '{collection}'")]
    Insert {
        collection: &'static str,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("Failed to query '{collection}'")]
    Query {
        collection: &'static str,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("No document with CID {cid} in '{collection}'")]
    NotFound { collection: &'static str, cid: i64 },

    #[error("Failed to run aggregation on '{collection}'")]
    Aggregate {
        collection: &'static str,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("Failed to advance aggregation cursor")]
    Cursor(#[source] mongodb::error::Error),

    #[error("Failed to decode aggregation result")]
    Decode(#[source] mongodb::error::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = AppError::NotFound {
            collection: "tickets",
            cid: 7,
        };
        assert_eq!(err.to_string(), "No document with CID 7 in 'tickets'");
    }
}

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE_NAME: &str = "ticket_join";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mongodb_uri: String,
    pub database_name: String,
}

impl Settings {
    /// Load settings from the process environment (and `.env`, if present)
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {:?}", path);
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongodb_uri = lookup("MONGODB_URI")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MONGODB_URI.to_string());

        let database_name = lookup("MONGODB_DATABASE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string());

        Self {
            mongodb_uri,
            database_name,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

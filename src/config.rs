use std::env;

use anyhow::{Context, Result};

/// Default number of analyses shown in "recent" listings.
pub const DEFAULT_RECENT_LIMIT: u32 = 10;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default, so an empty environment is a valid configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file (RAPID_DB_PATH, default ./rapid.db)
    pub db_path: String,
    /// How many analyses the recent list shows (RAPID_RECENT_LIMIT, default 10)
    pub recent_limit: u32,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let recent_limit = match env::var("RAPID_RECENT_LIMIT") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("RAPID_RECENT_LIMIT must be a whole number, got '{raw}'"))?,
            Err(_) => DEFAULT_RECENT_LIMIT,
        };

        if recent_limit == 0 {
            anyhow::bail!("RAPID_RECENT_LIMIT must be at least 1");
        }

        Ok(Self {
            db_path: env::var("RAPID_DB_PATH").unwrap_or_else(|_| "./rapid.db".to_string()),
            recent_limit,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: "./rapid.db".to_string(),
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

// src/config.rs
//
// Runtime settings from the environment, after an optional .env file.

use std::{env, fmt::Display, str::FromStr};

use anyhow::{anyhow, Result};
use tracing::info;

pub struct Config {
    pub port: u16,
    pub mongo_url: Option<String>,
    pub mongo_db: Option<String>,
}

impl Config {
    /// Reads the environment, after merging in a `.env` file if there is one.
    pub fn load() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment from {}", path.display());
        }

        Ok(Self {
            port: try_load("PORT", "5000")?,
            mongo_url: optional("MONGO_URL"),
            mongo_db: optional("MONGO_DB"),
        })
    }
}

fn optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => {
            info!("{key} not set");
            None
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| anyhow!("Invalid {key} value: {e}"))
}

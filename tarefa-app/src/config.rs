//! Configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `TAREFA_DB`: path of the SQLite database file
//!   (default: `task_manager.db`)
//! - `TAREFA_EMAIL_DOMAINS`: comma-separated email domains accepted at
//!   registration (default: `gmail,hotmail,outlook,yahoo`)
//! - `RUST_LOG`: log filter (default: info)

use serde::{Deserialize, Serialize};
use std::env;
use tarefa_core::StoreConfig;

use crate::validate::EmailPolicy;

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the SQLite database file.
    pub database_path: String,

    /// Email domains accepted at registration.
    pub email_domains: Vec<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every setting has a default, so this only fails on malformed
    /// values (an empty domain list).
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let database_path =
            env::var("TAREFA_DB").unwrap_or_else(|_| "task_manager.db".to_string());

        let email_domains = match env::var("TAREFA_EMAIL_DOMAINS") {
            Ok(raw) => {
                let domains: Vec<String> = raw
                    .split(',')
                    .map(|d| d.trim().to_string())
                    .filter(|d| !d.is_empty())
                    .collect();
                if domains.is_empty() {
                    anyhow::bail!("TAREFA_EMAIL_DOMAINS must name at least one domain");
                }
                domains
            }
            Err(_) => EmailPolicy::DEFAULT_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
        };

        Ok(Self {
            database_path,
            email_domains,
        })
    }

    /// Store configuration for [`tarefa_core::Store::open`].
    pub fn store(&self) -> StoreConfig {
        StoreConfig::file(&self.database_path)
    }

    /// Email policy built from the configured domain allow-list.
    pub fn email_policy(&self) -> EmailPolicy {
        EmailPolicy::new(self.email_domains.clone())
    }
}

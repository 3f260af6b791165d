//! Document store connection settings.
//!
//! # Environment Variables
//!
//! - `DB_URI`: MongoDB connection string (default `mongodb://localhost:27017`)
//! - `DB_NAME`: Database holding the CRM collections (default `crmDB`)

use std::env;

pub const DEFAULT_DATABASE_NAME: &str = "crmDB";

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database_name: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            uri: env::var("DB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DB_NAME")
                .unwrap_or_else(|_| DEFAULT_DATABASE_NAME.to_string()),
        }
    }
}

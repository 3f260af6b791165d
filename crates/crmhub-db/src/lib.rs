//! # CRM Hub DB
//!
//! Document store access for the CRM Hub API.
//!
//! Handlers never talk to MongoDB directly; they go through the
//! [`DocumentStore`] trait, which exposes the handful of single-document
//! operations the API needs. [`MongoStore`] is the production implementation.
//! With the `test-utils` feature, [`MemoryStore`] provides an in-process
//! implementation with the same observable behaviour.
//!
//! # Example
//!
//! ```ignore
//! use crmhub_config::DatabaseConfig;
//! use crmhub_db::{DocumentStore, MongoStore, collections};
//!
//! let store = MongoStore::connect(&DatabaseConfig::from_env()).await?;
//! let businesses = store.find_all(collections::BUSINESSES).await?;
//! ```

pub mod codec;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod mongo;
pub mod store;

pub use codec::{document_to_json, json_to_bson, map_to_document, parse_object_id};
pub use error::StoreError;
#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::{DeleteResult, DocumentStore, InsertOneResult, UpdateResult};

// Re-export the BSON types used across the API surface
pub use mongodb::bson;

/// Collection names inside the CRM database.
pub mod collections {
    pub const USERS: &str = "usersCollection";
    pub const BUSINESSES: &str = "businessCollections";
    pub const REGULAR_CONTENTS: &str = "regularContentCollections";
}

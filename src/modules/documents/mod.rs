//! Pass-through storage service shared by every collection.
//!
//! Each operation is exactly one [`DocumentStore`](crmhub_db::DocumentStore)
//! call. Bodies are untyped JSON objects and are stored as-is.

pub mod service;

pub use service::DocumentService;

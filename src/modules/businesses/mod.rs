//! `/businesses`: free-form business documents, no authentication.

pub mod controller;
pub mod router;

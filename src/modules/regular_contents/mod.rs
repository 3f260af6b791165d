//! `/regularcontents`: free-form content documents, no authentication.

pub mod controller;
pub mod router;

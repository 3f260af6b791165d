//! # CRM Hub Core
//!
//! Core types shared by every CRM Hub crate.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use crmhub_core::AppError;
//!
//! let error = AppError::not_found("User not found");
//! ```

pub mod errors;

pub use errors::{AppError, ErrorKind};

//! Middleware modules for request processing.
//!
//! - [`auth`]: Bearer-token authentication middleware and the [`auth::AuthUser`] extractor
//! - [`role`]: Admin guard
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. [`auth::require_auth`] verifies the token and stores the [`Claims`] in
//!    the request extensions
//! 3. [`role::require_admin`] (admin routes only) checks `claims.role`
//! 4. Handlers read the identity through [`auth::AuthUser`]
//!
//! The guards are attached per route by [`crate::router`], never by handlers.
//!
//! [`Claims`]: crmhub_auth::Claims

pub mod auth;
pub mod role;

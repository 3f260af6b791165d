//! # CRM Hub API
//!
//! A small REST API built with Rust, Axum, and MongoDB that stores three
//! collections (users, businesses, regular contents) behind token-based
//! authentication, with an admin-only user management area.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Admin bootstrap (create-admin)
//! ├── middleware/       # Bearer-token authentication and admin guard
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Login
//! │   ├── users/       # Admin user management and profile
//! │   ├── documents/   # Pass-through service for free-form collections
//! │   ├── businesses/  # /businesses handlers
//! │   ├── regular_contents/ # /regularcontents handlers
//! │   └── home/        # Greeting route
//! ├── docs.rs           # OpenAPI document
//! ├── extract.rs        # JSON body extractor with JSON error bodies
//! ├── logging.rs        # Request logging middleware and subscriber setup
//! ├── router.rs         # Declarative route table and dispatcher
//! └── state.rs          # Shared application state
//! ```
//!
//! Feature modules follow the `controller.rs` (HTTP handlers) /
//! `service.rs` (one storage call each) / `model.rs` (DTOs) / `router.rs`
//! (route table entries) split.
//!
//! ## Authentication
//!
//! `POST /login` returns a JWT valid for 7 days carrying the user's id,
//! username and role. Guarded routes expect `Authorization: Bearer <token>`.
//! Tokens are not revocable.
//!
//! ## Environment Variables
//!
//! ```bash
//! DB_URI=mongodb://localhost:27017
//! DB_NAME=crmDB
//! JWT_SECRET=your-secure-secret-key
//! JWT_EXPIRY=604800            # seconds
//! HOST=0.0.0.0
//! PORT=3000
//! ALLOWED_ORIGINS=https://app.example.com   # unset: any origin
//! LOG_DIR=storage/logs
//! ```
//!
//! ## Creating the first admin
//!
//! ```bash
//! cargo run --bin crmhub-cli -- create-admin
//! ```
//!
//! ## Known weaknesses kept for compatibility
//!
//! - Passwords are stored and compared in plain text
//! - Failed logins answer 404, and the login response includes the password
//! - The signing secret falls back to a hardcoded value when unset

pub mod cli;
pub mod docs;
pub mod extract;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use crmhub_auth;
pub use crmhub_config;
pub use crmhub_core;
pub use crmhub_db;

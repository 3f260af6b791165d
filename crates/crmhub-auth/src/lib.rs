//! # CRM Hub Auth
//!
//! Session token codec for the CRM Hub API.
//!
//! - [`claims`]: Token payload ([`Claims`]) and the identity it is issued for ([`TokenSubject`])
//! - [`jwt`]: Token issuance and verification
//!
//! Tokens are stateless HS256 JWTs. There is no revocation: a token stays
//! valid until its `exp`, whatever happens to the user afterwards.
//!
//! # Example
//!
//! ```ignore
//! use crmhub_auth::{TokenSubject, issue_token, verify_token};
//! use crmhub_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let subject = TokenSubject {
//!     id: user_id.to_hex(),
//!     username: "bob".to_string(),
//!     role: "user".to_string(),
//! };
//!
//! let token = issue_token(&subject, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.subject(), subject);
//! ```

pub mod claims;
pub mod jwt;

pub use claims::{ADMIN_ROLE, Claims, DEFAULT_ROLE, TokenSubject};
pub use jwt::{TokenError, issue_token, issue_token_at, verify_token};

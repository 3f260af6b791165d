//! JWT claim structures.

use serde::{Deserialize, Serialize};

pub const ADMIN_ROLE: &str = "admin";
pub const DEFAULT_ROLE: &str = "user";

/// Identity a token is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSubject {
    /// Hex form of the user's document id.
    pub id: String,
    pub username: String,
    pub role: String,
}

/// Decoded session token payload.
///
/// Field names are part of the wire format shared with already-issued tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    pub username: String,
    pub role: String,
    /// Issued-at (Unix timestamp)
    pub iat: usize,
    /// Expiration (Unix timestamp)
    pub exp: usize,
}

impl Claims {
    pub fn subject(&self) -> TokenSubject {
        TokenSubject {
            id: self.id.clone(),
            username: self.username.clone(),
            role: self.role.clone(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

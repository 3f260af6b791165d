use std::env;

/// Secret used when `JWT_SECRET` is not set. Insecure, kept for compatibility
/// with existing deployments that never configured one.
pub const FALLBACK_SECRET: &str = "your_jwt_secret";

/// Seven days.
pub const DEFAULT_TOKEN_EXPIRY: i64 = 604800;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds.
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").unwrap_or_else(|_| FALLBACK_SECRET.to_string()),
            token_expiry: env::var("JWT_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TOKEN_EXPIRY),
        }
    }

    pub fn uses_fallback_secret(&self) -> bool {
        self.secret == FALLBACK_SECRET
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: FALLBACK_SECRET.to_string(),
            token_expiry: DEFAULT_TOKEN_EXPIRY,
        }
    }
}

//! Token issuance and verification.
//!
//! Tokens are signed with the process-wide secret from [`JwtConfig`] and
//! expire `token_expiry` seconds after issuance (7 days by default).
//! Verification applies no clock leeway.

use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind as JwtErrorKind,
};
use thiserror::Error;

use crmhub_config::JwtConfig;

use crate::claims::{Claims, TokenSubject};

#[derive(Debug, Error)]
pub enum TokenError {
    /// Bad signature or malformed payload.
    #[error("invalid token")]
    InvalidToken,
    #[error("token has expired")]
    ExpiredToken,
    #[error("failed to sign token: {0}")]
    Encoding(#[source] jsonwebtoken::errors::Error),
}

/// Issues a token for `subject`, valid from now.
pub fn issue_token(subject: &TokenSubject, jwt_config: &JwtConfig) -> Result<String, TokenError> {
    issue_token_at(subject, jwt_config, Utc::now().timestamp())
}

/// Issues a token as if it had been signed at `issued_at` (Unix seconds).
pub fn issue_token_at(
    subject: &TokenSubject,
    jwt_config: &JwtConfig,
    issued_at: i64,
) -> Result<String, TokenError> {
    let iat = issued_at.max(0) as usize;
    let exp = issued_at.saturating_add(jwt_config.token_expiry).max(0) as usize;

    let claims = Claims {
        id: subject.id.clone(),
        username: subject.username.clone(),
        role: subject.role.clone(),
        iat,
        exp,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(TokenError::Encoding)
}

/// Checks signature and expiry, returning the embedded claims unchanged.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|err| match err.kind() {
        JwtErrorKind::ExpiredSignature => TokenError::ExpiredToken,
        _ => TokenError::InvalidToken,
    })
}

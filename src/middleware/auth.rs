use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crmhub_auth::{Claims, verify_token};
use crmhub_core::AppError;

use crate::state::AppState;

const BEARER_PREFIX: &[u8] = b"Bearer ";

/// Verifies the bearer token and attaches its [`Claims`] to the request.
///
/// - No header, or one without the `Bearer ` prefix: 403 `MissingToken`
/// - Token that is not UTF-8, has a bad signature or a malformed payload, or
///   has expired: 401 `Unauthorized`
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(req.headers()).ok_or_else(AppError::missing_token)?;
    let token = std::str::from_utf8(token).map_err(|_| {
        debug!("Rejected non UTF-8 bearer token");
        AppError::unauthorized()
    })?;

    let claims = verify_token(token, &state.jwt_config).map_err(|err| {
        debug!(error = %err, "Rejected bearer token");
        AppError::unauthorized()
    })?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// The raw token bytes after the literal `Bearer ` scheme prefix.
pub fn bearer_token(headers: &HeaderMap) -> Option<&[u8]> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.as_bytes().strip_prefix(BEARER_PREFIX))
}

/// Extractor for the identity attached by [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn id(&self) -> &str {
        &self.0.id
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(AppError::unauthorized)
    }
}

//! Role-based authorization middleware.
//!
//! Must run after [`require_auth`](crate::middleware::auth::require_auth) so
//! that the verified claims are already in the request extensions.

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::warn;

use crmhub_auth::Claims;
use crmhub_core::AppError;

/// Lets the request through only when the attached claims carry the `admin`
/// role. Missing claims are treated the same as a non-admin identity.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let allowed = req
        .extensions()
        .get::<Claims>()
        .is_some_and(Claims::is_admin);

    if !allowed {
        warn!(path = %req.uri().path(), "Non-admin identity rejected");
        return Err(AppError::forbidden());
    }

    Ok(next.run(req).await)
}

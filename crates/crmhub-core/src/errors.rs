//! Application error type.
//!
//! Every failure a handler can surface is an [`AppError`]: an [`ErrorKind`]
//! that fixes the HTTP status, plus an [`anyhow::Error`] carrying the message
//! (and, for server errors, the underlying cause). Responses are always a JSON
//! object of the form `{ "error": "<message>" }`.

use anyhow::{Error, anyhow};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

const SERVER_ERROR_MESSAGE: &str = "Server error";
const UPDATE_FAILED_MESSAGE: &str = "Failed to update status";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Authorization header absent or not a `Bearer ` credential.
    MissingToken,
    /// Token failed signature or expiry checks.
    Unauthorized,
    /// Authenticated identity lacks the required role.
    Forbidden,
    DuplicateUsername,
    NotFound,
    /// Login failed. Surfaced as 404, not 401.
    InvalidCredentials,
    /// Request body could not be decoded.
    BadRequest,
    ServerError,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::MissingToken | ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::DuplicateUsername | ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound | ErrorKind::InvalidCredentials => StatusCode::NOT_FOUND,
            ErrorKind::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            error: err.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }

    pub fn missing_token() -> Self {
        Self::new(ErrorKind::MissingToken, anyhow!("Token is required"))
    }

    pub fn unauthorized() -> Self {
        Self::new(ErrorKind::Unauthorized, anyhow!("Invalid or expired token"))
    }

    pub fn forbidden() -> Self {
        Self::new(ErrorKind::Forbidden, anyhow!("Access denied. Admins only."))
    }

    pub fn duplicate_username() -> Self {
        Self::new(ErrorKind::DuplicateUsername, anyhow!("Username already exists"))
    }

    pub fn not_found(message: &str) -> Self {
        Self::new(ErrorKind::NotFound, anyhow!("{message}"))
    }

    pub fn invalid_credentials() -> Self {
        Self::new(
            ErrorKind::InvalidCredentials,
            anyhow!("Invalid username or password"),
        )
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, anyhow!("{}", message.into()))
    }

    /// Wraps an unexpected failure. The client only sees a generic message;
    /// the cause is kept for logging.
    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::ServerError, err.into().context(SERVER_ERROR_MESSAGE))
    }

    /// Server error raised by the partial-update routes.
    pub fn update_failed<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(
            ErrorKind::ServerError,
            err.into().context(UPDATE_FAILED_MESSAGE),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.kind == ErrorKind::ServerError {
            tracing::error!(error = %format!("{:#}", self.error), "Request failed");
        }

        // `Display` on an anyhow error prints only the outermost context, so
        // server errors never leak their cause.
        let body = Json(json!({
            "error": self.error.to_string()
        }));

        (self.status(), body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorKind::MissingToken.status(), StatusCode::FORBIDDEN);
        assert_eq!(ErrorKind::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorKind::Forbidden.status(), StatusCode::FORBIDDEN);
        assert_eq!(ErrorKind::DuplicateUsername.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorKind::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorKind::InvalidCredentials.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorKind::BadRequest.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorKind::ServerError.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let (status, body) = body_json(AppError::duplicate_username()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Username already exists" }));
    }

    #[tokio::test]
    async fn test_server_error_hides_cause() {
        let (status, body) = body_json(AppError::internal(anyhow!("connection reset"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Server error");
    }

    #[tokio::test]
    async fn test_update_failed_message() {
        let (status, body) = body_json(AppError::update_failed(anyhow!("write conflict"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to update status");
    }

    #[test]
    fn test_question_mark_conversion_is_server_error() {
        fn fails() -> Result<(), AppError> {
            Err(std::io::Error::other("disk gone"))?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert_eq!(err.kind, ErrorKind::ServerError);
        assert!(format!("{:#}", err.error).contains("disk gone"));
    }
}

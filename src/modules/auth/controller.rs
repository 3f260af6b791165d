use axum::{Json, extract::State};
use tracing::instrument;

use crmhub_core::AppError;

use super::model::{LoginRequest, LoginResponse};
use super::service::AuthService;
use crate::docs::ErrorResponse;
use crate::extract::JsonBody;
use crate::state::AppState;

/// Login and receive a JWT
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Bad request body", body = ErrorResponse),
        (status = 404, description = "Invalid username or password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login(state.store.as_ref(), dto, &state.jwt_config).await?;
    Ok(Json(response))
}

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Map, Value};
use tracing::instrument;

use crmhub_core::AppError;
use crmhub_db::UpdateResult;

use crate::docs::ErrorResponse;
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::modules::users::model::{
    CreateUserRequest, CreateUserResponse, MessageResponse, ProfileResponse,
};
use crate::modules::users::service::{USERS, UserService};
use crate::state::AppState;

/// Create a user (admin only)
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = CreateUserResponse),
        (status = 400, description = "Username already exists", body = ErrorResponse),
        (status = 401, description = "Invalid or expired token", body = ErrorResponse),
        (status = 403, description = "Missing token or not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(dto): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreateUserResponse>), AppError> {
    let user_id = UserService::create_user(state.store.as_ref(), dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            message: "User created successfully".to_string(),
            user_id,
        }),
    ))
}

/// List every user (admin only)
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All user documents, passwords included"),
        (status = 401, description = "Invalid or expired token", body = ErrorResponse),
        (status = 403, description = "Missing token or not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let users = USERS.list(state.store.as_ref()).await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User document id")),
    responses(
        (status = 200, description = "User document"),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let user = USERS.get(state.store.as_ref(), &id).await?;
    Ok(Json(user))
}

#[utoipa::path(
    patch,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User document id")),
    responses(
        (status = 200, description = "Raw update result"),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Failed to update status", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, changes))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(changes): JsonBody<Map<String, Value>>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = USERS.update(state.store.as_ref(), &id, changes).await?;
    Ok(Json(result))
}

/// Delete a user (admin only)
///
/// Tokens already issued to the user stay valid until they expire.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User document id")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    USERS.delete(state.store.as_ref(), &id).await?;

    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}

/// Current user's profile from the JWT identity
#[utoipa::path(
    get,
    path = "/profile",
    responses(
        (status = 200, description = "User profile without password", body = ProfileResponse),
        (status = 401, description = "Invalid or expired token", body = ErrorResponse),
        (status = 403, description = "Token is required", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, auth_user), fields(user_id = %auth_user.id()))]
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<ProfileResponse>, AppError> {
    let user = UserService::get_profile(state.store.as_ref(), auth_user.id()).await?;
    Ok(Json(ProfileResponse { user }))
}

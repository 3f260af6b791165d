use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Fields are stored exactly as submitted, whatever their JSON type. Absent
/// fields decode as `null`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default)]
    #[schema(value_type = String)]
    pub username: Value,
    #[serde(default)]
    #[schema(value_type = String)]
    pub password: Value,
    /// Replaced by `"user"` when absent, `null`, `false`, `0` or `""`.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub role: Value,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserResponse {
    pub message: String,
    /// Generated document id.
    #[schema(value_type = String)]
    pub user_id: Value,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    /// Stored user document with `password` removed.
    #[schema(value_type = Object)]
    pub user: Value,
}

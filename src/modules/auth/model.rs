use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Compared against the stored user as submitted, without type coercion.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    #[schema(value_type = String)]
    pub username: Value,
    #[serde(default)]
    #[schema(value_type = String)]
    pub password: Value,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    /// The stored user document, password field included.
    #[schema(value_type = Object)]
    pub user: Value,
}

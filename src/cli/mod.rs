//! Out-of-band administration helpers used by the `crmhub-cli` binary.

use serde_json::Value;

use crmhub_auth::ADMIN_ROLE;
use crmhub_core::AppError;
use crmhub_db::DocumentStore;

use crate::modules::users::model::CreateUserRequest;
use crate::modules::users::service::UserService;

/// Inserts a user with the admin role, failing if the username is taken.
///
/// Every user-management route needs an admin token, so the first admin has
/// to be created here.
pub async fn create_admin(
    store: &dyn DocumentStore,
    username: &str,
    password: &str,
) -> Result<Value, AppError> {
    let dto = CreateUserRequest {
        username: Value::from(username),
        password: Value::from(password),
        role: Value::from(ADMIN_ROLE),
    };

    UserService::create_user(store, dto).await
}

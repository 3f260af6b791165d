use tracing::{instrument, warn};

use crmhub_auth::{TokenSubject, issue_token};
use crmhub_config::JwtConfig;
use crmhub_core::AppError;
use crmhub_db::{DocumentStore, bson::doc, collections, document_to_json, json_to_bson};

use crate::modules::auth::model::{LoginRequest, LoginResponse};
use crate::modules::users::service::UserService;

pub struct AuthService;

impl AuthService {
    /// Checks the submitted password against the stored one and issues a
    /// session token.
    ///
    /// Passwords are stored and compared as plain values: `123` and `"123"`
    /// are different passwords. An unknown username and a wrong password
    /// produce the same error.
    #[instrument(skip(store, dto, jwt_config), fields(username = %dto.username))]
    pub async fn login(
        store: &dyn DocumentStore,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let username = json_to_bson(&dto.username)?;
        let password = json_to_bson(&dto.password)?;

        let Some(user) = store
            .find_one(collections::USERS, doc! { "username": username })
            .await?
        else {
            warn!("Login attempt for unknown username");
            return Err(AppError::invalid_credentials());
        };

        if user.get("password") != Some(&password) {
            warn!("Login attempt with wrong password");
            return Err(AppError::invalid_credentials());
        }

        let id = user.get_object_id("_id").map_err(AppError::internal)?;
        let subject = TokenSubject {
            id: id.to_hex(),
            username: UserService::claim_text(&user, "username"),
            role: UserService::claim_text(&user, "role"),
        };
        let token = issue_token(&subject, jwt_config)?;

        Ok(LoginResponse {
            message: "Login successful".to_string(),
            token,
            user: document_to_json(user),
        })
    }
}

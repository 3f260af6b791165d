use serde_json::Value;
use tracing::{info, instrument};

use crmhub_auth::DEFAULT_ROLE;
use crmhub_core::AppError;
use crmhub_db::{
    DocumentStore,
    bson::{Bson, Document, doc},
    codec::bson_to_json,
    collections, document_to_json, json_to_bson,
};

use crate::modules::documents::DocumentService;
use crate::modules::users::model::CreateUserRequest;

const USER_NOT_FOUND: &str = "User not found";

/// Plain CRUD over the users collection.
pub const USERS: DocumentService = DocumentService::new(collections::USERS, USER_NOT_FOUND);

pub struct UserService;

impl UserService {
    /// Inserts a user after checking that the username is free.
    ///
    /// The check and the insert are two separate storage calls, so two
    /// concurrent requests for the same username can both succeed.
    #[instrument(skip(store, dto), fields(username = %dto.username))]
    pub async fn create_user(
        store: &dyn DocumentStore,
        dto: CreateUserRequest,
    ) -> Result<Value, AppError> {
        let username = json_to_bson(&dto.username)?;

        let existing = store
            .find_one(collections::USERS, doc! { "username": username.clone() })
            .await?;

        if existing.is_some() {
            return Err(AppError::duplicate_username());
        }

        let role = if is_falsy(&dto.role) {
            Value::String(DEFAULT_ROLE.to_string())
        } else {
            dto.role
        };
        let password = json_to_bson(&dto.password)?;
        let stored_role = json_to_bson(&role)?;

        let result = store
            .insert_one(
                collections::USERS,
                doc! {
                    "username": username,
                    "password": password,
                    "role": stored_role,
                },
            )
            .await?;

        info!(role = %role, "User created");
        Ok(bson_to_json(result.inserted_id))
    }

    /// The caller's own user document, without its password.
    #[instrument(skip(store))]
    pub async fn get_profile(store: &dyn DocumentStore, user_id: &str) -> Result<Value, AppError> {
        let id = USERS.parse_id(user_id)?;

        let mut user = store
            .find_by_id(collections::USERS, id)
            .await?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))?;

        user.remove("password");
        Ok(document_to_json(user))
    }

    /// A stored user field as token claim text. Strings are taken as-is,
    /// missing or `null` fields are empty, other values use their JSON form.
    pub fn claim_text(user: &Document, key: &str) -> String {
        match user.get(key) {
            None | Some(Bson::Null) => String::new(),
            Some(Bson::String(text)) => text.clone(),
            Some(other) => bson_to_json(other.clone()).to_string(),
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

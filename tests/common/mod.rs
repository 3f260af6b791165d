#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use crmhub::router::init_router;
use crmhub::state::AppState;
use crmhub_auth::{TokenSubject, issue_token, issue_token_at};
use crmhub_config::{CorsConfig, JwtConfig};
use crmhub_db::bson::doc;
use crmhub_db::{DocumentStore, MemoryStore, collections};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub jwt_config: JwtConfig,
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        ..JwtConfig::default()
    }
}

pub fn setup_test_app() -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let jwt_config = test_jwt_config();

    let state = AppState {
        store: store.clone(),
        jwt_config: jwt_config.clone(),
        cors_config: CorsConfig::default(),
    };

    TestApp {
        router: init_router(state),
        store,
        jwt_config,
    }
}

pub struct TestUser {
    pub id: String,
    pub username: String,
    pub role: String,
}

impl TestApp {
    /// Inserts a user straight into storage, bypassing the admin-only route.
    pub async fn seed_user(&self, username: &str, password: &str, role: &str) -> TestUser {
        let result = self
            .store
            .insert_one(
                collections::USERS,
                doc! { "username": username, "password": password, "role": role },
            )
            .await
            .unwrap();

        TestUser {
            id: result.inserted_id.as_object_id().unwrap().to_hex(),
            username: username.to_string(),
            role: role.to_string(),
        }
    }

    pub fn token_for(&self, user: &TestUser) -> String {
        issue_token(&subject(user), &self.jwt_config).unwrap()
    }

    pub fn expired_token_for(&self, user: &TestUser) -> String {
        let eight_days_ago = chrono::Utc::now().timestamp() - 8 * 24 * 60 * 60;
        issue_token_at(&subject(user), &self.jwt_config, eight_days_ago).unwrap()
    }

    pub async fn admin_token(&self) -> String {
        let admin = self.seed_user("admin", "admin-pass", "admin").await;
        self.token_for(&admin)
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        (status, body)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(request("GET", uri, token, None)).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(request("POST", uri, token, Some(body))).await
    }

    pub async fn patch(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(request("PATCH", uri, token, Some(body))).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(request("DELETE", uri, token, None)).await
    }
}

fn subject(user: &TestUser) -> TokenSubject {
    TokenSubject {
        id: user.id.clone(),
        username: user.username.clone(),
        role: user.role.clone(),
    }
}

pub fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

mod common;

use axum::http::StatusCode;
use common::setup_test_app;
use crmhub_db::collections;
use serde_json::json;

#[tokio::test]
async fn test_admin_creates_user_who_can_login() {
    let app = setup_test_app();
    let admin_token = app.admin_token().await;

    let (status, body) = app
        .post(
            "/users",
            Some(&admin_token),
            json!({ "username": "bob", "password": "x", "role": "user" }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User created successfully");
    let user_id = body["userId"].as_str().unwrap().to_string();
    assert_eq!(user_id.len(), 24);

    let (status, body) = app
        .post("/login", None, json!({ "username": "bob", "password": "x" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].is_string());
    assert_eq!(body["user"]["role"], "user");
    assert_eq!(body["user"]["_id"], user_id.as_str());
}

#[tokio::test]
async fn test_created_user_role_defaults_to_user() {
    let app = setup_test_app();
    let admin_token = app.admin_token().await;

    let (status, body) = app
        .post(
            "/users",
            Some(&admin_token),
            json!({ "username": "carol", "password": "pw" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/users/{}", body["userId"].as_str().unwrap());
    let (status, user) = app.get(&uri, Some(&admin_token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["role"], "user");
}

#[tokio::test]
async fn test_duplicate_username_leaves_storage_unchanged() {
    let app = setup_test_app();
    let admin_token = app.admin_token().await;
    app.seed_user("bob", "x", "user").await;
    let before = app.store.count(collections::USERS).await;

    let (status, body) = app
        .post(
            "/users",
            Some(&admin_token),
            json!({ "username": "bob", "password": "other" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Username already exists" }));
    assert_eq!(app.store.count(collections::USERS).await, before);
}

#[tokio::test]
async fn test_non_admin_is_forbidden() {
    let app = setup_test_app();
    let bob = app.seed_user("bob", "x", "user").await;
    let token = app.token_for(&bob);

    let (status, body) = app.get("/users", Some(&token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "error": "Access denied. Admins only." }));

    let (status, _) = app
        .post(
            "/users",
            Some(&token),
            json!({ "username": "mallory", "password": "x", "role": "admin" }),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(app.store.count(collections::USERS).await, 1);
}

#[tokio::test]
async fn test_role_check_is_case_sensitive() {
    let app = setup_test_app();
    let shouty = app.seed_user("shouty", "x", "Admin").await;
    let token = app.token_for(&shouty);

    let (status, _) = app.get("/users", Some(&token)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_user_routes_require_token() {
    let app = setup_test_app();

    let (status, body) = app.get("/users", None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Token is required");

    let (status, _) = app.delete("/users/65a1f0c2e4b0a1b2c3d4e5f6", None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_expired_admin_token_is_unauthorized() {
    let app = setup_test_app();
    let admin = app.seed_user("root", "pw", "admin").await;
    let token = app.expired_token_for(&admin);

    let (status, _) = app.get("/users", Some(&token)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_users_exposes_all_documents() {
    let app = setup_test_app();
    let admin_token = app.admin_token().await;
    app.seed_user("bob", "x", "user").await;

    let (status, body) = app.get("/users", Some(&admin_token)).await;

    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["username"], "admin");
    assert_eq!(users[1]["username"], "bob");
    assert_eq!(users[1]["password"], "x");
}

#[tokio::test]
async fn test_get_user_by_bad_or_unknown_id() {
    let app = setup_test_app();
    let admin_token = app.admin_token().await;

    for id in ["not-an-object-id", "65a1f0c2e4b0a1b2c3d4e5f6"] {
        let (status, body) = app.get(&format!("/users/{id}"), Some(&admin_token)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{id}");
        assert_eq!(body["error"], "User not found");
    }
}

#[tokio::test]
async fn test_patch_user_merges_fields() {
    let app = setup_test_app();
    let admin_token = app.admin_token().await;
    let bob = app.seed_user("bob", "x", "user").await;
    let uri = format!("/users/{}", bob.id);

    let (status, body) = app
        .patch(&uri, Some(&admin_token), json!({ "role": "admin" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matchedCount"], 1);
    assert_eq!(body["modifiedCount"], 1);

    let (_, user) = app.get(&uri, Some(&admin_token)).await;
    assert_eq!(user["role"], "admin");
    assert_eq!(user["username"], "bob");
    assert_eq!(user["password"], "x");
}

#[tokio::test]
async fn test_delete_user() {
    let app = setup_test_app();
    let admin_token = app.admin_token().await;
    let bob = app.seed_user("bob", "x", "user").await;
    let uri = format!("/users/{}", bob.id);

    let (status, body) = app.delete(&uri, Some(&admin_token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User deleted successfully" }));

    let (status, body) = app.delete(&uri, Some(&admin_token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_deleted_user_token_still_authenticates() {
    let app = setup_test_app();
    let admin_token = app.admin_token().await;
    let bob = app.seed_user("bob", "x", "user").await;
    let bob_token = app.token_for(&bob);

    app.delete(&format!("/users/{}", bob.id), Some(&admin_token)).await;

    // The token is still accepted; only the lookup behind it fails.
    let (status, body) = app.get("/profile", Some(&bob_token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_create_user_body_is_not_validated() {
    let app = setup_test_app();
    let admin_token = app.admin_token().await;

    let (status, body) = app
        .post("/users", Some(&admin_token), json!({ "password": "x" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/users/{}", body["userId"].as_str().unwrap());
    let (_, user) = app.get(&uri, Some(&admin_token)).await;
    assert_eq!(user["username"], serde_json::Value::Null);
    assert_eq!(user["role"], "user");
}

#[tokio::test]
async fn test_non_string_fields_are_stored_as_given() {
    let app = setup_test_app();
    let admin_token = app.admin_token().await;

    let (status, body) = app
        .post(
            "/users",
            Some(&admin_token),
            json!({ "username": "bob", "password": "x", "role": 7 }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/users/{}", body["userId"].as_str().unwrap());
    let (_, user) = app.get(&uri, Some(&admin_token)).await;
    assert_eq!(user["role"], 7);
}

#[tokio::test]
async fn test_numeric_password_round_trips_through_login() {
    let app = setup_test_app();
    let admin_token = app.admin_token().await;

    let (status, _) = app
        .post(
            "/users",
            Some(&admin_token),
            json!({ "username": "eve", "password": 123 }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .post("/login", None, json!({ "username": "eve", "password": 123 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["password"], 123);
    assert_eq!(body["user"]["role"], "user");

    let (status, _) = app
        .post("/login", None, json!({ "username": "eve", "password": "123" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

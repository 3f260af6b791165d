use axum::Router;
use axum::body::Body;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use crmhub::middleware::role::require_admin;
use crmhub_auth::Claims;
use tower::ServiceExt;

fn claims_with_role(role: &str) -> Claims {
    Claims {
        id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
        username: "tester".to_string(),
        role: role.to_string(),
        iat: 1234567890,
        exp: 9999999999,
    }
}

/// Router whose only route is admin-guarded, with `claims` pre-attached the
/// way the authentication middleware would.
fn guarded_app(claims: Option<Claims>) -> Router {
    Router::new()
        .route("/", get(|| async { "ok" }))
        .route_layer(middleware::from_fn(require_admin))
        .layer(middleware::from_fn(move |mut req: Request, next: Next| {
            let claims = claims.clone();
            async move {
                if let Some(claims) = claims {
                    req.extensions_mut().insert(claims);
                }
                let response: Response = next.run(req).await;
                response
            }
        }))
}

async fn status_for(claims: Option<Claims>) -> StatusCode {
    guarded_app(claims)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap()
        .status()
}

#[tokio::test]
async fn test_admin_passes() {
    assert_eq!(status_for(Some(claims_with_role("admin"))).await, StatusCode::OK);
}

#[tokio::test]
async fn test_other_roles_are_forbidden() {
    for role in ["user", "", "Admin", "administrator"] {
        assert_eq!(
            status_for(Some(claims_with_role(role))).await,
            StatusCode::FORBIDDEN,
            "{role:?}"
        );
    }
}

#[tokio::test]
async fn test_missing_claims_are_forbidden() {
    assert_eq!(status_for(None).await, StatusCode::FORBIDDEN);
}

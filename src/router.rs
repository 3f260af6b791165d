//! Route table and dispatcher.
//!
//! Every endpoint is declared once as a [`RouteSpec`] in its module's
//! `router.rs`. [`init_router`] folds the whole table into an axum
//! [`Router`], wrapping each entry in the middleware chain its [`Guard`]
//! names.

use axum::{
    Router,
    handler::Handler,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{MethodFilter, MethodRouter, on},
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crmhub_config::CorsConfig;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::auth::require_auth;
use crate::middleware::role::require_admin;
use crate::modules::auth::router::auth_routes;
use crate::modules::businesses::router::business_routes;
use crate::modules::home::router::home_routes;
use crate::modules::regular_contents::router::regular_content_routes;
use crate::modules::users::router::user_routes;
use crate::state::AppState;

/// Middleware chain run before a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Public,
    /// Valid bearer token.
    Authenticated,
    /// Valid bearer token whose role is `admin`.
    Admin,
}

pub struct RouteSpec {
    pub method: MethodFilter,
    pub path: &'static str,
    pub guard: Guard,
    endpoint: MethodRouter<AppState>,
}

impl RouteSpec {
    pub fn new<H, T>(method: MethodFilter, path: &'static str, guard: Guard, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self {
            method,
            path,
            guard,
            endpoint: on(method, handler),
        }
    }

    fn into_guarded(self, state: &AppState) -> MethodRouter<AppState> {
        match self.guard {
            Guard::Public => self.endpoint,
            Guard::Authenticated => self
                .endpoint
                .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
            // Layers added later run first: authentication, then the role check.
            Guard::Admin => self
                .endpoint
                .route_layer(middleware::from_fn(require_admin))
                .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
        }
    }
}

/// Every route the server answers, in declaration order.
pub fn route_table() -> Vec<RouteSpec> {
    [
        home_routes(),
        auth_routes(),
        user_routes(),
        business_routes(),
        regular_content_routes(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn init_router(state: AppState) -> Router {
    // Entries sharing a path are merged into one method router by axum.
    let api = route_table()
        .into_iter()
        .fold(Router::new(), |router, spec| {
            let path = spec.path;
            router.route(path, spec.into_guarded(&state))
        })
        // Runs after routing so the matched route template is known.
        .route_layer(middleware::from_fn(logging_middleware));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(api)
        .with_state(state.clone())
        .layer(cors_layer(&state.cors_config))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::permissive();
    }

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

use axum::routing::MethodFilter;

use crate::modules::auth::controller::login;
use crate::router::{Guard, RouteSpec};

pub fn auth_routes() -> Vec<RouteSpec> {
    vec![RouteSpec::new(MethodFilter::POST, "/login", Guard::Public, login)]
}

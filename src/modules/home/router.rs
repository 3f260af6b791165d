use axum::routing::MethodFilter;

use crate::modules::home::controller::hello;
use crate::router::{Guard, RouteSpec};

pub fn home_routes() -> Vec<RouteSpec> {
    vec![RouteSpec::new(MethodFilter::GET, "/", Guard::Public, hello)]
}

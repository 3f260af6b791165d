use axum::routing::MethodFilter;

use crate::modules::regular_contents::controller::{
    create_content, delete_content, get_content, list_contents, update_content,
};
use crate::router::{Guard, RouteSpec};

pub fn regular_content_routes() -> Vec<RouteSpec> {
    vec![
        RouteSpec::new(MethodFilter::GET, "/regularcontents", Guard::Public, list_contents),
        RouteSpec::new(MethodFilter::POST, "/regularcontents", Guard::Public, create_content),
        RouteSpec::new(MethodFilter::GET, "/regularcontents/{id}", Guard::Public, get_content),
        RouteSpec::new(MethodFilter::PATCH, "/regularcontents/{id}", Guard::Public, update_content),
        RouteSpec::new(MethodFilter::DELETE, "/regularcontents/{id}", Guard::Public, delete_content),
    ]
}

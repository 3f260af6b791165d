use axum::routing::MethodFilter;

use crate::modules::businesses::controller::{
    create_business, get_business, list_businesses, update_business,
};
use crate::router::{Guard, RouteSpec};

pub fn business_routes() -> Vec<RouteSpec> {
    vec![
        RouteSpec::new(MethodFilter::GET, "/businesses", Guard::Public, list_businesses),
        RouteSpec::new(MethodFilter::POST, "/businesses", Guard::Public, create_business),
        RouteSpec::new(MethodFilter::GET, "/businesses/{id}", Guard::Public, get_business),
        RouteSpec::new(MethodFilter::PATCH, "/businesses/{id}", Guard::Public, update_business),
    ]
}

use axum::routing::MethodFilter;

use crate::modules::users::controller::{
    create_user, delete_user, get_profile, get_user, list_users, update_user,
};
use crate::router::{Guard, RouteSpec};

pub fn user_routes() -> Vec<RouteSpec> {
    vec![
        RouteSpec::new(MethodFilter::POST, "/users", Guard::Admin, create_user),
        RouteSpec::new(MethodFilter::GET, "/users", Guard::Admin, list_users),
        RouteSpec::new(MethodFilter::GET, "/users/{id}", Guard::Admin, get_user),
        RouteSpec::new(MethodFilter::PATCH, "/users/{id}", Guard::Admin, update_user),
        RouteSpec::new(MethodFilter::DELETE, "/users/{id}", Guard::Admin, delete_user),
        RouteSpec::new(MethodFilter::GET, "/profile", Guard::Authenticated, get_profile),
    ]
}

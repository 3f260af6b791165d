use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use crate::modules::auth::model::{LoginRequest, LoginResponse};
use crate::modules::users::model::{
    CreateUserRequest, CreateUserResponse, MessageResponse, ProfileResponse,
};

/// Body of every error response.
#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::home::controller::hello,
        crate::modules::auth::controller::login,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::list_users,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
        crate::modules::users::controller::get_profile,
        crate::modules::businesses::controller::list_businesses,
        crate::modules::businesses::controller::create_business,
        crate::modules::businesses::controller::get_business,
        crate::modules::businesses::controller::update_business,
        crate::modules::regular_contents::controller::list_contents,
        crate::modules::regular_contents::controller::create_content,
        crate::modules::regular_contents::controller::get_content,
        crate::modules::regular_contents::controller::update_content,
        crate::modules::regular_contents::controller::delete_content,
    ),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            CreateUserRequest,
            CreateUserResponse,
            MessageResponse,
            ProfileResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Home", description = "Liveness greeting"),
        (name = "Authentication", description = "Username and password login"),
        (name = "Users", description = "Admin-only user management and self profile"),
        (name = "Businesses", description = "Free-form business documents"),
        (name = "Regular Contents", description = "Free-form content documents"),
    ),
    info(
        title = "CRM Hub API",
        version = "0.1.0",
        description = "Minimal CRUD backend over a document store with JWT authentication",
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_path() {
        let doc = ApiDoc::openapi();
        for path in [
            "/",
            "/login",
            "/users",
            "/users/{id}",
            "/profile",
            "/businesses",
            "/businesses/{id}",
            "/regularcontents",
            "/regularcontents/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{path}");
        }
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}

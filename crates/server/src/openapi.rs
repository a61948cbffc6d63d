// OpenAPI specification generation
//
// Used by the server (Swagger UI) and by the export-openapi binary.

use crate::api;
use crate::auth;
use crate::auth::TOKEN_HEADER;
use pessoas_core::{Person, UpdatePerson};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// OpenAPI documentation for the person API
#[derive(OpenApi)]
#[openapi(
    paths(
        api::persons::list_persons,
        api::persons::get_person,
        api::persons::create_person,
        api::persons::update_person,
        api::persons::delete_person,
        auth::routes::login,
        auth::routes::logout,
    ),
    components(
        schemas(
            Person,
            UpdatePerson,
            api::persons::CreatePersonRequest,
            api::common::ErrorResponse,
            api::common::AuthErrorResponse,
            auth::routes::LoginRequest,
            auth::routes::TokenResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "persons", description = "Person collection endpoints"),
        (name = "auth", description = "Login and logout")
    ),
    info(
        title = "Pessoas API",
        version = "0.1.0",
        description = "Token-protected CRUD over an in-memory person collection",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;

/// Registers the `x-access-token` header as the `access_token` scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "access_token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(TOKEN_HEADER))),
            );
        }
    }
}

impl ApiDoc {
    /// Generate the OpenAPI spec as a pretty-printed JSON string
    pub fn to_json() -> Result<String, serde_json::Error> {
        Self::openapi().to_pretty_json()
    }
}

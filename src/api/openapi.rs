//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{catalog_handler, registration_handler};
use crate::domain::{RegisteredService, Service, UserResponse};

/// OpenAPI documentation for the Service Registry API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Service Registry API",
        version = "0.1.0",
        description = "Registers users against a catalog of services with per-pair metadata",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Registration endpoints
        registration_handler::register,
        registration_handler::list_user_services,
        registration_handler::update_registration,
        // Catalog endpoints
        catalog_handler::list_services,
    ),
    components(
        schemas(
            // Domain types
            Service,
            UserResponse,
            RegisteredService,
            // Handler types
            registration_handler::RegisterRequest,
            registration_handler::UpdateRegistrationRequest,
        )
    ),
    tags(
        (name = "Registration", description = "User registration and editing"),
        (name = "Catalog", description = "Service catalog listing")
    )
)]
pub struct ApiDoc;

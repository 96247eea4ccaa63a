//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{NewUser, UserResponse};

/// OpenAPI documentation for the User Registry
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Registry",
        version = "0.1.0",
        description = "A user registration API with Axum, SeaORM, and clean architecture",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(user_handler::register_user),
    components(
        schemas(NewUser, UserResponse)
    ),
    tags(
        (name = "Users", description = "User registration")
    )
)]
pub struct ApiDoc;

//! OpenAPI documentation configuration.

use crate::controllers::HealthResponse;
use rollcall_core::{ErrorResponse, FieldError};
use rollcall_service::{UserRequest, UserResponse};
use utoipa::OpenApi;

/// OpenAPI documentation for the Rollcall API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rollcall API",
        version = "1.0.0",
        description = "CRUD service for user records",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // User endpoints
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::create_user,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::update_user,
        crate::controllers::user_controller::delete_user,
        // Home and health endpoints
        crate::controllers::home_controller::home,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            UserRequest,
            UserResponse,
            ErrorResponse,
            FieldError,
            HealthResponse,
        )
    ),
    tags(
        (name = "users", description = "User resource"),
        (name = "home", description = "Home page"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

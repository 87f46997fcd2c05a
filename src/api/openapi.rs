//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::api::routes;
use crate::domain::UserRecord;
use crate::types::MessageResponse;

/// OpenAPI documentation for the User Store API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Store API",
        version = "0.1.0",
        description = "In-memory user records with create, read, update and delete",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        routes::root,
        user_handler::list_users,
        user_handler::create_user,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            UserRecord,
            MessageResponse,
            user_handler::CreateUserRequest,
            user_handler::UpdateUserRequest,
        )
    ),
    tags(
        (name = "Users", description = "User record operations"),
        (name = "Meta", description = "Service identification")
    )
)]
pub struct ApiDoc;

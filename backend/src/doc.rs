//! OpenAPI documentation.
//!
//! [`ApiDoc`] registers every endpoint and the error schema wrappers. Debug
//! builds serve it through Swagger UI; `openapi-dump` prints it for tooling.

use utoipa::OpenApi;

use crate::inbound::http::exercises::{LogExerciseForm, LoggedExerciseResponse};
use crate::inbound::http::logs::{ExerciseLogResponse, LogItem};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{CreateUserForm, UserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Exercise tracker API",
        description = "Register users, log exercises and query exercise logs."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::exercises::log_exercise,
        crate::inbound::http::logs::get_log,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserResponse,
        CreateUserForm,
        LogExerciseForm,
        LoggedExerciseResponse,
        ExerciseLogResponse,
        LogItem,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "users", description = "User registration and listing"),
        (name = "exercises", description = "Exercise logging and log queries"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

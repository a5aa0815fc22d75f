//! Exercise logging endpoint.
//!
//! ```text
//! POST /api/users/{user_id}/exercises   description=run&duration=30&date=1990-01-01
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{LogExerciseRequest, LoggedExercise};
use crate::domain::Description;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_user_id;

/// Form body for logging an exercise.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LogExerciseForm {
    /// Free text. Missing means the empty string.
    #[serde(default)]
    pub description: Option<String>,
    /// Whole minutes.
    #[serde(default)]
    #[schema(example = "30")]
    pub duration: Option<String>,
    /// `YYYY-MM-DD` or ISO 8601. Blank means today (UTC).
    #[serde(default)]
    #[schema(example = "1990-01-01")]
    pub date: Option<String>,
}

/// The logged exercise merged with its owner. `_id` is the user's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoggedExerciseResponse {
    pub username: String,
    pub description: String,
    pub duration: u32,
    #[schema(example = "Mon Jan 01 1990")]
    pub date: String,
    #[serde(rename = "_id")]
    pub id: String,
}

impl From<LoggedExercise> for LoggedExerciseResponse {
    fn from(LoggedExercise { user, entry }: LoggedExercise) -> Self {
        Self {
            username: user.username().as_ref().to_owned(),
            description: entry.description().as_ref().to_owned(),
            duration: entry.duration().minutes(),
            date: entry.date().to_human_string(),
            id: user.id().to_string(),
        }
    }
}

/// Attach an exercise to an existing user.
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/exercises",
    params(("user_id" = String, Path, description = "Identifier of the owning user")),
    request_body(content = LogExerciseForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Exercise logged", body = LoggedExerciseResponse),
        (status = 400, description = "Invalid duration or date", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["exercises"],
    operation_id = "logExercise"
)]
#[post("/users/{user_id}/exercises")]
pub async fn log_exercise(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    form: web::Form<LogExerciseForm>,
) -> ApiResult<web::Json<LoggedExerciseResponse>> {
    let form = form.into_inner();
    let request = LogExerciseRequest {
        user_id: parse_user_id(&path)?,
        description: Description::new(form.description.unwrap_or_default()),
        duration: form.duration,
        date: form.date,
    };
    let logged = state.exercises.log_exercise(request).await?;
    Ok(web::Json(logged.into()))
}

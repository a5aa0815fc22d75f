//! Exercise log query endpoint.
//!
//! ```text
//! GET /api/users/{user_id}/logs?from=2024-01-01&to=2024-01-31&limit=10
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{ExerciseLog, LogQueryRequest};
use crate::domain::{ExerciseEntry, LogLimit};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_user_id;

/// Optional log filters. Dates are inclusive.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogQueryParams {
    /// Earliest date, `YYYY-MM-DD` or ISO 8601.
    pub from: Option<String>,
    /// Latest date, `YYYY-MM-DD` or ISO 8601.
    pub to: Option<String>,
    /// Positive cap on returned entries; anything else means 500.
    pub limit: Option<String>,
}

/// One entry in a user's log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LogItem {
    pub description: String,
    pub duration: u32,
    #[schema(example = "Mon Jan 01 1990")]
    pub date: String,
}

impl From<&ExerciseEntry> for LogItem {
    fn from(entry: &ExerciseEntry) -> Self {
        Self {
            description: entry.description().as_ref().to_owned(),
            duration: entry.duration().minutes(),
            date: entry.date().to_human_string(),
        }
    }
}

/// A user's filtered exercise log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExerciseLogResponse {
    pub username: String,
    /// Number of entries in `log`.
    pub count: usize,
    #[serde(rename = "_id")]
    pub id: String,
    pub log: Vec<LogItem>,
}

impl From<ExerciseLog> for ExerciseLogResponse {
    fn from(log: ExerciseLog) -> Self {
        Self {
            username: log.user.username().as_ref().to_owned(),
            count: log.count(),
            id: log.user.id().to_string(),
            log: log.entries.iter().map(LogItem::from).collect(),
        }
    }
}

/// Fetch a user's exercise log.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/logs",
    params(
        ("user_id" = String, Path, description = "Identifier of the user"),
        LogQueryParams
    ),
    responses(
        (status = 200, description = "Exercise log", body = ExerciseLogResponse),
        (status = 400, description = "Invalid date bound", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["exercises"],
    operation_id = "getExerciseLog"
)]
#[get("/users/{user_id}/logs")]
pub async fn get_log(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<LogQueryParams>,
) -> ApiResult<web::Json<ExerciseLogResponse>> {
    let query = query.into_inner();
    let request = LogQueryRequest {
        user_id: parse_user_id(&path)?,
        limit: LogLimit::from_query(query.limit.as_deref()),
        from: query.from,
        to: query.to,
    };
    let log = state.logs.fetch_log(request).await?;
    Ok(web::Json(log.into()))
}

//! User registry endpoints.
//!
//! ```text
//! POST /api/users   username=alice
//! GET  /api/users
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{User, Username};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Form body for `POST /api/users`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateUserForm {
    /// Display name. Missing means the empty string.
    #[serde(default)]
    pub username: Option<String>,
}

/// A user as rendered by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "alice")]
    pub username: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().as_ref().to_owned(),
        }
    }
}

/// List every registered user in creation order.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Registered users", body = [UserResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users.iter().map(UserResponse::from).collect()))
}

/// Register a new user.
///
/// A missing body, or one that is not URL-encoded form data, registers a user
/// with an empty name.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body(content = CreateUserForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    form: Option<web::Form<CreateUserForm>>,
) -> ApiResult<web::Json<UserResponse>> {
    let username = Username::new(form.and_then(|form| form.into_inner().username).unwrap_or_default());
    let user = state.users.create_user(username).await?;
    Ok(web::Json(UserResponse::from(&user)))
}

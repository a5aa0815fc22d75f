//! HTTP inbound adapter exposing the REST endpoints.
//!
//! [`configure_api`] registers the exercise tracker routes on a scope; the
//! server mounts it under `/api`. Health checks live at the root.

use actix_web::web;
use serde_json::json;

use crate::domain::Error;

pub mod error;
pub mod exercises;
pub mod health;
pub mod logs;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod users;
mod validation;

pub use error::ApiResult;

fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| {
        Error::invalid_request("request body must be URL-encoded form data")
            .with_details(json!({ "reason": err.to_string() }))
            .into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        Error::invalid_request("query string is malformed")
            .with_details(json!({ "reason": err.to_string() }))
            .into()
    })
}

/// Register the user and exercise endpoints along with extractor settings
/// that render payload errors in the JSON error shape.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use exercise_tracker::inbound::http::configure_api;
///
/// let app = App::new().service(web::scope("/api").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(form_config())
        .app_data(query_config())
        .service(users::list_users)
        .service(users::create_user)
        .service(exercises::log_exercise)
        .service(logs::get_log);
}

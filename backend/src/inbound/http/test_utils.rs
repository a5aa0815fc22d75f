//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_http::Request;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{App, test as actix_test, web};

use super::configure_api;
use super::exercises::LoggedExerciseResponse;
use super::state::HttpState;
use super::users::UserResponse;
use crate::Trace;
use crate::domain::ports::UserRegistry;
use crate::test_support::{FixedClock, in_memory_http_state};

/// Services wired to a fresh in-memory store, with "today" pinned to
/// 2026-10-17.
pub(crate) fn in_memory_state() -> HttpState {
    in_memory_http_state(Arc::new(FixedClock::on(2026, 10, 17)))
}

pub(crate) fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(web::scope("/api").configure(configure_api))
}

pub(crate) async fn in_memory_app()
-> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    actix_test::init_service(test_app(in_memory_state())).await
}

/// App whose registry port is replaced, typically by a mock.
pub(crate) fn app_with_registry(
    registry: Arc<dyn UserRegistry>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let mut state = in_memory_state();
    state.users = registry;
    test_app(state)
}

pub(crate) fn post_form(uri: &str, body: &str) -> Request {
    actix_test::TestRequest::post()
        .uri(uri)
        .insert_header((CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload(body.to_owned())
        .to_request()
}

pub(crate) async fn create_user<S>(app: &S, username: &str) -> UserResponse
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    actix_test::call_and_read_body_json(app, post_form("/api/users", &format!("username={username}")))
        .await
}

pub(crate) async fn log_exercise<S>(
    app: &S,
    user_id: &str,
    description: &str,
    date: &str,
) -> LoggedExerciseResponse
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    actix_test::call_and_read_body_json(
        app,
        post_form(
            &format!("/api/users/{user_id}/exercises"),
            &format!("description={description}&duration=15&date={date}"),
        ),
    )
    .await
}

//! End-to-end behaviour of the REST API over the in-memory store.

use std::sync::Arc;

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{App, test, web};
use rstest::rstest;
use serde_json::{Value, json};

use exercise_tracker::Trace;
use exercise_tracker::domain::TRACE_ID_HEADER;
use exercise_tracker::inbound::http::configure_api;
use exercise_tracker::test_support::{FixedClock, in_memory_http_state};

async fn app() -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    let state = in_memory_http_state(Arc::new(FixedClock::on(2026, 10, 17)));
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .service(web::scope("/api").configure(configure_api)),
    )
    .await
}

fn form(uri: &str, body: &str) -> Request {
    test::TestRequest::post()
        .uri(uri)
        .insert_header((CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload(body.to_owned())
        .to_request()
}

fn get(uri: &str) -> Request {
    test::TestRequest::get().uri(uri).to_request()
}

async fn json_of<S>(app: &S, req: Request) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let res = test::call_service(app, req).await;
    assert!(res.headers().contains_key(TRACE_ID_HEADER), "missing trace-id");
    let status = res.status();
    (status, test::read_body_json(res).await)
}

#[rstest]
#[actix_web::test]
async fn alice_logs_a_run_and_reads_it_back() {
    let app = app().await;

    let (status, alice) = json_of(&app, form("/api/users", "username=alice")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(alice["username"], "alice");
    let id = alice["_id"].as_str().expect("id string").to_owned();

    let (status, logged) = json_of(
        &app,
        form(
            &format!("/api/users/{id}/exercises"),
            "description=run&duration=30&date=1990-01-01",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        logged,
        json!({
            "username": "alice",
            "description": "run",
            "duration": 30,
            "date": "Mon Jan 01 1990",
            "_id": id,
        })
    );

    let (status, log) = json_of(&app, get(&format!("/api/users/{id}/logs"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        log,
        json!({
            "username": "alice",
            "count": 1,
            "_id": id,
            "log": [{ "description": "run", "duration": 30, "date": "Mon Jan 01 1990" }],
        })
    );

    let (_, users) = json_of(&app, get("/api/users")).await;
    assert_eq!(users, json!([{ "_id": id, "username": "alice" }]));
}

#[rstest]
#[actix_web::test]
async fn logs_are_isolated_per_user_and_count_matches() {
    let app = app().await;
    let (_, alice) = json_of(&app, form("/api/users", "username=alice")).await;
    let (_, bob) = json_of(&app, form("/api/users", "username=bob")).await;
    let alice_id = alice["_id"].as_str().expect("id");
    let bob_id = bob["_id"].as_str().expect("id");

    for (user, body) in [
        (alice_id, "description=a1&duration=10&date=2024-01-01"),
        (bob_id, "description=b1&duration=20&date=2024-01-02"),
        (alice_id, "description=a2&duration=30"),
    ] {
        let (status, _) = json_of(&app, form(&format!("/api/users/{user}/exercises"), body)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, log) = json_of(&app, get(&format!("/api/users/{alice_id}/logs"))).await;
    let entries = log["log"].as_array().expect("log array");

    assert_eq!(log["count"], 2);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["description"], "a1");
    assert_eq!(entries[1]["description"], "a2");
    assert_eq!(entries[1]["date"], "Sat Oct 17 2026");
}

#[rstest]
#[case("?from=2024-01-02&to=2024-01-03", &["d2", "d3"])]
#[case("?from=2024-01-03", &["d3", "d4"])]
#[case("?to=2024-01-01", &["d1"])]
#[case("?limit=3", &["d1", "d2", "d3"])]
#[case("?from=2024-01-04&to=2024-01-01", &[])]
#[actix_web::test]
async fn log_query_filters(#[case] query: &str, #[case] expected: &[&str]) {
    let app = app().await;
    let (_, user) = json_of(&app, form("/api/users", "username=gail")).await;
    let id = user["_id"].as_str().expect("id");
    for day in 1..=4 {
        let body = format!("description=d{day}&duration=5&date=2024-01-0{day}");
        json_of(&app, form(&format!("/api/users/{id}/exercises"), &body)).await;
    }

    let (status, log) = json_of(&app, get(&format!("/api/users/{id}/logs{query}"))).await;
    let descriptions: Vec<&str> = log["log"]
        .as_array()
        .expect("log array")
        .iter()
        .filter_map(|item| item["description"].as_str())
        .collect();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(descriptions, expected);
    assert_eq!(log["count"], expected.len());
}

#[rstest]
#[case("description=run&duration=30", "")]
#[case("description=run", "?from=someday")]
#[case("duration=thirty&date=never", "?to=2024-02-30&limit=many")]
#[actix_web::test]
async fn unknown_users_get_a_single_not_found_body(#[case] exercise: &str, #[case] query: &str) {
    let app = app().await;
    let missing = "9b2f4c1e-0000-4000-8000-000000000000";

    let (log_status, log_body) =
        json_of(&app, get(&format!("/api/users/{missing}/logs{query}"))).await;
    let (post_status, post_body) =
        json_of(&app, form(&format!("/api/users/{missing}/exercises"), exercise)).await;

    assert_eq!(log_status, StatusCode::NOT_FOUND);
    assert_eq!(post_status, StatusCode::NOT_FOUND);
    assert_eq!(log_body["error"], "User not found");
    assert_eq!(post_body["code"], "not_found");
    assert!(log_body.get("log").is_none());
}

#[rstest]
#[actix_web::test]
async fn rejected_exercise_is_not_persisted() {
    let app = app().await;
    let (_, user) = json_of(&app, form("/api/users", "username=hal")).await;
    let id = user["_id"].as_str().expect("id");

    let (status, body) = json_of(
        &app,
        form(
            &format!("/api/users/{id}/exercises"),
            "description=run&duration=thirty",
        ),
    )
    .await;
    let (_, log) = json_of(&app, get(&format!("/api/users/{id}/logs"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "duration");
    assert_eq!(log["count"], 0);
}

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;
use goalplanner_server::{api::app_router, build_state, config::Config};

async fn build_test_router(seed: bool) -> (Router, TempDir) {
    let tmp = tempdir().unwrap();
    let mut config = Config::for_db_path(tmp.path().join("goals.db").to_str().unwrap());
    config.seed_sample_goals = seed;
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config), tmp)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn new_goal_body() -> Value {
    json!({
        "name": "  Laptop Upgrade ",
        "targetAmount": 80000,
        "category": "Education",
        "deadline": "2099-01-31"
    })
}

#[tokio::test]
async fn healthz_answers_ok() {
    let (app, _tmp) = build_test_router(false).await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn goal_lifecycle_over_rest() {
    let (app, _tmp) = build_test_router(false).await;

    let (status, list) = send(&app, Method::GET, "/api/v1/goals", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));

    let (status, created) = send(&app, Method::POST, "/api/v1/goals", Some(new_goal_body())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Laptop Upgrade");
    assert_eq!(created["savedAmount"].as_f64(), Some(0.0));
    let id = created["id"].as_str().unwrap().to_string();
    let goal_uri = format!("/api/v1/goals/{}", id);

    let (status, deposited) = send(
        &app,
        Method::POST,
        &format!("{}/deposits", goal_uri),
        Some(json!({ "amount": 20000 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deposited["savedAmount"].as_f64(), Some(20000.0));

    let (status, updated) = send(
        &app,
        Method::PATCH,
        &goal_uri,
        Some(json!({ "targetAmount": 15000 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["targetAmount"].as_f64(), Some(15000.0));
    assert_eq!(updated["savedAmount"].as_f64(), Some(20000.0));
    assert_eq!(updated["category"], "Education");

    let (status, snapshot) = send(&app, Method::GET, "/api/v1/collection", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(snapshot["overview"]["totalGoals"], 1);
    assert_eq!(snapshot["overview"]["completedGoals"], 1);
    assert_eq!(snapshot["goals"][0]["progress"]["isCompleted"], true);
    assert_eq!(snapshot["goals"][0]["progress"]["urgency"]["severity"], "NONE");

    let (status, options) =
        send(&app, Method::GET, "/api/v1/collection/deposit-options", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(options, json!([]));

    let (status, _) = send(&app, Method::DELETE, &goal_uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, &goal_uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "NotFound");
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn non_positive_deposit_is_bad_request_and_changes_nothing() {
    let (app, _tmp) = build_test_router(false).await;
    let (_, created) = send(&app, Method::POST, "/api/v1/goals", Some(new_goal_body())).await;
    let goal_uri = format!("/api/v1/goals/{}", created["id"].as_str().unwrap());

    for amount in [json!(0), json!(-50)] {
        let (status, body) = send(
            &app,
            Method::POST,
            &format!("{}/deposits", goal_uri),
            Some(json!({ "amount": amount })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "InvalidAmount");
    }

    let (_, goal) = send(&app, Method::GET, &goal_uri, None).await;
    assert_eq!(goal, created);
}

#[tokio::test]
async fn deposit_to_unknown_goal_is_not_found() {
    let (app, _tmp) = build_test_router(false).await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/goals/missing/deposits",
        Some(json!({ "amount": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "NotFound");
}

#[tokio::test]
async fn blank_name_is_rejected() {
    let (app, _tmp) = build_test_router(false).await;
    let mut body = new_goal_body();
    body["name"] = json!("   ");
    let (status, error) = send(&app, Method::POST, "/api/v1/goals", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["kind"], "Validation");

    let (_, list) = send(&app, Method::GET, "/api/v1/goals", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn malformed_bodies_get_a_json_validation_error() {
    let (app, _tmp) = build_test_router(false).await;

    let (status, error) = send(
        &app,
        Method::POST,
        "/api/v1/goals",
        Some(json!({ "name": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["kind"], "Validation");
    assert_eq!(error["code"], 400);
    assert!(error["message"].as_str().unwrap().contains("targetAmount"));

    let (_, created) = send(&app, Method::POST, "/api/v1/goals", Some(new_goal_body())).await;
    let goal_uri = format!("/api/v1/goals/{}", created["id"].as_str().unwrap());

    let (status, error) = send(
        &app,
        Method::POST,
        &format!("{}/deposits", goal_uri),
        Some(json!({ "amount": "lots" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["kind"], "Validation");

    let (status, error) = send(
        &app,
        Method::PATCH,
        &goal_uri,
        Some(json!({ "deadline": "someday" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["kind"], "Validation");

    let (_, goal) = send(&app, Method::GET, &goal_uri, None).await;
    assert_eq!(goal, created);
}

#[tokio::test]
async fn seeded_database_lists_sample_goals() {
    let (app, _tmp) = build_test_router(true).await;
    let (status, list) = send(&app, Method::GET, "/api/v1/goals", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(Vec::len), Some(10));

    let (_, options) = send(&app, Method::GET, "/api/v1/collection/deposit-options", None).await;
    let labels: Vec<&str> = options
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|o| o["label"].as_str())
        .collect();
    assert!(!labels.is_empty());
    assert!(labels.iter().all(|l| l.contains("(Ksh.")));
}

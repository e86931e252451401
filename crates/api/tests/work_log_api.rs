//! Integration tests for recording work logs.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;

#[tokio::test]
async fn create_work_log_returns_resolved_detail() {
    let response = post_json(
        common::build_test_app(),
        "/api/v1/work-logs",
        json!({
            "date": "2025-03-11",
            "employee_id": "4",
            "project_id": "p2",
            "comment": "Wired up push notifications",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["date"], "2025-03-11");
    assert_eq!(data["employee"]["name"], "James Brown");
    assert_eq!(data["project"]["name"], "Mobile App Development");
    assert_eq!(data["comments"][0]["text"], "Wired up push notifications");
    assert_eq!(data["comments"][0]["timestamp"], "2025-03-11T15:00:00");
    assert_eq!(data["comments"][0]["time_label"], "03:00 PM");
}

#[tokio::test]
async fn created_work_log_shows_in_calendar_and_timeline() {
    let (app, _state) = common::build_shared_app();

    let response = post_json(
        app.clone(),
        "/api/v1/work-logs",
        json!({
            "employee_id": "3",
            "project_id": "p3",
            "comment": "Sketched the KPI widgets",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["date"], "2025-03-12");

    let day = body_json(get(app.clone(), "/api/v1/calendar/2025-03-12").await).await;
    assert_eq!(day["data"]["work_logs"].as_array().unwrap().len(), 1);

    let timeline = body_json(
        get(app.clone(), "/api/v1/projects/p3/comments?timespan=this-week").await,
    )
    .await;
    assert_eq!(timeline["data"]["shown"], 1);
    assert_eq!(timeline["data"]["groups"][0]["date"], "2025-03-12");
    assert_eq!(
        timeline["data"]["groups"][0]["comments"][0]["author"],
        "Emma Wilson"
    );

    let project = body_json(get(app, "/api/v1/projects/p3").await).await;
    assert_eq!(project["data"]["comment_count"], 1);
}

#[tokio::test]
async fn unknown_employee_is_recorded_as_unknown_author() {
    let (app, _state) = common::build_shared_app();

    let response = post_json(
        app.clone(),
        "/api/v1/work-logs",
        json!({
            "date": "2025-03-11",
            "employee_id": "e404",
            "project_id": "p1",
            "comment": "Nobody knows who did this",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_json(response).await["data"]["employee"].is_null());

    let timeline = body_json(get(app, "/api/v1/projects/p1/comments").await).await;
    assert_eq!(timeline["data"]["total"], 11);
    let first = &timeline["data"]["groups"][0];
    assert_eq!(first["date"], "2025-03-11");
    assert_eq!(first["comments"][0]["author"], "Unknown");
    assert!(first["comments"][0]["author_role"].is_null());
}

#[tokio::test]
async fn missing_comment_is_rejected() {
    let (app, state) = common::build_shared_app();

    let response = post_json(
        app,
        "/api/v1/work-logs",
        json!({ "employee_id": "1", "project_id": "p1", "comment": "" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let store = state.store.read().await;
    assert_eq!(store.work_logs.len(), 3);
    assert_eq!(store.comments.len(), 12);
}

#[tokio::test]
async fn unpadded_date_lands_on_the_calendar_day() {
    let (app, _state) = common::build_shared_app();

    let response = post_json(
        app.clone(),
        "/api/v1/work-logs",
        json!({
            "date": "2025-3-10",
            "employee_id": "4",
            "project_id": "p1",
            "comment": "Patched the checkout flow",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["date"], "2025-03-10");

    let day = body_json(get(app.clone(), "/api/v1/calendar/2025-03-10").await).await;
    assert_eq!(day["data"]["work_logs"].as_array().unwrap().len(), 3);

    let timeline = body_json(get(app, "/api/v1/projects/p1/comments").await).await;
    assert_eq!(timeline["data"]["groups"][0]["date"], "2025-03-10");
    assert_eq!(timeline["data"]["groups"][0]["count_label"], "3 comments");
    assert_eq!(timeline["data"]["groups"][1]["date"], "2025-03-09");
}

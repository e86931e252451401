//! Integration tests for the work log calendar.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

fn day<'a>(json: &'a serde_json::Value, day: u64) -> &'a serde_json::Value {
    json["data"]["days"]
        .as_array()
        .unwrap()
        .iter()
        .find(|d| d["day"] == day)
        .unwrap()
}

#[tokio::test]
async fn month_defaults_to_current_month() {
    let response = get(common::build_test_app(), "/api/v1/calendar").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["year"], 2025);
    assert_eq!(data["month"], 3);
    assert_eq!(data["month_name"], "March");
    assert_eq!(data["weekday_headers"][0], "Sun");
    assert_eq!(data["leading_blank_days"], 6, "1 March 2025 is a Saturday");
    assert_eq!(data["days"].as_array().unwrap().len(), 31);
    assert_eq!(data["previous"]["month"], 2);
    assert_eq!(data["next"]["month"], 4);
    assert_eq!(data["next"]["year"], 2025);
}

#[tokio::test]
async fn month_cells_count_and_preview_logs() {
    let json = body_json(get(common::build_test_app(), "/api/v1/calendar?year=2025&month=3").await).await;

    let tenth = day(&json, 10);
    assert_eq!(tenth["date"], "2025-03-10");
    assert_eq!(tenth["work_log_count"], 2);
    assert_eq!(tenth["overflow_count"], 0);
    assert_eq!(tenth["is_today"], false);
    assert_eq!(tenth["preview"][0]["employee_name"], "Sarah Johnson");
    assert_eq!(
        tenth["preview"][1]["project_name"],
        "E-Commerce Platform Redesign"
    );

    assert_eq!(day(&json, 9)["work_log_count"], 1);
    assert_eq!(day(&json, 11)["work_log_count"], 0);
    assert_eq!(day(&json, 12)["is_today"], true);
}

#[tokio::test]
async fn month_navigation_wraps_the_year() {
    let json = body_json(get(common::build_test_app(), "/api/v1/calendar?year=2025&month=1").await).await;
    assert_eq!(json["data"]["previous"]["year"], 2024);
    assert_eq!(json["data"]["previous"]["month"], 12);
    assert!(json["data"]["days"]
        .as_array()
        .unwrap()
        .iter()
        .all(|d| d["work_log_count"] == 0));
}

#[tokio::test]
async fn invalid_month_is_rejected() {
    let response = get(common::build_test_app(), "/api/v1/calendar?year=2025&month=13").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn day_view_resolves_employee_and_project() {
    let response = get(common::build_test_app(), "/api/v1/calendar/2025-03-10").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["label"], "Monday, March 10, 2025");

    let logs = data["work_logs"].as_array().unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0]["id"], "w1");
    assert_eq!(logs[0]["employee"]["role"], "Project Manager");
    assert_eq!(logs[0]["project"]["id"], "p1");
    assert_eq!(logs[0]["comments"][0]["time_label"], "10:30 AM");
    assert_eq!(logs[1]["employee"]["name"], "Michael Chen");
}

#[tokio::test]
async fn day_without_logs_is_empty() {
    let json = body_json(get(common::build_test_app(), "/api/v1/calendar/2025-03-11").await).await;
    assert!(json["data"]["work_logs"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_day_is_bad_request() {
    let response = get(common::build_test_app(), "/api/v1/calendar/2025-13-40").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Invalid date '2025-13-40'. Expected YYYY-MM-DD");
}

#[tokio::test]
async fn day_path_is_normalised_before_lookup() {
    for uri in ["/api/v1/calendar/%202025-03-10", "/api/v1/calendar/2025-3-10"] {
        let response = get(common::build_test_app(), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");

        let json = body_json(response).await;
        assert_eq!(json["data"]["date"], "2025-03-10", "{uri}");
        assert_eq!(json["data"]["work_logs"].as_array().unwrap().len(), 2, "{uri}");
    }
}

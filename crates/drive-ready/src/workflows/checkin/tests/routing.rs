use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use super::common::*;
use crate::clock::FixedClock;
use crate::workflows::checkin::router::check_in_router;
use crate::workflows::checkin::service::ShiftCheckInService;
use crate::workflows::eligibility::ShiftKind;

fn build_router(hour: u32) -> axum::Router {
    let repository = Arc::new(Repository::default());
    let service = Arc::new(ShiftCheckInService::new(
        repository,
        Arc::new(FixedClock(instant(24, hour, 0))),
    ));
    check_in_router(service)
}

async fn post_check_in(router: &axum::Router, shift: ShiftKind) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/checkins")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_vec(&submission(shift)).expect("serialize submission"),
        ))
        .expect("request");

    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router dispatch");
    let status = response.status();
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    (status, serde_json::from_slice(&body).expect("json"))
}

async fn get_json(router: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");
    let status = response.status();
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    (status, serde_json::from_slice(&body).expect("json"))
}

#[tokio::test]
async fn post_check_in_returns_created_view() {
    let router = build_router(8);
    let (status, payload) = post_check_in(&router, ShiftKind::Morning).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(payload["shift"], "morning");
    assert_eq!(payload["shift_label"], "Morning");
    assert_eq!(payload["shift_day"], "2025-09-24");
}

#[tokio::test]
async fn post_check_in_outside_window_is_unprocessable() {
    let router = build_router(8);
    let (status, payload) = post_check_in(&router, ShiftKind::Evening).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(payload["error"]
        .as_str()
        .is_some_and(|message| message.contains("Morning")));
}

#[tokio::test]
async fn duplicate_check_in_conflicts() {
    let router = build_router(8);
    let (first, _) = post_check_in(&router, ShiftKind::Morning).await;
    let (second, _) = post_check_in(&router, ShiftKind::Morning).await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CONFLICT);
}

#[tokio::test]
async fn history_and_day_roster_list_check_ins() {
    let router = build_router(15);
    post_check_in(&router, ShiftKind::Afternoon).await;

    let (status, history) = get_json(&router, "/api/v1/checkins/8412207").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history.as_array().map(Vec::len), Some(1));

    let (status, roster) = get_json(&router, "/api/v1/shift/days/2025-09-24/checkins").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(roster[0]["soldier_id"], "8412207");

    let (status, _) = get_json(&router, "/api/v1/shift/days/not-a-date/checkins").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn current_shift_endpoint_reports_open_window() {
    let router = build_router(21);
    let (status, payload) = get_json(&router, "/api/v1/shift/current").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["shift"], "evening");
    assert_eq!(payload["shift_day"], "2025-09-24");
}

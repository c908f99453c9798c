use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use serde_json::json;

use super::domain::{ShiftCheckIn, ShiftCheckInSubmission, ShiftCheckInView, SoldierId};
use super::repository::{CheckInRepository, RepositoryError};
use super::service::{CheckInServiceError, ShiftCheckInService};
use crate::clock::Clock;

/// Router builder exposing HTTP endpoints for shift check-ins.
pub fn check_in_router<R, C>(service: Arc<ShiftCheckInService<R, C>>) -> Router
where
    R: CheckInRepository + 'static,
    C: Clock + 'static,
{
    Router::new()
        .route("/api/v1/checkins", post(submit_handler::<R, C>))
        .route(
            "/api/v1/checkins/:soldier_id",
            get(history_handler::<R, C>),
        )
        .route("/api/v1/shift/current", get(current_shift_handler::<R, C>))
        .route(
            "/api/v1/shift/days/:day/checkins",
            get(shift_day_handler::<R, C>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R, C>(
    State(service): State<Arc<ShiftCheckInService<R, C>>>,
    axum::Json(submission): axum::Json<ShiftCheckInSubmission>,
) -> Response
where
    R: CheckInRepository + 'static,
    C: Clock + 'static,
{
    match service.submit(submission) {
        Ok(check_in) => (StatusCode::CREATED, axum::Json(check_in.to_view())).into_response(),
        Err(CheckInServiceError::Violation(violation)) => {
            let payload = json!({
                "error": violation.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(duplicate @ CheckInServiceError::Duplicate { .. }) => {
            let payload = json!({
                "error": duplicate.to_string(),
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(CheckInServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "check-in already recorded",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn history_handler<R, C>(
    State(service): State<Arc<ShiftCheckInService<R, C>>>,
    Path(soldier_id): Path<String>,
) -> Response
where
    R: CheckInRepository + 'static,
    C: Clock + 'static,
{
    match service.history(&SoldierId(soldier_id)) {
        Ok(check_ins) => (StatusCode::OK, axum::Json(views(&check_ins))).into_response(),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn current_shift_handler<R, C>(
    State(service): State<Arc<ShiftCheckInService<R, C>>>,
) -> Response
where
    R: CheckInRepository + 'static,
    C: Clock + 'static,
{
    (StatusCode::OK, axum::Json(service.current_window())).into_response()
}

pub(crate) async fn shift_day_handler<R, C>(
    State(service): State<Arc<ShiftCheckInService<R, C>>>,
    Path(day): Path<String>,
) -> Response
where
    R: CheckInRepository + 'static,
    C: Clock + 'static,
{
    let day = match NaiveDate::parse_from_str(day.trim(), "%Y-%m-%d") {
        Ok(day) => day,
        Err(err) => {
            let payload = json!({
                "error": format!("failed to parse '{day}' as YYYY-MM-DD ({err})"),
            });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    match service.roster_for(day) {
        Ok(check_ins) => (StatusCode::OK, axum::Json(views(&check_ins))).into_response(),
        Err(other) => internal_error(other),
    }
}

fn views(check_ins: &[ShiftCheckIn]) -> Vec<ShiftCheckInView> {
    check_ins.iter().map(ShiftCheckIn::to_view).collect()
}

fn internal_error(error: CheckInServiceError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}

use crate::infra::{deserialize_optional_date, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::NaiveDate;
use drive_ready::clock::Clock;
use drive_ready::error::AppError;
use drive_ready::workflows::checkin::{check_in_router, CheckInRepository, ShiftCheckInService};
use drive_ready::workflows::eligibility::{
    overall_fitness, FitnessAssessmentView, SoldierFitnessRecord,
};
use drive_ready::workflows::roster::{FitnessRosterReport, RosterImporter, RosterSummary};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub(crate) struct FitnessAssessRequest {
    #[serde(default)]
    pub(crate) soldier_id: Option<String>,
    pub(crate) record: SoldierFitnessRecord,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct FitnessAssessResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) soldier_id: Option<String>,
    pub(crate) today: NaiveDate,
    pub(crate) defensive_driving_passed: bool,
    pub(crate) assessment: FitnessAssessmentView,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RosterReportRequest {
    pub(crate) csv: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn with_readiness_routes<R, C>(service: Arc<ShiftCheckInService<R, C>>) -> axum::Router
where
    R: CheckInRepository + 'static,
    C: Clock + 'static,
{
    check_in_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/fitness/assess",
            axum::routing::post(fitness_assess_endpoint),
        )
        .route(
            "/api/v1/fitness/roster",
            axum::routing::post(roster_report_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn fitness_assess_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<FitnessAssessRequest>,
) -> Json<FitnessAssessResponse> {
    let FitnessAssessRequest {
        soldier_id,
        record,
        today,
    } = payload;

    let today = today.unwrap_or_else(|| state.clock.today());
    let assessment = overall_fitness(&record, today);
    debug!(
        soldier_id = soldier_id.as_deref().unwrap_or("-"),
        overall = assessment.overall_status.label(),
        "fitness assessed"
    );

    Json(FitnessAssessResponse {
        soldier_id,
        today,
        defensive_driving_passed: record.defensive_driving_passed,
        assessment: assessment.to_view(),
    })
}

pub(crate) async fn roster_report_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<RosterReportRequest>,
) -> Result<Json<RosterSummary>, AppError> {
    let RosterReportRequest { csv, today } = payload;

    let entries = RosterImporter::from_reader(Cursor::new(csv.into_bytes()))?;
    let today = today.unwrap_or_else(|| state.clock.today());
    let report = FitnessRosterReport::build(&entries, today);

    Ok(Json(report.summary()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use drive_ready::clock::SystemClock;
    use drive_ready::workflows::eligibility::FitnessStatus;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;

    fn state() -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            clock: Arc::new(SystemClock::local()),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 24).expect("valid date")
    }

    #[tokio::test]
    async fn fitness_assess_endpoint_reports_components() {
        let request = FitnessAssessRequest {
            soldier_id: Some("8412207".to_string()),
            record: SoldierFitnessRecord {
                military_license_expiry: NaiveDate::from_ymd_opt(2025, 10, 10),
                civilian_license_expiry: NaiveDate::from_ymd_opt(2027, 1, 1),
                defensive_driving_passed: false,
                qualified_date: NaiveDate::from_ymd_opt(2022, 5, 1),
                correct_driving_in_service_date: NaiveDate::from_ymd_opt(2025, 5, 1),
            },
            today: Some(today()),
        };

        let Json(body) = fitness_assess_endpoint(Extension(state()), Json(request)).await;

        assert_eq!(body.today, today());
        assert_eq!(
            body.assessment.military_license_status,
            FitnessStatus::Warning
        );
        assert_eq!(body.assessment.overall_status, FitnessStatus::Warning);
        assert_eq!(body.assessment.overall_label, "Warning");
        assert!(!body.defensive_driving_passed);
    }

    #[tokio::test]
    async fn roster_report_endpoint_summarises_csv() {
        let request = RosterReportRequest {
            csv: "Soldier ID,Name,Military License Expiry,Civilian License Expiry,Defensive Driving,Qualified Date,Correct Driving Date\n8412207,Noa Levi,2026-08-01,2027-01-15,yes,2021-03-01,2025-06-10\n".to_string(),
            today: Some(today()),
        };

        let Json(summary) = roster_report_endpoint(Extension(state()), Json(request))
            .await
            .expect("report builds");

        assert_eq!(summary.total, 1);
        assert_eq!(summary.status_counts[0].soldiers, 1);
        assert!(summary.correct_driving_due.is_empty());
    }

    #[tokio::test]
    async fn roster_report_endpoint_rejects_bad_dates() {
        let request = RosterReportRequest {
            csv: "Soldier ID,Name,Military License Expiry\n1,A,someday\n".to_string(),
            today: Some(today()),
        };

        let error = roster_report_endpoint(Extension(state()), Json(request))
            .await
            .expect_err("bad date rejected");
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn roster_endpoint_rejects_export_without_soldier_ids() {
        let request = RosterReportRequest {
            csv: "SoldierID,Name,Military License Expiry\n8412207,Noa Levi,2020-01-01\n"
                .to_string(),
            today: Some(today()),
        };

        let error = roster_report_endpoint(Extension(state()), Json(request))
            .await
            .expect_err("missing id column rejected");
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }
}

use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryCheckInRepository};
use crate::routes::with_readiness_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use drive_ready::config::AppConfig;
use drive_ready::error::AppError;
use drive_ready::telemetry;
use drive_ready::workflows::checkin::ShiftCheckInService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let clock = Arc::new(config.clock.system_clock());
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        clock: clock.clone(),
    };

    let repository = Arc::new(InMemoryCheckInRepository::default());
    let check_in_service = Arc::new(ShiftCheckInService::new(repository, clock));

    let app = with_readiness_routes(check_in_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        utc_offset = ?config.clock.utc_offset,
        "driver readiness service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

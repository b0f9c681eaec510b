use crate::cli::ServeArgs;
use crate::infra::{load_directory, AppState, InMemoryFavorites, InMemoryProfiles};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use legal_help::config::AppConfig;
use legal_help::directory::{FavoritesService, ProfileService};
use legal_help::error::AppError;
use legal_help::telemetry;
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
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let directory = load_directory(&config.directory)?;
    let favorites = Arc::new(FavoritesService::new(Arc::new(
        InMemoryFavorites::default(),
    )));
    let profiles = Arc::new(ProfileService::new(Arc::new(InMemoryProfiles::default())));

    let app = with_service_routes(directory, favorites, profiles)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        environment = config.environment.as_str(),
        %addr,
        "legal help service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

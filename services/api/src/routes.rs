use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use legal_help::directory::{
    directory_router, profile_router, DirectoryRepository, DirectoryService, FavoritesRepository,
    FavoritesService, ProfileRepository, ProfileService,
};
use legal_help::triage::triage_router;

/// Full HTTP surface: triage, directory listings, favorites, profiles and the probes.
pub(crate) fn with_service_routes<R, F, P>(
    directory: Arc<DirectoryService<R>>,
    favorites: Arc<FavoritesService<F>>,
    profiles: Arc<ProfileService<P>>,
) -> axum::Router
where
    R: DirectoryRepository + 'static,
    F: FavoritesRepository + 'static,
    P: ProfileRepository + 'static,
{
    triage_router()
        .merge(directory_router(directory, favorites))
        .merge(profile_router(profiles))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
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

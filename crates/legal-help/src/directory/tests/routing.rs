use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::response::IntoResponse;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::directory::router::{categories_handler, DirectoryState, USER_HEADER};
use crate::directory::service::{DirectoryService, FavoritesService};

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request builds")
}

#[tokio::test]
async fn categories_handler_returns_internal_error_when_store_is_down() {
    let state = DirectoryState {
        directory: Arc::new(DirectoryService::new(Arc::new(UnavailableDirectory))),
        favorites: Arc::new(FavoritesService::new(Arc::new(MemoryFavorites::default()))),
    };

    let response = categories_handler(State(state)).await.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["error"],
        "directory error: repository unavailable: store offline"
    );
}

#[tokio::test]
async fn lawyers_route_applies_search_and_specialty() {
    let response = seeded_router()
        .oneshot(get("/api/v1/lawyers?search=chen&specialty=Criminal%20Law"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let lawyers = payload.as_array().expect("array");
    assert_eq!(lawyers.len(), 1);
    assert_eq!(lawyers[0]["name"], "Michael Chen");
}

#[tokio::test]
async fn legal_aid_route_filters_by_service_type() {
    let response = seeded_router()
        .oneshot(get("/api/v1/legal-aid?service_type=hotline"))
        .await
        .expect("route executes");

    let payload = read_json_body(response).await;
    let services = payload.as_array().expect("array");
    assert_eq!(services.len(), 2);
    assert!(services
        .iter()
        .all(|service| service["service_type"] == "hotline"));
}

#[tokio::test]
async fn legal_aid_route_rejects_unknown_service_types() {
    let response = seeded_router()
        .oneshot(get("/api/v1/legal-aid?service_type=kiosk"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["error"],
        "invalid query: unknown service type 'kiosk' (expected clinic, hotline, program)"
    );
}

#[tokio::test]
async fn specialties_route_lists_all_then_featured() {
    let response = seeded_router()
        .oneshot(get("/api/v1/lawyers/specialties"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let specialties = payload.as_array().expect("array");
    assert_eq!(specialties.len(), 7);
    assert_eq!(specialties[0], "All");
    assert!(specialties.iter().any(|name| name == "Criminal Law"));
}

#[tokio::test]
async fn emergency_resources_route_lists_flagged_entries() {
    let response = seeded_router()
        .oneshot(get("/api/v1/resources/emergency"))
        .await
        .expect("route executes");

    let payload = read_json_body(response).await;
    let titles: Vec<&str> = payload
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|resource| resource["title"].as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["Family Violence Info Line", "Duty Counsel Services"]
    );
}

#[tokio::test]
async fn favorites_routes_require_identity_for_mutations() {
    let response = seeded_router()
        .oneshot(
            Request::post("/api/v1/favorites")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({
                        "item_type": "lawyer",
                        "item_id": "lawyer-01"
                    }))
                    .expect("encode"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn favorites_round_trip_through_routes() {
    let router = seeded_router();
    let add = Request::post("/api/v1/favorites")
        .header(header::CONTENT_TYPE, "application/json")
        .header(USER_HEADER, "ana")
        .body(Body::from(
            serde_json::to_vec(&json!({
                "item_type": "legal_aid_service",
                "item_id": "legal-aid-01",
                "notes": "walk-in Tuesday"
            }))
            .expect("encode"),
        ))
        .expect("request builds");

    let response = router.clone().oneshot(add).await.expect("route executes");
    assert_eq!(response.status(), StatusCode::CREATED);

    let status = router
        .clone()
        .oneshot(
            Request::get("/api/v1/favorites/legal-aid-01")
                .header(USER_HEADER, "ana")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    let payload = read_json_body(status).await;
    assert_eq!(payload["favorited"], true);

    let removed = router
        .clone()
        .oneshot(
            Request::delete("/api/v1/favorites/legal-aid-01")
                .header(USER_HEADER, "ana")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(removed.status(), StatusCode::OK);

    let missing = router
        .oneshot(
            Request::delete("/api/v1/favorites/legal-aid-01")
                .header(USER_HEADER, "ana")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_favorites_answer_conflict() {
    let router = seeded_router();
    let add = || {
        Request::post("/api/v1/favorites")
            .header(header::CONTENT_TYPE, "application/json")
            .header(USER_HEADER, "ana")
            .body(Body::from(
                json!({ "item_type": "lawyer", "item_id": "lawyer-01" }).to_string(),
            ))
            .expect("request builds")
    };

    let first = router.clone().oneshot(add()).await.expect("route executes");
    assert_eq!(first.status(), StatusCode::CREATED);
    let second = router.oneshot(add()).await.expect("route executes");
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let payload = read_json_body(second).await;
    assert_eq!(payload["error"], "favorites error: item already in favorites");
}

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::domain::{
    Category, Favorite, FavoriteItemType, Lawyer, LegalAidService, LegalResource, ProfilePatch,
    RecordId, ServiceType, UserId, UserProfile,
};
use super::query::{LawyerFilter, ServiceFilter, ALL_SPECIALTIES, FEATURED_SPECIALTIES};
use super::repository::{DirectoryRepository, FavoritesRepository, ProfileRepository};
use super::service::{DirectoryService, FavoritesService, ProfileService};
use crate::error::AppError;

/// Header carrying the identity supplied by the authentication provider.
pub const USER_HEADER: &str = "x-user-id";

pub struct DirectoryState<R, F> {
    pub directory: Arc<DirectoryService<R>>,
    pub favorites: Arc<FavoritesService<F>>,
}

impl<R, F> Clone for DirectoryState<R, F> {
    fn clone(&self) -> Self {
        Self {
            directory: self.directory.clone(),
            favorites: self.favorites.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ServiceQuery {
    #[serde(default)]
    pub(crate) service_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ResourceQuery {
    #[serde(default)]
    pub(crate) category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct FavoritesQuery {
    #[serde(default)]
    pub(crate) item_type: Option<FavoriteItemType>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddFavoriteRequest {
    pub(crate) item_type: FavoriteItemType,
    pub(crate) item_id: String,
    #[serde(default)]
    pub(crate) notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NotesRequest {
    pub(crate) notes: String,
}

/// Router builder exposing directory lookups and favorites.
pub fn directory_router<R, F>(
    directory: Arc<DirectoryService<R>>,
    favorites: Arc<FavoritesService<F>>,
) -> Router
where
    R: DirectoryRepository + 'static,
    F: FavoritesRepository + 'static,
{
    Router::new()
        .route("/api/v1/categories", get(categories_handler::<R, F>))
        .route("/api/v1/lawyers", get(lawyers_handler::<R, F>))
        .route("/api/v1/lawyers/specialties", get(specialties_handler))
        .route("/api/v1/legal-aid", get(legal_aid_handler::<R, F>))
        .route("/api/v1/resources", get(resources_handler::<R, F>))
        .route(
            "/api/v1/resources/emergency",
            get(emergency_resources_handler::<R, F>),
        )
        .route(
            "/api/v1/favorites",
            get(list_favorites_handler::<R, F>).post(add_favorite_handler::<R, F>),
        )
        .route(
            "/api/v1/favorites/:item_id",
            get(favorite_status_handler::<R, F>).delete(remove_favorite_handler::<R, F>),
        )
        .route(
            "/api/v1/favorites/:item_id/notes",
            put(update_notes_handler::<R, F>),
        )
        .with_state(DirectoryState {
            directory,
            favorites,
        })
}

/// Router builder for the signed-in user's profile.
pub fn profile_router<P>(profiles: Arc<ProfileService<P>>) -> Router
where
    P: ProfileRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/profile",
            get(profile_handler::<P>)
                .post(create_profile_handler::<P>)
                .patch(update_profile_handler::<P>),
        )
        .with_state(profiles)
}

fn current_user(headers: &HeaderMap) -> Option<UserId> {
    headers
        .get(USER_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| UserId(value.to_string()))
}

pub(crate) async fn categories_handler<R, F>(
    State(state): State<DirectoryState<R, F>>,
) -> Result<Json<Vec<Category>>, AppError>
where
    R: DirectoryRepository + 'static,
    F: FavoritesRepository + 'static,
{
    Ok(Json(state.directory.categories()?))
}

pub(crate) async fn lawyers_handler<R, F>(
    State(state): State<DirectoryState<R, F>>,
    Query(filter): Query<LawyerFilter>,
) -> Result<Json<Vec<Lawyer>>, AppError>
where
    R: DirectoryRepository + 'static,
    F: FavoritesRepository + 'static,
{
    Ok(Json(state.directory.lawyers(&filter)?))
}

/// Specialty quick filters, "All" first.
pub(crate) async fn specialties_handler() -> Json<Vec<&'static str>> {
    let mut specialties = vec![ALL_SPECIALTIES];
    specialties.extend(FEATURED_SPECIALTIES);
    Json(specialties)
}

pub(crate) async fn legal_aid_handler<R, F>(
    State(state): State<DirectoryState<R, F>>,
    Query(query): Query<ServiceQuery>,
) -> Result<Json<Vec<LegalAidService>>, AppError>
where
    R: DirectoryRepository + 'static,
    F: FavoritesRepository + 'static,
{
    let service_type = match query.service_type.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) if raw.eq_ignore_ascii_case("all") => None,
        Some(raw) => Some(ServiceType::parse(raw).ok_or_else(|| {
            let known: Vec<&str> = ServiceType::ordered()
                .into_iter()
                .map(ServiceType::as_str)
                .collect();
            AppError::InvalidQuery(format!(
                "unknown service type '{raw}' (expected {})",
                known.join(", ")
            ))
        })?),
    };

    let services = state
        .directory
        .legal_aid_services(&ServiceFilter { service_type })?;
    Ok(Json(services))
}

pub(crate) async fn resources_handler<R, F>(
    State(state): State<DirectoryState<R, F>>,
    Query(query): Query<ResourceQuery>,
) -> Result<Json<Vec<LegalResource>>, AppError>
where
    R: DirectoryRepository + 'static,
    F: FavoritesRepository + 'static,
{
    Ok(Json(
        state.directory.legal_resources(query.category.as_deref())?,
    ))
}

pub(crate) async fn emergency_resources_handler<R, F>(
    State(state): State<DirectoryState<R, F>>,
) -> Result<Json<Vec<LegalResource>>, AppError>
where
    R: DirectoryRepository + 'static,
    F: FavoritesRepository + 'static,
{
    Ok(Json(state.directory.emergency_resources()?))
}

pub(crate) async fn list_favorites_handler<R, F>(
    State(state): State<DirectoryState<R, F>>,
    headers: HeaderMap,
    Query(query): Query<FavoritesQuery>,
) -> Result<Json<Vec<Favorite>>, AppError>
where
    R: DirectoryRepository + 'static,
    F: FavoritesRepository + 'static,
{
    let user = current_user(&headers);
    Ok(Json(state.favorites.list(user.as_ref(), query.item_type)?))
}

pub(crate) async fn add_favorite_handler<R, F>(
    State(state): State<DirectoryState<R, F>>,
    headers: HeaderMap,
    Json(request): Json<AddFavoriteRequest>,
) -> Result<(StatusCode, Json<Favorite>), AppError>
where
    R: DirectoryRepository + 'static,
    F: FavoritesRepository + 'static,
{
    let user = current_user(&headers);
    let favorite = state.favorites.add(
        user.as_ref(),
        request.item_type,
        RecordId(request.item_id),
        request.notes,
    )?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

pub(crate) async fn favorite_status_handler<R, F>(
    State(state): State<DirectoryState<R, F>>,
    headers: HeaderMap,
    Path(item_id): Path<String>,
) -> Result<Json<Value>, AppError>
where
    R: DirectoryRepository + 'static,
    F: FavoritesRepository + 'static,
{
    let user = current_user(&headers);
    let item_id = RecordId(item_id);
    let favorited = state.favorites.is_favorited(user.as_ref(), &item_id)?;
    Ok(Json(json!({
        "item_id": item_id.0,
        "favorited": favorited,
    })))
}

pub(crate) async fn remove_favorite_handler<R, F>(
    State(state): State<DirectoryState<R, F>>,
    headers: HeaderMap,
    Path(item_id): Path<String>,
) -> Result<Json<Favorite>, AppError>
where
    R: DirectoryRepository + 'static,
    F: FavoritesRepository + 'static,
{
    let user = current_user(&headers);
    Ok(Json(
        state.favorites.remove(user.as_ref(), &RecordId(item_id))?,
    ))
}

pub(crate) async fn update_notes_handler<R, F>(
    State(state): State<DirectoryState<R, F>>,
    headers: HeaderMap,
    Path(item_id): Path<String>,
    Json(request): Json<NotesRequest>,
) -> Result<Json<Favorite>, AppError>
where
    R: DirectoryRepository + 'static,
    F: FavoritesRepository + 'static,
{
    let user = current_user(&headers);
    let favorite = state
        .favorites
        .update_notes(user.as_ref(), &RecordId(item_id), request.notes)?;
    Ok(Json(favorite))
}

/// `null` when no one is signed in or the profile does not exist yet.
pub(crate) async fn profile_handler<P>(
    State(profiles): State<Arc<ProfileService<P>>>,
    headers: HeaderMap,
) -> Result<Json<Option<UserProfile>>, AppError>
where
    P: ProfileRepository + 'static,
{
    let user = current_user(&headers);
    Ok(Json(profiles.profile(user.as_ref())?))
}

pub(crate) async fn create_profile_handler<P>(
    State(profiles): State<Arc<ProfileService<P>>>,
    headers: HeaderMap,
) -> Result<Json<UserProfile>, AppError>
where
    P: ProfileRepository + 'static,
{
    let user = current_user(&headers);
    Ok(Json(profiles.create(user.as_ref())?))
}

pub(crate) async fn update_profile_handler<P>(
    State(profiles): State<Arc<ProfileService<P>>>,
    headers: HeaderMap,
    Json(patch): Json<ProfilePatch>,
) -> Result<Json<UserProfile>, AppError>
where
    P: ProfileRepository + 'static,
{
    let user = current_user(&headers);
    Ok(Json(profiles.update(user.as_ref(), patch)?))
}

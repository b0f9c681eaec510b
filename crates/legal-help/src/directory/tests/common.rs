use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use axum::Router;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::directory::domain::{
    Catalog, Category, Favorite, Lawyer, LegalAidService, LegalResource, RecordId, UserId,
    UserProfile,
};
use crate::directory::repository::{
    DirectoryRepository, FavoritesRepository, ProfileRepository, RepositoryError,
};
use crate::directory::router::{directory_router, profile_router};
use crate::directory::service::{DirectoryService, FavoritesService, ProfileService};

#[derive(Default)]
pub(super) struct MemoryDirectory {
    catalog: Mutex<Catalog>,
}

impl MemoryDirectory {
    pub(super) fn seeded() -> Self {
        let directory = Self::default();
        directory
            .extend(crate::directory::seed::catalog(seeded_at()))
            .expect("seed succeeds");
        directory
    }
}

impl DirectoryRepository for MemoryDirectory {
    fn categories(&self) -> Result<Vec<Category>, RepositoryError> {
        Ok(self.catalog.lock().expect("catalog mutex").categories.clone())
    }

    fn lawyers(&self) -> Result<Vec<Lawyer>, RepositoryError> {
        Ok(self.catalog.lock().expect("catalog mutex").lawyers.clone())
    }

    fn legal_aid_services(&self) -> Result<Vec<LegalAidService>, RepositoryError> {
        Ok(self
            .catalog
            .lock()
            .expect("catalog mutex")
            .legal_aid_services
            .clone())
    }

    fn legal_resources(&self) -> Result<Vec<LegalResource>, RepositoryError> {
        Ok(self
            .catalog
            .lock()
            .expect("catalog mutex")
            .legal_resources
            .clone())
    }

    fn extend(&self, additions: Catalog) -> Result<(), RepositoryError> {
        let mut guard = self.catalog.lock().expect("catalog mutex");
        guard.categories.extend(additions.categories);
        guard.lawyers.extend(additions.lawyers);
        guard.legal_aid_services.extend(additions.legal_aid_services);
        guard.legal_resources.extend(additions.legal_resources);
        Ok(())
    }
}

pub(super) struct UnavailableDirectory;

impl DirectoryRepository for UnavailableDirectory {
    fn categories(&self) -> Result<Vec<Category>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn lawyers(&self) -> Result<Vec<Lawyer>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn legal_aid_services(&self) -> Result<Vec<LegalAidService>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn legal_resources(&self) -> Result<Vec<LegalResource>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn extend(&self, _additions: Catalog) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

#[derive(Default)]
pub(super) struct MemoryFavorites {
    entries: Mutex<BTreeMap<(UserId, RecordId), Favorite>>,
}

impl FavoritesRepository for MemoryFavorites {
    fn find(&self, user: &UserId, item: &RecordId) -> Result<Option<Favorite>, RepositoryError> {
        let guard = self.entries.lock().expect("favorites mutex");
        Ok(guard.get(&(user.clone(), item.clone())).cloned())
    }

    fn insert(&self, favorite: Favorite) -> Result<Favorite, RepositoryError> {
        let mut guard = self.entries.lock().expect("favorites mutex");
        let key = (favorite.user_id.clone(), favorite.item_id.clone());
        if guard.contains_key(&key) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(key, favorite.clone());
        Ok(favorite)
    }

    fn update(&self, favorite: Favorite) -> Result<(), RepositoryError> {
        let mut guard = self.entries.lock().expect("favorites mutex");
        let key = (favorite.user_id.clone(), favorite.item_id.clone());
        match guard.get_mut(&key) {
            Some(existing) => {
                *existing = favorite;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn remove(&self, user: &UserId, item: &RecordId) -> Result<Favorite, RepositoryError> {
        let mut guard = self.entries.lock().expect("favorites mutex");
        guard
            .remove(&(user.clone(), item.clone()))
            .ok_or(RepositoryError::NotFound)
    }

    fn list(&self, user: &UserId) -> Result<Vec<Favorite>, RepositoryError> {
        let guard = self.entries.lock().expect("favorites mutex");
        Ok(guard
            .values()
            .filter(|favorite| &favorite.user_id == user)
            .cloned()
            .collect())
    }
}

/// Store that loses every write to a concurrent writer: `find` reports what was
/// seen earlier, but inserts conflict and updates find nothing.
pub(super) struct RacingFavorites {
    pub(super) seen: Option<Favorite>,
}

impl FavoritesRepository for RacingFavorites {
    fn find(&self, _user: &UserId, _item: &RecordId) -> Result<Option<Favorite>, RepositoryError> {
        Ok(self.seen.clone())
    }

    fn insert(&self, _favorite: Favorite) -> Result<Favorite, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _favorite: Favorite) -> Result<(), RepositoryError> {
        Err(RepositoryError::NotFound)
    }

    fn remove(&self, _user: &UserId, _item: &RecordId) -> Result<Favorite, RepositoryError> {
        Err(RepositoryError::NotFound)
    }

    fn list(&self, _user: &UserId) -> Result<Vec<Favorite>, RepositoryError> {
        Ok(Vec::new())
    }
}

#[derive(Default)]
pub(super) struct MemoryProfiles {
    entries: Mutex<BTreeMap<UserId, UserProfile>>,
}

impl ProfileRepository for MemoryProfiles {
    fn find(&self, user: &UserId) -> Result<Option<UserProfile>, RepositoryError> {
        let guard = self.entries.lock().expect("profiles mutex");
        Ok(guard.get(user).cloned())
    }

    fn save(&self, profile: UserProfile) -> Result<(), RepositoryError> {
        let mut guard = self.entries.lock().expect("profiles mutex");
        guard.insert(profile.user_id.clone(), profile);
        Ok(())
    }
}

pub(super) fn profile_service() -> (ProfileService<MemoryProfiles>, Arc<MemoryProfiles>) {
    let repository = Arc::new(MemoryProfiles::default());
    (ProfileService::new(repository.clone()), repository)
}

pub(super) fn seeded_profile_router() -> Router {
    profile_router(Arc::new(ProfileService::new(Arc::new(
        MemoryProfiles::default(),
    ))))
}

pub(super) fn seeded_at() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 24, 10, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn user(id: &str) -> UserId {
    UserId(id.to_string())
}

pub(super) fn favorites_service() -> (FavoritesService<MemoryFavorites>, Arc<MemoryFavorites>) {
    let repository = Arc::new(MemoryFavorites::default());
    (FavoritesService::new(repository.clone()), repository)
}

pub(super) fn seeded_router() -> Router {
    directory_router(
        Arc::new(DirectoryService::new(Arc::new(MemoryDirectory::seeded()))),
        Arc::new(FavoritesService::new(Arc::new(MemoryFavorites::default()))),
    )
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

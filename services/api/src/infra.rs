use chrono::Utc;
use legal_help::config::DirectoryConfig;
use legal_help::directory::{
    Catalog, Category, DirectoryRepository, DirectoryService, Favorite, FavoritesRepository,
    Lawyer, LawyerImporter, LegalAidService, LegalResource, ProfileRepository, RecordId,
    RepositoryError, ServiceType, UserId, UserProfile,
};
use legal_help::error::AppError;
use legal_help::triage::{LocationPreference, Topic, Urgency};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryDirectory {
    catalog: Arc<Mutex<Catalog>>,
}

impl DirectoryRepository for InMemoryDirectory {
    fn categories(&self) -> Result<Vec<Category>, RepositoryError> {
        let guard = self.catalog.lock().expect("directory mutex poisoned");
        Ok(guard.categories.clone())
    }

    fn lawyers(&self) -> Result<Vec<Lawyer>, RepositoryError> {
        let guard = self.catalog.lock().expect("directory mutex poisoned");
        Ok(guard.lawyers.clone())
    }

    fn legal_aid_services(&self) -> Result<Vec<LegalAidService>, RepositoryError> {
        let guard = self.catalog.lock().expect("directory mutex poisoned");
        Ok(guard.legal_aid_services.clone())
    }

    fn legal_resources(&self) -> Result<Vec<LegalResource>, RepositoryError> {
        let guard = self.catalog.lock().expect("directory mutex poisoned");
        Ok(guard.legal_resources.clone())
    }

    fn extend(&self, additions: Catalog) -> Result<(), RepositoryError> {
        let mut guard = self.catalog.lock().expect("directory mutex poisoned");
        guard.categories.extend(additions.categories);
        guard.lawyers.extend(additions.lawyers);
        guard.legal_aid_services.extend(additions.legal_aid_services);
        guard.legal_resources.extend(additions.legal_resources);
        Ok(())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryFavorites {
    records: Arc<Mutex<HashMap<(UserId, RecordId), Favorite>>>,
}

impl FavoritesRepository for InMemoryFavorites {
    fn find(&self, user: &UserId, item: &RecordId) -> Result<Option<Favorite>, RepositoryError> {
        let guard = self.records.lock().expect("favorites mutex poisoned");
        Ok(guard.get(&(user.clone(), item.clone())).cloned())
    }

    fn insert(&self, favorite: Favorite) -> Result<Favorite, RepositoryError> {
        let mut guard = self.records.lock().expect("favorites mutex poisoned");
        let key = (favorite.user_id.clone(), favorite.item_id.clone());
        if guard.contains_key(&key) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(key, favorite.clone());
        Ok(favorite)
    }

    fn update(&self, favorite: Favorite) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("favorites mutex poisoned");
        let key = (favorite.user_id.clone(), favorite.item_id.clone());
        if guard.contains_key(&key) {
            guard.insert(key, favorite);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn remove(&self, user: &UserId, item: &RecordId) -> Result<Favorite, RepositoryError> {
        let mut guard = self.records.lock().expect("favorites mutex poisoned");
        guard
            .remove(&(user.clone(), item.clone()))
            .ok_or(RepositoryError::NotFound)
    }

    fn list(&self, user: &UserId) -> Result<Vec<Favorite>, RepositoryError> {
        let guard = self.records.lock().expect("favorites mutex poisoned");
        let mut favorites: Vec<Favorite> = guard
            .values()
            .filter(|favorite| &favorite.user_id == user)
            .cloned()
            .collect();
        favorites.sort_by(|left, right| left.added_at.cmp(&right.added_at));
        Ok(favorites)
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryProfiles {
    records: Arc<Mutex<HashMap<UserId, UserProfile>>>,
}

impl ProfileRepository for InMemoryProfiles {
    fn find(&self, user: &UserId) -> Result<Option<UserProfile>, RepositoryError> {
        let guard = self.records.lock().expect("profiles mutex poisoned");
        Ok(guard.get(user).cloned())
    }

    fn save(&self, profile: UserProfile) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("profiles mutex poisoned");
        guard.insert(profile.user_id.clone(), profile);
        Ok(())
    }
}

/// Seed the sample listings and apply the configured lawyer export, if any.
pub(crate) fn load_directory(
    config: &DirectoryConfig,
) -> Result<Arc<DirectoryService<InMemoryDirectory>>, AppError> {
    let now = Utc::now();
    let service = Arc::new(DirectoryService::new(Arc::new(
        InMemoryDirectory::default(),
    )));

    let report = service.seed(now)?;
    info!(
        categories = report.categories,
        lawyers = report.lawyers,
        legal_aid_services = report.legal_aid_services,
        legal_resources = report.legal_resources,
        "directory seeded"
    );

    if let Some(path) = &config.lawyers_csv {
        let lawyers = LawyerImporter::from_path(path, now)?;
        let imported = service.import_lawyers(lawyers)?;
        info!(path = %path.display(), imported, "lawyer export loaded");
    }

    Ok(service)
}

pub(crate) fn parse_topic(raw: &str) -> Result<Topic, String> {
    Topic::from_token(raw.trim())
        .ok_or_else(|| format!("unknown topic '{raw}' (landlord, family, job, consumer, other)"))
}

pub(crate) fn parse_urgency(raw: &str) -> Result<Urgency, String> {
    match raw.trim() {
        "emergency" => Ok(Urgency::Emergency),
        token => Urgency::from_token(token)
            .ok_or_else(|| format!("unknown urgency '{raw}' (urgent, soon, explore)")),
    }
}

pub(crate) fn parse_location(raw: &str) -> Result<LocationPreference, String> {
    match raw.trim() {
        "yes" | "nearby" => Ok(LocationPreference::ShareLocation),
        "no" | "province" => Ok(LocationPreference::ProvinceWide),
        token => LocationPreference::from_token(token)
            .ok_or_else(|| format!("unknown location preference '{raw}' (nearby, province)")),
    }
}

pub(crate) fn parse_service_type(raw: &str) -> Result<ServiceType, String> {
    ServiceType::parse(raw)
        .ok_or_else(|| format!("unknown service type '{raw}' (clinic, hotline, program)"))
}

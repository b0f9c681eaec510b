use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use super::domain::{
    Catalog, Category, Favorite, FavoriteItemType, Lawyer, LegalAidService, LegalResource,
    ProfilePatch, RecordId, UserId, UserProfile,
};
use super::query::{self, LawyerFilter, ServiceFilter};
use super::repository::{
    DirectoryRepository, FavoritesRepository, ProfileRepository, RepositoryError,
};
use super::seed;

/// Counts of records written by a seed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub categories: usize,
    pub lawyers: usize,
    pub legal_aid_services: usize,
    pub legal_resources: usize,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.categories + self.lawyers + self.legal_aid_services + self.legal_resources
    }
}

/// Query facade over the directory collections.
pub struct DirectoryService<R> {
    repository: Arc<R>,
}

impl<R> DirectoryService<R>
where
    R: DirectoryRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn categories(&self) -> Result<Vec<Category>, RepositoryError> {
        self.repository.categories()
    }

    pub fn lawyers(&self, filter: &LawyerFilter) -> Result<Vec<Lawyer>, RepositoryError> {
        let lawyers = filter.apply(self.repository.lawyers()?);
        debug!(matched = lawyers.len(), ?filter, "lawyer query");
        Ok(lawyers)
    }

    pub fn legal_aid_services(
        &self,
        filter: &ServiceFilter,
    ) -> Result<Vec<LegalAidService>, RepositoryError> {
        Ok(filter.apply(self.repository.legal_aid_services()?))
    }

    /// All resources, or only those in `category` when given.
    pub fn legal_resources(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<LegalResource>, RepositoryError> {
        let resources = self.repository.legal_resources()?;
        Ok(match category {
            Some(category) => query::resources_in_category(resources, category),
            None => resources,
        })
    }

    pub fn emergency_resources(&self) -> Result<Vec<LegalResource>, RepositoryError> {
        Ok(query::emergency_resources(
            self.repository.legal_resources()?,
        ))
    }

    /// Seed every collection that is still empty. Populated collections are left alone.
    pub fn seed(&self, now: DateTime<Utc>) -> Result<SeedReport, RepositoryError> {
        let mut additions = Catalog::default();

        if self.repository.categories()?.is_empty() {
            additions.categories = seed::categories(now);
        }
        if self.repository.lawyers()?.is_empty() {
            additions.lawyers = seed::lawyers(now);
        }
        if self.repository.legal_aid_services()?.is_empty() {
            additions.legal_aid_services = seed::legal_aid_services(now);
        }
        if self.repository.legal_resources()?.is_empty() {
            additions.legal_resources = seed::legal_resources(now);
        }

        let report = SeedReport {
            categories: additions.categories.len(),
            lawyers: additions.lawyers.len(),
            legal_aid_services: additions.legal_aid_services.len(),
            legal_resources: additions.legal_resources.len(),
        };

        if !additions.is_empty() {
            self.repository.extend(additions)?;
        }
        info!(seeded = report.total(), "directory seed complete");
        Ok(report)
    }

    pub fn import_lawyers(&self, lawyers: Vec<Lawyer>) -> Result<usize, RepositoryError> {
        let count = lawyers.len();
        self.repository.extend(Catalog {
            lawyers,
            ..Catalog::default()
        })?;
        info!(imported = count, "lawyer import applied");
        Ok(count)
    }
}

/// Favorites bookkeeping for the signed-in user.
///
/// Mutations without a user are rejected; reads without a user see nothing.
pub struct FavoritesService<F> {
    repository: Arc<F>,
}

impl<F> FavoritesService<F>
where
    F: FavoritesRepository + 'static,
{
    pub fn new(repository: Arc<F>) -> Self {
        Self { repository }
    }

    pub fn add(
        &self,
        user: Option<&UserId>,
        item_type: FavoriteItemType,
        item_id: RecordId,
        notes: Option<String>,
    ) -> Result<Favorite, FavoritesError> {
        let user = user.ok_or(FavoritesError::Unauthenticated)?;

        if self.repository.find(user, &item_id)?.is_some() {
            return Err(FavoritesError::AlreadyFavorited);
        }

        let favorite = match self.repository.insert(Favorite {
            user_id: user.clone(),
            item_type,
            item_id,
            added_at: Utc::now(),
            notes,
        }) {
            Ok(favorite) => favorite,
            Err(RepositoryError::Conflict) => return Err(FavoritesError::AlreadyFavorited),
            Err(other) => return Err(other.into()),
        };
        debug!(item = favorite.item_id.as_str(), "favorite added");
        Ok(favorite)
    }

    pub fn remove(
        &self,
        user: Option<&UserId>,
        item_id: &RecordId,
    ) -> Result<Favorite, FavoritesError> {
        let user = user.ok_or(FavoritesError::Unauthenticated)?;

        match self.repository.remove(user, item_id) {
            Ok(favorite) => Ok(favorite),
            Err(RepositoryError::NotFound) => Err(FavoritesError::NotFavorited),
            Err(other) => Err(other.into()),
        }
    }

    pub fn list(
        &self,
        user: Option<&UserId>,
        item_type: Option<FavoriteItemType>,
    ) -> Result<Vec<Favorite>, FavoritesError> {
        let Some(user) = user else {
            return Ok(Vec::new());
        };

        let favorites = self.repository.list(user)?;
        Ok(match item_type {
            Some(item_type) => favorites
                .into_iter()
                .filter(|favorite| favorite.item_type == item_type)
                .collect(),
            None => favorites,
        })
    }

    pub fn is_favorited(
        &self,
        user: Option<&UserId>,
        item_id: &RecordId,
    ) -> Result<bool, FavoritesError> {
        match user {
            Some(user) => Ok(self.repository.find(user, item_id)?.is_some()),
            None => Ok(false),
        }
    }

    pub fn update_notes(
        &self,
        user: Option<&UserId>,
        item_id: &RecordId,
        notes: String,
    ) -> Result<Favorite, FavoritesError> {
        let user = user.ok_or(FavoritesError::Unauthenticated)?;

        let mut favorite = self
            .repository
            .find(user, item_id)?
            .ok_or(FavoritesError::NotFavorited)?;
        favorite.notes = Some(notes);
        match self.repository.update(favorite.clone()) {
            Ok(()) => Ok(favorite),
            Err(RepositoryError::NotFound) => Err(FavoritesError::NotFavorited),
            Err(other) => Err(other.into()),
        }
    }
}

/// Error raised by the favorites service.
#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    #[error("not authenticated")]
    Unauthenticated,
    #[error("item already in favorites")]
    AlreadyFavorited,
    #[error("item not in favorites")]
    NotFavorited,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Profile reads and updates for the signed-in user.
///
/// Reads without a user return nothing; writes without a user are rejected.
pub struct ProfileService<P> {
    repository: Arc<P>,
}

impl<P> ProfileService<P>
where
    P: ProfileRepository + 'static,
{
    pub fn new(repository: Arc<P>) -> Self {
        Self { repository }
    }

    pub fn profile(&self, user: Option<&UserId>) -> Result<Option<UserProfile>, ProfileError> {
        match user {
            Some(user) => Ok(self.repository.find(user)?),
            None => Ok(None),
        }
    }

    /// Create the default profile. An existing profile is returned untouched.
    pub fn create(&self, user: Option<&UserId>) -> Result<UserProfile, ProfileError> {
        let user = user.ok_or(ProfileError::Unauthenticated)?;

        if let Some(existing) = self.repository.find(user)? {
            return Ok(existing);
        }

        let profile = UserProfile::with_defaults(user.clone(), Utc::now());
        self.repository.save(profile.clone())?;
        info!(user = user.0.as_str(), "profile created");
        Ok(profile)
    }

    /// Apply the provided fields, creating a default profile first when none exists.
    pub fn update(
        &self,
        user: Option<&UserId>,
        patch: ProfilePatch,
    ) -> Result<UserProfile, ProfileError> {
        let user = user.ok_or(ProfileError::Unauthenticated)?;
        let now = Utc::now();

        let mut profile = match self.repository.find(user)? {
            Some(existing) => existing,
            None => {
                debug!(user = user.0.as_str(), "creating profile on first update");
                UserProfile::with_defaults(user.clone(), now)
            }
        };
        patch.apply(&mut profile, now);
        self.repository.save(profile.clone())?;
        Ok(profile)
    }
}

/// Error raised by the profile service.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("not authenticated")]
    Unauthenticated,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

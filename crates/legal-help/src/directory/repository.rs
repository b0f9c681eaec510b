use super::domain::{
    Catalog, Category, Favorite, Lawyer, LegalAidService, LegalResource, RecordId, UserId,
    UserProfile,
};

/// Read access to the hosted directory collections, plus bulk loading for seeds and imports.
pub trait DirectoryRepository: Send + Sync {
    fn categories(&self) -> Result<Vec<Category>, RepositoryError>;
    fn lawyers(&self) -> Result<Vec<Lawyer>, RepositoryError>;
    fn legal_aid_services(&self) -> Result<Vec<LegalAidService>, RepositoryError>;
    fn legal_resources(&self) -> Result<Vec<LegalResource>, RepositoryError>;
    fn extend(&self, additions: Catalog) -> Result<(), RepositoryError>;
}

/// Per-user favorites storage, keyed by user and item.
pub trait FavoritesRepository: Send + Sync {
    fn find(&self, user: &UserId, item: &RecordId) -> Result<Option<Favorite>, RepositoryError>;
    fn insert(&self, favorite: Favorite) -> Result<Favorite, RepositoryError>;
    fn update(&self, favorite: Favorite) -> Result<(), RepositoryError>;
    fn remove(&self, user: &UserId, item: &RecordId) -> Result<Favorite, RepositoryError>;
    fn list(&self, user: &UserId) -> Result<Vec<Favorite>, RepositoryError>;
}

/// One profile per user.
pub trait ProfileRepository: Send + Sync {
    fn find(&self, user: &UserId) -> Result<Option<UserProfile>, RepositoryError>;
    /// Insert or replace the profile keyed by `profile.user_id`.
    fn save(&self, profile: UserProfile) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

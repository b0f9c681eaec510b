//! Legal-help directory: categories, lawyers, legal-aid services, legal resources,
//! per-user favorites and profiles over a hosted document store.

pub mod domain;
pub mod import;
pub mod query;
pub mod repository;
pub mod router;
pub mod seed;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Catalog, Category, Favorite, FavoriteItemType, Lawyer, LegalAidService, LegalResource,
    NotificationPreferences, ProfileLocation, ProfilePatch, RecordId, ResourceKind, ServiceType,
    UserId, UserProfile,
};
pub use import::{LawyerImportError, LawyerImporter};
pub use query::{LawyerFilter, ServiceFilter, ALL_SPECIALTIES, FEATURED_SPECIALTIES};
pub use repository::{
    DirectoryRepository, FavoritesRepository, ProfileRepository, RepositoryError,
};
pub use router::{directory_router, profile_router, DirectoryState, USER_HEADER};
pub use service::{
    DirectoryService, FavoritesError, FavoritesService, ProfileError, ProfileService, SeedReport,
};

use crate::config::ConfigError;
use crate::directory::{FavoritesError, LawyerImportError, ProfileError, RepositoryError};
use crate::telemetry::TelemetryError;
use crate::triage::TriageError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Import(LawyerImportError),
    InvalidQuery(String),
    Directory(RepositoryError),
    Favorites(FavoritesError),
    Profile(ProfileError),
    Triage(TriageError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Import(_) | AppError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            AppError::Triage(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Favorites(FavoritesError::Unauthenticated)
            | AppError::Profile(ProfileError::Unauthenticated) => StatusCode::UNAUTHORIZED,
            AppError::Favorites(FavoritesError::AlreadyFavorited) => StatusCode::CONFLICT,
            AppError::Favorites(FavoritesError::NotFavorited) => StatusCode::NOT_FOUND,
            AppError::Directory(err)
            | AppError::Favorites(FavoritesError::Repository(err))
            | AppError::Profile(ProfileError::Repository(err)) => repository_status(err),
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) | AppError::Server(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

fn repository_status(err: &RepositoryError) -> StatusCode {
    match err {
        RepositoryError::Conflict => StatusCode::CONFLICT,
        RepositoryError::NotFound => StatusCode::NOT_FOUND,
        RepositoryError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Import(err) => write!(f, "import error: {}", err),
            AppError::InvalidQuery(reason) => write!(f, "invalid query: {}", reason),
            AppError::Directory(err) => write!(f, "directory error: {}", err),
            AppError::Favorites(err) => write!(f, "favorites error: {}", err),
            AppError::Profile(err) => write!(f, "profile error: {}", err),
            AppError::Triage(err) => write!(f, "triage error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Import(err) => Some(err),
            AppError::InvalidQuery(_) => None,
            AppError::Directory(err) => Some(err),
            AppError::Favorites(err) => Some(err),
            AppError::Profile(err) => Some(err),
            AppError::Triage(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<LawyerImportError> for AppError {
    fn from(value: LawyerImportError) -> Self {
        Self::Import(value)
    }
}

impl From<RepositoryError> for AppError {
    fn from(value: RepositoryError) -> Self {
        Self::Directory(value)
    }
}

impl From<FavoritesError> for AppError {
    fn from(value: FavoritesError) -> Self {
        Self::Favorites(value)
    }
}

impl From<ProfileError> for AppError {
    fn from(value: ProfileError) -> Self {
        Self::Profile(value)
    }
}

impl From<TriageError> for AppError {
    fn from(value: TriageError) -> Self {
        Self::Triage(value)
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for directory records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identity handed over by the authentication provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Browsable area of law shown on the home screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub is_emergency: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lawyer {
    pub id: RecordId,
    pub name: String,
    pub firm: Option<String>,
    pub specialties: Vec<String>,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub rating: Option<f32>,
    pub review_count: Option<u32>,
    pub accepts_legal_aid: bool,
    pub languages: Vec<String>,
    pub years_of_experience: Option<u16>,
    pub created_at: DateTime<Utc>,
}

impl Lawyer {
    /// Case-insensitive match against name, firm, or any specialty.
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&needle)
            || self
                .firm
                .as_deref()
                .is_some_and(|firm| firm.to_lowercase().contains(&needle))
            || self
                .specialties
                .iter()
                .any(|specialty| specialty.to_lowercase().contains(&needle))
    }

    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.specialties.iter().any(|entry| entry == specialty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Clinic,
    Program,
    Hotline,
}

impl ServiceType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Clinic, Self::Hotline, Self::Program]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clinic => "clinic",
            Self::Program => "program",
            Self::Hotline => "hotline",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "clinic" => Some(Self::Clinic),
            "program" => Some(Self::Program),
            "hotline" => Some(Self::Hotline),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalAidService {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub service_type: ServiceType,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub hours_of_operation: Option<String>,
    pub eligibility_requirements: Option<String>,
    pub areas_of_law: Vec<String>,
    pub is_walk_in_available: bool,
    pub appointment_required: bool,
    pub languages: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Resource,
    Guide,
    Form,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalResource {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub kind: ResourceKind,
    pub url: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub tags: Vec<String>,
    pub is_emergency: bool,
    pub is_free: bool,
    pub created_at: DateTime<Utc>,
}

/// Kind of directory entry a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteItemType {
    Lawyer,
    LegalAidService,
    LegalResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub user_id: UserId,
    pub item_type: FavoriteItemType,
    pub item_id: RecordId,
    pub added_at: DateTime<Utc>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLocation {
    pub city: String,
    pub province: String,
    #[serde(default)]
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            sms: false,
        }
    }
}

/// Preferences the signed-in user keeps alongside their favorites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    pub location: Option<ProfileLocation>,
    pub legal_interests: Vec<String>,
    pub preferred_languages: Vec<String>,
    pub notification_preferences: NotificationPreferences,
    pub search_radius_km: Option<u32>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Fresh profile: no interests, English, email and push notifications.
    pub fn with_defaults(user_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            location: None,
            legal_interests: Vec::new(),
            preferred_languages: vec!["English".to_string()],
            notification_preferences: NotificationPreferences::default(),
            search_radius_km: None,
            updated_at: now,
        }
    }
}

/// Partial profile update. Absent fields leave the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfilePatch {
    #[serde(default)]
    pub location: Option<ProfileLocation>,
    #[serde(default)]
    pub legal_interests: Option<Vec<String>>,
    #[serde(default)]
    pub preferred_languages: Option<Vec<String>>,
    #[serde(default)]
    pub notification_preferences: Option<NotificationPreferences>,
    #[serde(default)]
    pub search_radius_km: Option<u32>,
}

impl ProfilePatch {
    pub fn apply(self, profile: &mut UserProfile, now: DateTime<Utc>) {
        if let Some(location) = self.location {
            profile.location = Some(location);
        }
        if let Some(interests) = self.legal_interests {
            profile.legal_interests = interests;
        }
        if let Some(languages) = self.preferred_languages {
            profile.preferred_languages = languages;
        }
        if let Some(preferences) = self.notification_preferences {
            profile.notification_preferences = preferences;
        }
        if let Some(radius) = self.search_radius_km {
            profile.search_radius_km = Some(radius);
        }
        profile.updated_at = now;
    }
}

/// Batch of directory records, used for seeding and imports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub lawyers: Vec<Lawyer>,
    pub legal_aid_services: Vec<LegalAidService>,
    pub legal_resources: Vec<LegalResource>,
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.lawyers.is_empty()
            && self.legal_aid_services.is_empty()
            && self.legal_resources.is_empty()
    }
}

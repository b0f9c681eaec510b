use serde::Deserialize;

use super::domain::{Lawyer, LegalAidService, LegalResource, ServiceType};

/// Specialty value meaning "no specialty filter".
pub const ALL_SPECIALTIES: &str = "All";

/// Specialties offered as quick filters on the lawyer directory.
pub const FEATURED_SPECIALTIES: [&str; 6] = [
    "Family Law",
    "Criminal Law",
    "Employment Law",
    "Personal Injury",
    "Immigration Law",
    "Real Estate",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LawyerFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
}

impl LawyerFilter {
    pub fn matches(&self, lawyer: &Lawyer) -> bool {
        let matches_search = self
            .search
            .as_deref()
            .map_or(true, |term| lawyer.matches_search(term));

        let matches_specialty = match self.specialty.as_deref().map(str::trim) {
            None | Some("") | Some(ALL_SPECIALTIES) => true,
            Some(specialty) => lawyer.has_specialty(specialty),
        };

        matches_search && matches_specialty
    }

    pub fn apply(&self, lawyers: Vec<Lawyer>) -> Vec<Lawyer> {
        lawyers
            .into_iter()
            .filter(|lawyer| self.matches(lawyer))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceFilter {
    pub service_type: Option<ServiceType>,
}

impl ServiceFilter {
    pub fn apply(&self, services: Vec<LegalAidService>) -> Vec<LegalAidService> {
        match self.service_type {
            None => services,
            Some(service_type) => services
                .into_iter()
                .filter(|service| service.service_type == service_type)
                .collect(),
        }
    }
}

pub fn resources_in_category(resources: Vec<LegalResource>, category: &str) -> Vec<LegalResource> {
    resources
        .into_iter()
        .filter(|resource| resource.category == category)
        .collect()
}

pub fn emergency_resources(resources: Vec<LegalResource>) -> Vec<LegalResource> {
    resources
        .into_iter()
        .filter(|resource| resource.is_emergency)
        .collect()
}

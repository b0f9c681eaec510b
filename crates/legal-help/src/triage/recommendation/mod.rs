pub(crate) mod rules;

use serde::Serialize;

use super::answers::AnswerSet;

pub(crate) const DEFAULT_SUMMARY: &str =
    "Based on your answers, here are resources and next steps to get help.";

/// Navigation targets understood by the presentation layer's router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    EmergencyHelp,
    LegalAid,
    LawyerDirectory,
}

impl Destination {
    pub const fn route(self) -> &'static str {
        match self {
            Self::EmergencyHelp => "/emergency",
            Self::LegalAid => "/legal-aid",
            Self::LawyerDirectory => "/lawyers",
        }
    }
}

/// Call to action shown beneath the guidance bullets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendedAction {
    pub destination: Destination,
    pub route: &'static str,
    pub label: &'static str,
}

impl RecommendedAction {
    pub const fn new(destination: Destination, label: &'static str) -> Self {
        Self {
            destination,
            route: destination.route(),
            label,
        }
    }

    pub const fn legal_aid() -> Self {
        Self::new(Destination::LegalAid, "Contact Legal Aid Alberta")
    }

    pub const fn lawyer_directory() -> Self {
        Self::new(Destination::LawyerDirectory, "Find a Lawyer")
    }

    pub const fn emergency_help() -> Self {
        Self::new(Destination::EmergencyHelp, "Open Emergency Help")
    }
}

/// Guidance derived from an answer set. Never stored; recompute on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub summary: &'static str,
    pub bullets: Vec<&'static str>,
    pub primary: RecommendedAction,
    pub secondary: RecommendedAction,
}

impl Recommendation {
    pub fn is_emergency(&self) -> bool {
        self.primary.destination == Destination::EmergencyHelp
    }
}

/// Map the answers to a recommendation. Total over every answer set, partial or empty.
///
/// Bullets are ordered urgency first, then topic guidance, then one location bullet.
/// An emergency answer owns the primary action; topic guidance never replaces it.
pub fn compute_recommendation(answers: &AnswerSet) -> Recommendation {
    let mut draft = rules::Draft::new();

    rules::apply_urgency(&mut draft, answers.urgency());
    rules::apply_topic(&mut draft, answers.topic());
    rules::apply_location(&mut draft, answers.location());

    draft.finish()
}

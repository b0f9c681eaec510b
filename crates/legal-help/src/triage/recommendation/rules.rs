use super::super::questions::{LocationPreference, Topic, Urgency};
use super::{Recommendation, RecommendedAction, DEFAULT_SUMMARY};

pub(crate) const URGENT_CALL_911: &str = "If safety is at risk, call 911 immediately.";
pub(crate) const URGENT_EMERGENCY_PAGE: &str = "Use our Emergency Help page for 24/7 services.";
pub(crate) const LANDLORD_TENANCIES_ACT: &str =
    "Your issue may fall under the Residential Tenancies Act.";
pub(crate) const LANDLORD_RTDRS: &str =
    "The RTDRS (Residential Tenancy Dispute Resolution Service) may help.";
pub(crate) const FAMILY_LEGAL_AID: &str = "Family matters may qualify for Legal Aid support.";
pub(crate) const JOB_STANDARDS: &str = "Employment Standards or Human Rights may apply.";
pub(crate) const CONSUMER_PROTECTION: &str = "Consider provincial Consumer Protection resources.";
pub(crate) const GENERAL_GUIDANCE: &str = "General legal guidance and directory are available.";
pub(crate) const NEARBY_SERVICES: &str = "We’ll prioritize nearby services based on your location.";
pub(crate) const PROVINCE_WIDE: &str = "Showing province-wide options.";

pub(crate) struct Draft {
    summary: &'static str,
    bullets: Vec<&'static str>,
    primary: RecommendedAction,
    secondary: RecommendedAction,
}

impl Draft {
    pub(crate) fn new() -> Self {
        Self {
            summary: DEFAULT_SUMMARY,
            bullets: Vec::new(),
            primary: RecommendedAction::legal_aid(),
            secondary: RecommendedAction::lawyer_directory(),
        }
    }

    pub(crate) fn finish(self) -> Recommendation {
        Recommendation {
            summary: self.summary,
            bullets: self.bullets,
            primary: self.primary,
            secondary: self.secondary,
        }
    }
}

pub(crate) fn apply_urgency(draft: &mut Draft, urgency: Option<Urgency>) {
    if urgency == Some(Urgency::Emergency) {
        draft
            .bullets
            .extend([URGENT_CALL_911, URGENT_EMERGENCY_PAGE]);
        draft.primary = RecommendedAction::emergency_help();
    }
}

pub(crate) fn apply_topic(draft: &mut Draft, topic: Option<Topic>) {
    match topic {
        Some(Topic::Landlord) => draft
            .bullets
            .extend([LANDLORD_TENANCIES_ACT, LANDLORD_RTDRS]),
        Some(Topic::Family) => draft.bullets.push(FAMILY_LEGAL_AID),
        Some(Topic::Job) => draft.bullets.push(JOB_STANDARDS),
        Some(Topic::Consumer) => draft.bullets.push(CONSUMER_PROTECTION),
        Some(Topic::Other) | None => draft.bullets.push(GENERAL_GUIDANCE),
    }
}

// Missing preference reads as province-wide.
pub(crate) fn apply_location(draft: &mut Draft, location: Option<LocationPreference>) {
    let bullet = match location {
        Some(LocationPreference::ShareLocation) => NEARBY_SERVICES,
        Some(LocationPreference::ProvinceWide) | None => PROVINCE_WIDE,
    };
    draft.bullets.push(bullet);
}

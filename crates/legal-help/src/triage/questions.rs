use serde::{Deserialize, Serialize};

/// Identifier for the fixed triage questions, in the order they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QuestionId {
    #[serde(rename = "q1")]
    Topic,
    #[serde(rename = "q2")]
    Urgency,
    #[serde(rename = "q3")]
    Location,
}

impl QuestionId {
    pub const fn ordered() -> [Self; 3] {
        [Self::Topic, Self::Urgency, Self::Location]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Topic => "q1",
            Self::Urgency => "q2",
            Self::Location => "q3",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|id| id.as_str() == raw.trim())
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Topic => 0,
            Self::Urgency => 1,
            Self::Location => 2,
        }
    }
}

/// What the user is facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Landlord,
    Family,
    Job,
    Consumer,
    Other,
}

impl Topic {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Landlord => "landlord",
            Self::Family => "family",
            Self::Job => "job",
            Self::Consumer => "consumer",
            Self::Other => "other",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "landlord" => Some(Self::Landlord),
            "family" => Some(Self::Family),
            "job" => Some(Self::Job),
            "consumer" => Some(Self::Consumer),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    #[serde(rename = "urgent")]
    Emergency,
    Soon,
    Explore,
}

impl Urgency {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Emergency => "urgent",
            Self::Soon => "soon",
            Self::Explore => "explore",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "urgent" => Some(Self::Emergency),
            "soon" => Some(Self::Soon),
            "explore" => Some(Self::Explore),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationPreference {
    #[serde(rename = "loc_yes")]
    ShareLocation,
    #[serde(rename = "loc_no")]
    ProvinceWide,
}

impl LocationPreference {
    pub const fn token(self) -> &'static str {
        match self {
            Self::ShareLocation => "loc_yes",
            Self::ProvinceWide => "loc_no",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "loc_yes" => Some(Self::ShareLocation),
            "loc_no" => Some(Self::ProvinceWide),
            _ => None,
        }
    }
}

/// A selectable answer. `value` is the token recorded in the answer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    pub id: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub title: &'static str,
    pub options: &'static [QuizOption],
}

impl Question {
    pub fn option_for_value(&self, value: &str) -> Option<&'static QuizOption> {
        self.options.iter().find(|option| option.value == value)
    }
}

const TOPIC_OPTIONS: &[QuizOption] = &[
    QuizOption {
        id: "landlord",
        label: "Landlord issue",
        value: "landlord",
    },
    QuizOption {
        id: "family",
        label: "Family matter",
        value: "family",
    },
    QuizOption {
        id: "job",
        label: "Job conflict",
        value: "job",
    },
    QuizOption {
        id: "consumer",
        label: "Consumer dispute",
        value: "consumer",
    },
    QuizOption {
        id: "other",
        label: "Other",
        value: "other",
    },
];

const URGENCY_OPTIONS: &[QuizOption] = &[
    QuizOption {
        id: "emergency",
        label: "Emergency / immediate risk",
        value: "urgent",
    },
    QuizOption {
        id: "soon",
        label: "Soon (within days/weeks)",
        value: "soon",
    },
    QuizOption {
        id: "explore",
        label: "Just exploring options",
        value: "explore",
    },
];

const LOCATION_OPTIONS: &[QuizOption] = &[
    QuizOption {
        id: "loc_yes",
        label: "Yes, use my location",
        value: "loc_yes",
    },
    QuizOption {
        id: "loc_no",
        label: "No, show province-wide",
        value: "loc_no",
    },
];

/// The fixed question bank, asked in this order.
pub const QUESTION_BANK: &[Question] = &[
    Question {
        id: QuestionId::Topic,
        title: "What are you facing?",
        options: TOPIC_OPTIONS,
    },
    Question {
        id: QuestionId::Urgency,
        title: "How urgent is it?",
        options: URGENCY_OPTIONS,
    },
    Question {
        id: QuestionId::Location,
        title: "Share location to find nearby help?",
        options: LOCATION_OPTIONS,
    },
];

pub fn question(index: usize) -> Option<&'static Question> {
    QUESTION_BANK.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_order_matches_question_ids() {
        for (index, question) in QUESTION_BANK.iter().enumerate() {
            assert_eq!(question.id.index(), index);
            assert_eq!(QuestionId::ordered()[index], question.id);
        }
    }

    #[test]
    fn every_option_value_decodes_to_a_typed_token() {
        for option in TOPIC_OPTIONS {
            let topic = Topic::from_token(option.value).expect("topic token");
            assert_eq!(topic.token(), option.value);
        }
        for option in URGENCY_OPTIONS {
            let urgency = Urgency::from_token(option.value).expect("urgency token");
            assert_eq!(urgency.token(), option.value);
        }
        for option in LOCATION_OPTIONS {
            let location = LocationPreference::from_token(option.value).expect("location token");
            assert_eq!(location.token(), option.value);
        }
    }

    #[test]
    fn serde_form_matches_option_tokens() {
        for option in TOPIC_OPTIONS {
            let topic = Topic::from_token(option.value).expect("topic token");
            assert_eq!(
                serde_json::to_value(topic).expect("encodes"),
                serde_json::json!(option.value)
            );
        }
        for option in URGENCY_OPTIONS.iter().chain(LOCATION_OPTIONS) {
            let raw = serde_json::json!(option.value);
            if let Some(urgency) = Urgency::from_token(option.value) {
                let decoded: Urgency = serde_json::from_value(raw.clone()).expect("decodes");
                assert_eq!(decoded, urgency);
            }
            if let Some(location) = LocationPreference::from_token(option.value) {
                let decoded: LocationPreference = serde_json::from_value(raw).expect("decodes");
                assert_eq!(decoded, location);
            }
        }
        assert_eq!(
            serde_json::to_string(&Urgency::Emergency).expect("encodes"),
            "\"urgent\""
        );
    }

    #[test]
    fn emergency_option_records_the_urgent_token() {
        let urgency = question(1).expect("urgency question");
        let option = urgency
            .options
            .iter()
            .find(|option| option.id == "emergency")
            .expect("emergency option");
        assert_eq!(option.value, Urgency::Emergency.token());
        assert!(question(3).is_none());
    }

    #[test]
    fn question_ids_parse_from_wire_form() {
        assert_eq!(QuestionId::parse("q2"), Some(QuestionId::Urgency));
        assert_eq!(QuestionId::parse(" q3 "), Some(QuestionId::Location));
        assert_eq!(QuestionId::parse("q4"), None);
    }
}

use axum::response::Response;
use serde_json::Value;

use crate::triage::answers::AnswerSet;
use crate::triage::questions::{LocationPreference, QuestionId, Topic, Urgency};

pub(super) fn answers(
    topic: Option<Topic>,
    urgency: Option<Urgency>,
    location: Option<LocationPreference>,
) -> AnswerSet {
    let mut answers = AnswerSet::new();
    if let Some(topic) = topic {
        answers.record(QuestionId::Topic, topic.token());
    }
    if let Some(urgency) = urgency {
        answers.record(QuestionId::Urgency, urgency.token());
    }
    if let Some(location) = location {
        answers.record(QuestionId::Location, location.token());
    }
    answers
}

pub(super) fn complete_answers(
    topic: Topic,
    urgency: Urgency,
    location: LocationPreference,
) -> AnswerSet {
    answers(Some(topic), Some(urgency), Some(location))
}

pub(super) fn all_topics() -> [Topic; 5] {
    [
        Topic::Landlord,
        Topic::Family,
        Topic::Job,
        Topic::Consumer,
        Topic::Other,
    ]
}

pub(super) fn all_locations() -> [Option<LocationPreference>; 3] {
    [
        Some(LocationPreference::ShareLocation),
        Some(LocationPreference::ProvinceWide),
        None,
    ]
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

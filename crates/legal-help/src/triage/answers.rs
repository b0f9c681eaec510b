use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::questions::{LocationPreference, QuestionId, Topic, Urgency};

/// Answers recorded so far, keyed by question and ordered by question order.
///
/// Values are the raw option tokens. Typed accessors return `None` for tokens the
/// question bank does not know, so callers fall through to the default branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the answer for `question`.
    pub fn record(&mut self, question: QuestionId, value: impl Into<String>) {
        self.answers.insert(question, value.into());
    }

    pub fn with(mut self, question: QuestionId, value: impl Into<String>) -> Self {
        self.record(question, value);
        self
    }

    pub fn get(&self, question: QuestionId) -> Option<&str> {
        self.answers.get(&question).map(String::as_str)
    }

    pub fn contains(&self, question: QuestionId) -> bool {
        self.answers.contains_key(&question)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &str)> {
        self.answers
            .iter()
            .map(|(question, value)| (*question, value.as_str()))
    }

    pub fn topic(&self) -> Option<Topic> {
        self.get(QuestionId::Topic).and_then(Topic::from_token)
    }

    pub fn urgency(&self) -> Option<Urgency> {
        self.get(QuestionId::Urgency).and_then(Urgency::from_token)
    }

    pub fn location(&self) -> Option<LocationPreference> {
        self.get(QuestionId::Location)
            .and_then(LocationPreference::from_token)
    }
}

impl From<BTreeMap<String, String>> for AnswerSet {
    fn from(raw: BTreeMap<String, String>) -> Self {
        let mut answers = BTreeMap::new();
        for (key, value) in raw {
            match QuestionId::parse(&key) {
                Some(question) => {
                    answers.insert(question, value);
                }
                None => debug!(question = %key, "dropping answer for unknown question"),
            }
        }
        Self { answers }
    }
}

impl From<AnswerSet> for BTreeMap<String, String> {
    fn from(set: AnswerSet) -> Self {
        set.answers
            .into_iter()
            .map(|(question, value)| (question.as_str().to_string(), value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decoding_drops_unknown_questions_and_keeps_unknown_tokens() {
        let answers: AnswerSet = serde_json::from_value(json!({
            "q1": "landlord",
            "q2": "whenever",
            "q9": "loc_yes",
        }))
        .expect("answer map decodes");

        assert_eq!(answers.len(), 2);
        assert_eq!(answers.topic(), Some(Topic::Landlord));
        assert_eq!(answers.get(QuestionId::Urgency), Some("whenever"));
        assert_eq!(answers.urgency(), None);
        assert!(!answers.contains(QuestionId::Location));
    }

    #[test]
    fn iteration_follows_question_order() {
        let answers = AnswerSet::new()
            .with(QuestionId::Location, "loc_no")
            .with(QuestionId::Topic, "job");

        let order: Vec<QuestionId> = answers.iter().map(|(question, _)| question).collect();
        assert_eq!(order, vec![QuestionId::Topic, QuestionId::Location]);
    }

    #[test]
    fn encodes_with_wire_question_ids() {
        let answers = AnswerSet::new().with(QuestionId::Urgency, "soon");
        let value = serde_json::to_value(&answers).expect("encodes");
        assert_eq!(value, json!({ "q2": "soon" }));
    }
}

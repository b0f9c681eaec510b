//! Situation triage: a three-question quiz (topic, urgency, location sharing) mapped
//! to guidance bullets and two calls to action.
//!
//! Everything here is synchronous and free of I/O. The same answers always produce
//! the same recommendation, and malformed answers degrade to the default guidance
//! instead of failing.

pub mod answers;
pub mod flow;
pub mod questions;
pub mod recommendation;
pub mod router;
pub mod session;

#[cfg(test)]
mod tests;

pub use answers::AnswerSet;
pub use flow::{advance, retreat, QuizStep, RetreatStep, TriageError};
pub use questions::{
    question, LocationPreference, Question, QuestionId, QuizOption, Topic, Urgency,
    QUESTION_BANK,
};
pub use recommendation::{compute_recommendation, Destination, Recommendation, RecommendedAction};
pub use router::triage_router;
pub use session::QuizSession;

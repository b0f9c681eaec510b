use tracing::{debug, info};

use super::answers::AnswerSet;
use super::flow::{advance, retreat, QuizStep, RetreatStep, TriageError};
use super::questions::{Question, QUESTION_BANK};
use super::recommendation::{compute_recommendation, Recommendation};

/// Single-user quiz state: the answers so far, the current question, and whether
/// the result screen is showing.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    answers: AnswerSet,
    index: usize,
    complete: bool,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn question_index(&self) -> usize {
        self.index
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The question awaiting an answer, or `None` once the result is showing.
    pub fn current_question(&self) -> Option<&'static Question> {
        if self.complete {
            None
        } else {
            QUESTION_BANK.get(self.index)
        }
    }

    pub fn selected(&self) -> Option<&str> {
        let question = self.current_question()?;
        self.answers.get(question.id)
    }

    /// "2/3" style progress label for the current question.
    pub fn progress(&self) -> String {
        let total = QUESTION_BANK.len();
        format!("{}/{}", (self.index + 1).min(total), total)
    }

    /// Record `value` for the current question. Only the question's own option tokens are accepted.
    pub fn select(&mut self, value: &str) -> Result<(), TriageError> {
        let question = self
            .current_question()
            .ok_or(TriageError::AlreadyComplete)?;

        let option =
            question
                .option_for_value(value)
                .ok_or_else(|| TriageError::UnknownOption {
                    question: question.id,
                    value: value.to_string(),
                })?;

        debug!(question = question.id.as_str(), value = option.value, "answer selected");
        self.answers.record(question.id, option.value);
        Ok(())
    }

    pub fn next(&mut self) -> Result<QuizStep, TriageError> {
        if self.complete {
            return Err(TriageError::AlreadyComplete);
        }

        let step = advance(&self.answers, self.index)?;
        match step {
            QuizStep::Question(index) => self.index = index,
            QuizStep::Complete => {
                self.complete = true;
                info!(answered = self.answers.len(), "triage quiz complete");
            }
        }
        Ok(step)
    }

    /// Step back. From the result screen this returns to the last question.
    pub fn back(&mut self) -> Result<RetreatStep, TriageError> {
        if self.complete {
            self.complete = false;
            return Ok(RetreatStep::Question(self.index));
        }

        let step = retreat(self.index)?;
        if let RetreatStep::Question(index) = step {
            self.index = index;
        }
        Ok(step)
    }

    pub fn result(&self) -> Recommendation {
        compute_recommendation(&self.answers)
    }

    /// Start over with a fresh answer set.
    pub fn retake(&mut self) {
        debug!("triage quiz restarted");
        *self = Self::new();
    }
}

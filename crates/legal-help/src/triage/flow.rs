use serde::Serialize;

use super::answers::AnswerSet;
use super::questions::{QuestionId, QUESTION_BANK};

/// Where the quiz goes after the current question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "step", content = "question_index", rename_all = "snake_case")]
pub enum QuizStep {
    Question(usize),
    Complete,
}

/// Where the quiz goes when the user steps back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "step", content = "question_index", rename_all = "snake_case")]
pub enum RetreatStep {
    Question(usize),
    Exit,
}

/// Invalid quiz state supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TriageError {
    #[error("question index {index} is outside the {len}-question bank")]
    QuestionOutOfRange { index: usize, len: usize },
    #[error("question {} has no recorded answer", .question.as_str())]
    MissingAnswer { question: QuestionId },
    #[error("'{value}' is not an option for question {}", .question.as_str())]
    UnknownOption { question: QuestionId, value: String },
    #[error("the quiz is already complete")]
    AlreadyComplete,
}

/// Move past question `index`. The current question must already have an answer.
pub fn advance(answers: &AnswerSet, index: usize) -> Result<QuizStep, TriageError> {
    let question = QUESTION_BANK
        .get(index)
        .ok_or(TriageError::QuestionOutOfRange {
            index,
            len: QUESTION_BANK.len(),
        })?;

    if !answers.contains(question.id) {
        return Err(TriageError::MissingAnswer {
            question: question.id,
        });
    }

    if index + 1 < QUESTION_BANK.len() {
        Ok(QuizStep::Question(index + 1))
    } else {
        Ok(QuizStep::Complete)
    }
}

/// Step back from question `index`; stepping back from the first question exits the flow.
pub fn retreat(index: usize) -> Result<RetreatStep, TriageError> {
    if index >= QUESTION_BANK.len() {
        return Err(TriageError::QuestionOutOfRange {
            index,
            len: QUESTION_BANK.len(),
        });
    }

    Ok(match index.checked_sub(1) {
        Some(previous) => RetreatStep::Question(previous),
        None => RetreatStep::Exit,
    })
}

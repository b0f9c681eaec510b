use super::common::*;
use crate::triage::answers::AnswerSet;
use crate::triage::flow::{advance, retreat, QuizStep, RetreatStep, TriageError};
use crate::triage::questions::{LocationPreference, QuestionId, Topic, Urgency, QUESTION_BANK};
use crate::triage::recommendation::Destination;
use crate::triage::session::QuizSession;

#[test]
fn advance_moves_to_next_question_when_answered() {
    let answers = answers(Some(Topic::Job), None, None);

    assert_eq!(advance(&answers, 0), Ok(QuizStep::Question(1)));
}

#[test]
fn advance_on_last_question_completes() {
    let answers = complete_answers(
        Topic::Job,
        Urgency::Soon,
        LocationPreference::ProvinceWide,
    );

    assert_eq!(
        advance(&answers, QUESTION_BANK.len() - 1),
        Ok(QuizStep::Complete)
    );
}

#[test]
fn advance_rejects_unanswered_question() {
    let answers = answers(Some(Topic::Job), None, None);

    assert_eq!(
        advance(&answers, 1),
        Err(TriageError::MissingAnswer {
            question: QuestionId::Urgency
        })
    );
}

#[test]
fn advance_rejects_out_of_range_index() {
    let answers = complete_answers(
        Topic::Job,
        Urgency::Soon,
        LocationPreference::ProvinceWide,
    );

    assert_eq!(
        advance(&answers, 3),
        Err(TriageError::QuestionOutOfRange { index: 3, len: 3 })
    );
}

#[test]
fn retreat_exits_from_first_question() {
    assert_eq!(retreat(0), Ok(RetreatStep::Exit));
    assert_eq!(retreat(2), Ok(RetreatStep::Question(1)));
    assert!(matches!(
        retreat(7),
        Err(TriageError::QuestionOutOfRange { index: 7, .. })
    ));
}

#[test]
fn session_walks_the_full_quiz() {
    let mut session = QuizSession::new();
    assert_eq!(session.progress(), "1/3");
    assert!(session.selected().is_none());

    session.select("landlord").expect("topic option");
    assert_eq!(session.next(), Ok(QuizStep::Question(1)));
    assert_eq!(session.progress(), "2/3");

    session.select("urgent").expect("urgency option");
    assert_eq!(session.next(), Ok(QuizStep::Question(2)));

    session.select("loc_yes").expect("location option");
    assert_eq!(session.progress(), "3/3");
    assert_eq!(session.next(), Ok(QuizStep::Complete));

    assert!(session.is_complete());
    assert!(session.current_question().is_none());
    let result = session.result();
    assert_eq!(result.primary.destination, Destination::EmergencyHelp);
    assert_eq!(session.next(), Err(TriageError::AlreadyComplete));
}

#[test]
fn session_rejects_tokens_from_other_questions() {
    let mut session = QuizSession::new();

    let error = session.select("loc_yes").expect_err("wrong question token");
    assert_eq!(
        error,
        TriageError::UnknownOption {
            question: QuestionId::Topic,
            value: "loc_yes".to_string()
        }
    );
    assert!(session.answers().is_empty());
}

#[test]
fn session_cannot_advance_without_selection() {
    let mut session = QuizSession::new();

    assert_eq!(
        session.next(),
        Err(TriageError::MissingAnswer {
            question: QuestionId::Topic
        })
    );
    assert_eq!(session.question_index(), 0);
}

#[test]
fn session_back_keeps_answers_and_exits_at_start() {
    let mut session = QuizSession::new();
    session.select("family").expect("topic option");
    session.next().expect("advance");

    assert_eq!(session.back(), Ok(RetreatStep::Question(0)));
    assert_eq!(session.selected(), Some("family"));
    assert_eq!(session.back(), Ok(RetreatStep::Exit));
    assert_eq!(session.question_index(), 0);
}

#[test]
fn back_from_result_returns_to_last_question() {
    let mut session = QuizSession::new();
    for value in ["consumer", "explore", "loc_no"] {
        session.select(value).expect("option");
        session.next().expect("advance");
    }
    assert!(session.is_complete());

    assert_eq!(session.back(), Ok(RetreatStep::Question(2)));
    assert!(!session.is_complete());
    assert_eq!(session.selected(), Some("loc_no"));
}

#[test]
fn retake_starts_with_fresh_answers() {
    let mut session = QuizSession::new();
    for value in ["job", "soon", "loc_yes"] {
        session.select(value).expect("option");
        session.next().expect("advance");
    }

    session.retake();

    assert!(!session.is_complete());
    assert_eq!(session.question_index(), 0);
    assert_eq!(session.answers(), &AnswerSet::new());
}

#[test]
fn reselecting_replaces_previous_answer() {
    let mut session = QuizSession::new();
    session.select("job").expect("option");
    session.select("family").expect("option");

    assert_eq!(session.answers().topic(), Some(Topic::Family));
    assert_eq!(session.answers().len(), 1);
}

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::info;

use super::answers::AnswerSet;
use super::flow::{advance, retreat, QuizStep, RetreatStep};
use super::questions::{Question, QUESTION_BANK};
use super::recommendation::{compute_recommendation, Recommendation};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub(crate) struct AdvanceRequest {
    #[serde(default)]
    pub(crate) answers: AnswerSet,
    pub(crate) question_index: usize,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RetreatRequest {
    pub(crate) question_index: usize,
}

/// Router exposing the question bank, quiz navigation, and recommendations.
pub fn triage_router() -> Router {
    Router::new()
        .route("/api/v1/triage/questions", get(questions_handler))
        .route("/api/v1/triage/recommendation", post(recommendation_handler))
        .route("/api/v1/triage/advance", post(advance_handler))
        .route("/api/v1/triage/retreat", post(retreat_handler))
}

pub(crate) async fn questions_handler() -> Json<&'static [Question]> {
    Json(QUESTION_BANK)
}

pub(crate) async fn recommendation_handler(Json(answers): Json<AnswerSet>) -> Json<Recommendation> {
    let recommendation = compute_recommendation(&answers);
    info!(
        answered = answers.len(),
        emergency = recommendation.is_emergency(),
        primary = recommendation.primary.route,
        "triage recommendation computed"
    );
    Json(recommendation)
}

pub(crate) async fn advance_handler(
    Json(request): Json<AdvanceRequest>,
) -> Result<Json<QuizStep>, AppError> {
    Ok(Json(advance(&request.answers, request.question_index)?))
}

pub(crate) async fn retreat_handler(
    Json(request): Json<RetreatRequest>,
) -> Result<Json<RetreatStep>, AppError> {
    Ok(Json(retreat(request.question_index)?))
}

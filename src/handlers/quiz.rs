// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::quiz::{QuizRequest, QuizResponse},
    services::quiz,
    state::SharedStore,
};

/// Serves the next quiz question.
///
/// * Expects `{previous_questions: [ids], quiz_category: {id, type}}`; id 0 means all categories.
/// * Responds with `question: null` when the category is exhausted.
/// * A missing body or `quiz_category` is 422.
pub async fn next_question(
    State(store): State<SharedStore>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;
    let question = quiz::play(store.as_ref(), &req).await?;

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

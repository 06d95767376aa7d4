// src/handlers/questions.rs

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::IntoResponse,
};

use crate::{
    error::AppError,
    models::question::{CreateQuestionRequest, SearchRequest},
    pagination::Page,
    services::questions,
    state::SharedStore,
};

/// Lists questions ten per page, with the category mapping.
/// 404 when the requested page holds no questions.
pub async fn list_questions(
    State(store): State<SharedStore>,
    Page(page): Page,
) -> Result<impl IntoResponse, AppError> {
    let res = questions::list_questions(store.as_ref(), page).await?;
    Ok(Json(res))
}

/// Creates a question from `{question, answer, category, difficulty}`.
pub async fn create_question(
    State(store): State<SharedStore>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let res = questions::create_question(store.as_ref(), &payload).await?;
    Ok(Json(res))
}

/// Deletes a question by ID.
/// Every failure, including an unknown ID, is reported as 422.
pub async fn delete_question(
    State(store): State<SharedStore>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let res = questions::delete_question(store.as_ref(), id)
        .await
        .map_err(AppError::into_unprocessable)?;
    Ok(Json(res))
}

/// Searches question text for `searchTerm`, case-insensitively.
pub async fn search_questions(
    State(store): State<SharedStore>,
    Page(page): Page,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let res = questions::search_questions(
        store.as_ref(),
        payload.search_term.as_deref(),
        page,
    )
    .await?;
    Ok(Json(res))
}

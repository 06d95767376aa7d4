// src/handlers/categories.rs

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
};

use crate::{error::AppError, pagination::Page, services::questions, state::SharedStore};

/// Returns every category as an `{id: type}` mapping.
pub async fn list_categories(
    State(store): State<SharedStore>,
) -> Result<impl IntoResponse, AppError> {
    let res = questions::list_categories(store.as_ref()).await?;
    Ok(Json(res))
}

/// Lists the questions of one category. Category existence is not checked.
pub async fn questions_by_category(
    State(store): State<SharedStore>,
    id: Result<Path<i64>, PathRejection>,
    Page(page): Page,
) -> Result<impl IntoResponse, AppError> {
    let Path(category_id) = id?;
    let res = questions::questions_by_category(store.as_ref(), category_id, page).await?;
    Ok(Json(res))
}

// src/services/questions.rs

use serde::Serialize;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        category::{CategoryMap, category_map},
        question::{CreateQuestionRequest, Question},
    },
    pagination::paginate,
    store::TriviaStore,
};

/// `GET /questions`
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Option<i64>,
}

/// `POST /questions/query` and `GET /categories/{id}/questions`
#[derive(Debug, Serialize)]
pub struct FilteredQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_category: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

pub async fn list_categories(store: &dyn TriviaStore) -> Result<CategoriesResponse, AppError> {
    let categories = category_map(store.list_categories().await?);

    Ok(CategoriesResponse {
        success: true,
        categories,
    })
}

/// Lists one page of all questions.
///
/// An empty page is `NotFound`, whether the page is past the end or the store is empty.
pub async fn list_questions(
    store: &dyn TriviaStore,
    page: usize,
) -> Result<QuestionListResponse, AppError> {
    let all = store.list_questions().await?;
    let questions = paginate(&all, page);

    if questions.is_empty() {
        return Err(AppError::NotFound(format!(
            "page {} is empty ({} questions)",
            page,
            all.len()
        )));
    }

    let categories = category_map(store.list_categories().await?);

    Ok(QuestionListResponse {
        success: true,
        questions,
        total_questions: all.len(),
        categories,
        current_category: None,
    })
}

/// Case-insensitive substring search over question text.
///
/// A blank or absent term matches nothing; zero matches is still a success.
pub async fn search_questions(
    store: &dyn TriviaStore,
    term: Option<&str>,
    page: usize,
) -> Result<FilteredQuestionsResponse, AppError> {
    let matches = match term {
        Some(term) if !term.is_empty() => store.search_questions(term).await?,
        _ => Vec::new(),
    };

    tracing::debug!("Search {:?} matched {} questions", term, matches.len());

    Ok(FilteredQuestionsResponse {
        success: true,
        questions: paginate(&matches, page),
        total_questions: matches.len(),
        current_category: None,
    })
}

/// Questions in one category. Unknown categories simply have no questions.
pub async fn questions_by_category(
    store: &dyn TriviaStore,
    category_id: i64,
    page: usize,
) -> Result<FilteredQuestionsResponse, AppError> {
    let in_category = store.list_questions_by_category(category_id).await?;

    Ok(FilteredQuestionsResponse {
        success: true,
        questions: paginate(&in_category, page),
        total_questions: in_category.len(),
        current_category: Some(category_id),
    })
}

/// Validates and inserts a question, then returns the first page of all questions.
pub async fn create_question(
    store: &dyn TriviaStore,
    payload: &CreateQuestionRequest,
) -> Result<CreatedResponse, AppError> {
    payload.validate()?;

    let created = store.insert_question(payload).await?;
    tracing::info!("Created question {}", created);

    let all = store.list_questions().await?;

    Ok(CreatedResponse {
        success: true,
        created,
        questions: paginate(&all, 1),
        total_questions: all.len(),
    })
}

/// Deletes a question, then returns the first page of the remaining questions.
pub async fn delete_question(
    store: &dyn TriviaStore,
    id: i64,
) -> Result<DeletedResponse, AppError> {
    store
        .find_question(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("question {} not found", id)))?;

    if !store.delete_question(id).await? {
        // Removed concurrently between lookup and delete.
        return Err(AppError::NotFound(format!("question {} not found", id)));
    }
    tracing::info!("Deleted question {}", id);

    let remaining = store.list_questions().await?;

    Ok(DeletedResponse {
        success: true,
        deleted: id,
        questions: paginate(&remaining, 1),
        total_questions: remaining.len(),
    })
}

// src/store/mod.rs

//! Persistence boundary for questions and categories.
//!
//! Handlers never touch the database directly; they receive an
//! `Arc<dyn TriviaStore>` from the application state so tests can swap in
//! [`memory::InMemoryStore`].

pub mod memory;
pub mod postgres;

use std::fmt;

use async_trait::async_trait;

use crate::models::{
    category::Category,
    question::{CreateQuestionRequest, Question},
};

#[derive(Debug)]
pub enum StoreError {
    /// The underlying database failed.
    Database(sqlx::Error),

    /// The store refused the write (e.g. a dangling category reference).
    Rejected(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Database(e) => write!(f, "database error: {}", e),
            StoreError::Rejected(msg) => write!(f, "rejected: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Question and category CRUD.
///
/// All listings are ordered by id ascending so that pagination is stable.
/// Each write is atomic on its own.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn list_questions(&self) -> StoreResult<Vec<Question>>;

    async fn list_questions_by_category(&self, category_id: i64) -> StoreResult<Vec<Question>>;

    /// Case-insensitive substring match on the question text. The term is literal.
    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    async fn find_question(&self, id: i64) -> StoreResult<Option<Question>>;

    /// Returns the store-assigned id.
    async fn insert_question(&self, new: &CreateQuestionRequest) -> StoreResult<i64>;

    /// Returns whether a row was removed.
    async fn delete_question(&self, id: i64) -> StoreResult<bool>;
}

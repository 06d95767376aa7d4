// src/store/memory.rs

use std::sync::RwLock;

use async_trait::async_trait;

use crate::{
    models::{
        category::Category,
        question::{CreateQuestionRequest, Question},
    },
    store::{StoreError, StoreResult, TriviaStore},
};

#[derive(Debug)]
struct Tables {
    categories: Vec<Category>,
    /// Kept sorted by id; ids are only ever appended.
    questions: Vec<Question>,
    next_id: i64,
}

/// `TriviaStore` held entirely in memory. Mirrors the database constraints
/// that matter to the API (auto-increment ids, category foreign key).
#[derive(Debug)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            tables: RwLock::new(Tables {
                categories,
                questions: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// The six categories the migrations seed.
    pub fn with_default_categories() -> Self {
        let names = ["Science", "Art", "Geography", "History", "Entertainment", "Sports"];
        let categories = names
            .iter()
            .zip(1..)
            .map(|(name, id)| Category {
                id,
                kind: name.to_string(),
            })
            .collect();
        Self::new(categories)
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| StoreError::Rejected("store lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| StoreError::Rejected("store lock poisoned".to_string()))
    }

    fn filter_questions(&self, keep: impl Fn(&Question) -> bool) -> StoreResult<Vec<Question>> {
        Ok(self.read()?.questions.iter().filter(|q| keep(q)).cloned().collect())
    }
}

#[async_trait]
impl TriviaStore for InMemoryStore {
    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        self.filter_questions(|_| true)
    }

    async fn list_questions_by_category(&self, category_id: i64) -> StoreResult<Vec<Question>> {
        self.filter_questions(|q| q.category == Some(category_id))
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let needle = term.to_lowercase();
        self.filter_questions(|q| q.question.to_lowercase().contains(&needle))
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.read()?.categories.clone())
    }

    async fn find_question(&self, id: i64) -> StoreResult<Option<Question>> {
        Ok(self.read()?.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn insert_question(&self, new: &CreateQuestionRequest) -> StoreResult<i64> {
        let mut tables = self.write()?;

        if let Some(category) = new.category {
            if !tables.categories.iter().any(|c| c.id == category) {
                return Err(StoreError::Rejected(format!(
                    "category {} does not exist",
                    category
                )));
            }
        }

        let id = tables.next_id;
        tables.next_id += 1;
        tables.questions.push(Question {
            id,
            question: new.question.clone(),
            answer: new.answer.clone(),
            category: new.category,
            difficulty: new.difficulty,
        });

        Ok(id)
    }

    async fn delete_question(&self, id: i64) -> StoreResult<bool> {
        let mut tables = self.write()?;
        let before = tables.questions.len();
        tables.questions.retain(|q| q.id != id);
        Ok(tables.questions.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(text: &str, category: Option<i64>) -> CreateQuestionRequest {
        CreateQuestionRequest {
            question: text.to_string(),
            answer: "answer".to_string(),
            category,
            difficulty: Some(2),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let store = InMemoryStore::with_default_categories();
        let a = store.insert_question(&new_question("first", Some(1))).await.unwrap();
        let b = store.insert_question(&new_question("second", None)).await.unwrap();
        assert_eq!((a, b), (1, 2));

        let ids: Vec<i64> = store.list_questions().await.unwrap().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_insert_rejects_unknown_category() {
        let store = InMemoryStore::with_default_categories();
        let res = store.insert_question(&new_question("orphan", Some(99))).await;
        assert!(matches!(res, Err(StoreError::Rejected(_))));
        assert!(store.list_questions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = InMemoryStore::with_default_categories();
        let first = store.insert_question(&new_question("one", None)).await.unwrap();
        assert!(store.delete_question(first).await.unwrap());
        assert!(!store.delete_question(first).await.unwrap());

        let second = store.insert_question(&new_question("two", None)).await.unwrap();
        assert_eq!(second, first + 1);
        assert!(store.find_question(first).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_search_ignores_case() {
        let store = InMemoryStore::with_default_categories();
        store.insert_question(&new_question("Whose autobiography is entitled?", Some(4))).await.unwrap();
        store.insert_question(&new_question("Which is the only team?", Some(6))).await.unwrap();

        let upper = store.search_questions("TITLE").await.unwrap();
        let lower = store.search_questions("title").await.unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 1);
    }
}

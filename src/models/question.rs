// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The question text shown to the player.
    pub question: String,

    pub answer: String,

    /// Foreign reference to `categories.id`; may be absent.
    pub category: Option<i64>,

    pub difficulty: Option<i32>,
}

/// DTO for creating a new question.
///
/// Missing text fields deserialize as empty strings so that they are rejected
/// by validation rather than by the JSON extractor.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 1000))]
    pub question: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 500))]
    pub answer: String,
    pub category: Option<i64>,
    pub difficulty: Option<i32>,
}

/// Body of `POST /questions/query`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_wire_field_names() {
        let q = Question {
            id: 4,
            question: "What boxer's original name is Cassius Clay?".to_string(),
            answer: "Muhammad Ali".to_string(),
            category: Some(4),
            difficulty: Some(1),
        };
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(value["id"], 4);
        assert_eq!(value["question"], "What boxer's original name is Cassius Clay?");
        assert_eq!(value["category"], 4);
        assert_eq!(value["difficulty"], 1);
    }

    #[test]
    fn test_create_request_rejects_empty_text() {
        let req: CreateQuestionRequest =
            serde_json::from_value(serde_json::json!({"question": "", "answer": ""})).unwrap();
        assert!(req.validate().is_err());

        let req: CreateQuestionRequest =
            serde_json::from_value(serde_json::json!({"answer": "scratched"})).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_request_accepts_minimal_question() {
        let req: CreateQuestionRequest = serde_json::from_value(serde_json::json!({
            "question": "Graffiti comes from the Italian word graffiato, meaning what?",
            "answer": "scratched",
            "difficulty": 1,
            "category": 2
        }))
        .unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.category, Some(2));
    }

    #[test]
    fn test_search_request_reads_camel_case_term() {
        let req: SearchRequest =
            serde_json::from_value(serde_json::json!({"searchTerm": "title"})).unwrap();
        assert_eq!(req.search_term.as_deref(), Some("title"));

        let req: SearchRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(req.search_term.is_none());
    }
}

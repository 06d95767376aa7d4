// src/models/quiz.rs

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::question::Question;

/// Body of `POST /quizzes`.
///
/// The server keeps no quiz state; the client echoes every question id it
/// has already been served.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    /// Required. Absent means the request is unprocessable, not "any category".
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    Any,
    Category(i64),
}

/// Category id reserved for "all categories".
pub const ANY_CATEGORY_ID: i64 = 0;

impl From<&QuizCategory> for QuizScope {
    fn from(category: &QuizCategory) -> Self {
        if category.id == ANY_CATEGORY_ID {
            QuizScope::Any
        } else {
            QuizScope::Category(category.id)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    /// `null` once the chosen scope is exhausted.
    pub question: Option<Question>,
}

// some clients send the selected category id as a string ("0", "3")
fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Int(i64),
        Str(String),
    }

    match Id::deserialize(deserializer)? {
        Id::Int(v) => Ok(v),
        Id::Str(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("Wrong value {s}, can not parse to i64"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_category_is_kept_as_none() {
        let req: QuizRequest =
            serde_json::from_value(serde_json::json!({"previous_questions": [1, 2]})).unwrap();
        assert!(req.quiz_category.is_none());
        assert_eq!(req.previous_questions, vec![1, 2]);
    }

    #[test]
    fn test_previous_questions_default_to_empty() {
        let req: QuizRequest = serde_json::from_value(serde_json::json!({
            "quiz_category": {"id": 2, "type": "Art"}
        }))
        .unwrap();
        assert!(req.previous_questions.is_empty());
        let scope = QuizScope::from(req.quiz_category.as_ref().unwrap());
        assert_eq!(scope, QuizScope::Category(2));
    }

    #[test]
    fn test_zero_id_means_any_category() {
        let req: QuizRequest = serde_json::from_value(serde_json::json!({
            "previous_questions": [],
            "quiz_category": {"id": "0", "type": "click"}
        }))
        .unwrap();
        assert_eq!(QuizScope::from(req.quiz_category.as_ref().unwrap()), QuizScope::Any);
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        let res: Result<QuizRequest, _> = serde_json::from_value(serde_json::json!({
            "quiz_category": {"id": "art"}
        }));
        assert!(res.is_err());
    }
}

// src/services/quiz.rs

use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};

use crate::{
    error::AppError,
    models::{
        question::Question,
        quiz::{QuizRequest, QuizScope},
    },
    store::TriviaStore,
};

/// Picks one question from `pool` whose id is not in `previous`, uniformly at random.
///
/// Returns `None` once every candidate has been served.
pub fn select_next<R: Rng + ?Sized>(
    pool: Vec<Question>,
    previous: &HashSet<i64>,
    rng: &mut R,
) -> Option<Question> {
    let unseen: Vec<Question> = pool
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    unseen.choose(rng).cloned()
}

/// Fetches the candidate pool for `scope` and draws the next unseen question.
pub async fn next_question(
    store: &dyn TriviaStore,
    scope: QuizScope,
    previous: &HashSet<i64>,
) -> Result<Option<Question>, AppError> {
    let pool = match scope {
        QuizScope::Any => store.list_questions().await?,
        QuizScope::Category(id) => store.list_questions_by_category(id).await?,
    };

    let pool_size = pool.len();
    let next = select_next(pool, previous, &mut rand::thread_rng());

    match &next {
        Some(q) => tracing::debug!("Quiz {:?}: served question {}", scope, q.id),
        None => tracing::debug!(
            "Quiz {:?} exhausted ({} candidates, {} previously served)",
            scope,
            pool_size,
            previous.len()
        ),
    }

    Ok(next)
}

/// Entry point for `POST /quizzes`: a request without `quiz_category` is unprocessable.
pub async fn play(store: &dyn TriviaStore, req: &QuizRequest) -> Result<Option<Question>, AppError> {
    let category = req
        .quiz_category
        .as_ref()
        .ok_or_else(|| AppError::Unprocessable("quiz_category is required".to_string()))?;

    let previous: HashSet<i64> = req.previous_questions.iter().copied().collect();

    next_question(store, QuizScope::from(category), &previous).await
}

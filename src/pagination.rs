// src/pagination.rs

use std::{convert::Infallible, num::IntErrorKind};

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// Query parameters carrying a page number.
///
/// Kept as a raw string so that `?page=abc` falls back to the first page
/// instead of rejecting the request.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    /// Resolves the requested page.
    ///
    /// Absent, non-integer and non-positive values mean page 1. An integer too
    /// large for `usize` is still a page past the end, so it saturates.
    pub fn page(&self) -> usize {
        let Some(raw) = self.page.as_deref() else {
            return 1;
        };
        match raw.trim().parse::<usize>() {
            Ok(0) => 1,
            Ok(page) => page,
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => usize::MAX,
            Err(_) => 1,
        }
    }
}

/// Extracts the requested page from the query string. Never rejects:
/// a query string that does not deserialize (e.g. `?page=1&page=2`) means page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(pub usize);

impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let page = match Query::<PageParams>::try_from_uri(&parts.uri) {
            Ok(Query(params)) => params.page(),
            Err(rejection) => {
                tracing::debug!("Ignoring malformed query string: {}", rejection.body_text());
                1
            }
        };
        Ok(Page(page))
    }
}

/// Returns the `page`-th slice of `items` (1-based), at most `QUESTIONS_PER_PAGE` long.
///
/// Out-of-range pages yield an empty vector. `items` must already be in a
/// stable order (id ascending) or pages may overlap between calls.
pub fn paginate<T: Clone>(items: &[T], page: usize) -> Vec<T> {
    let start = page.saturating_sub(1).saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    items[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(raw: Option<&str>) -> PageParams {
        PageParams {
            page: raw.map(str::to_string),
        }
    }

    #[test]
    fn test_page_defaults_to_first() {
        assert_eq!(params(None).page(), 1);
        assert_eq!(params(Some("abc")).page(), 1);
        assert_eq!(params(Some("0")).page(), 1);
        assert_eq!(params(Some("-3")).page(), 1);
        assert_eq!(params(Some("4")).page(), 4);
    }

    #[test]
    fn test_overflowing_page_saturates() {
        assert_eq!(params(Some("99999999999999999999999")).page(), usize::MAX);
        assert!(paginate(&[1, 2, 3], params(Some("99999999999999999999999")).page()).is_empty());
        // still not an integer
        assert_eq!(params(Some("9999999999999999999999x")).page(), 1);
    }

    #[tokio::test]
    async fn test_page_extractor_tolerates_bad_query() {
        async fn extract(uri: &str) -> usize {
            let (mut parts, _) = axum::http::Request::builder()
                .uri(uri)
                .body(())
                .unwrap()
                .into_parts();
            let Page(page) = Page::from_request_parts(&mut parts, &()).await.unwrap();
            page
        }

        assert_eq!(extract("/questions").await, 1);
        assert_eq!(extract("/questions?page=3").await, 3);
        assert_eq!(extract("/questions?page=1&page=2").await, 1);
    }

    #[test]
    fn test_first_page_is_capped() {
        let items: Vec<i64> = (1..=25).collect();
        assert_eq!(paginate(&items, 1), (1..=10).collect::<Vec<_>>());
        assert_eq!(paginate(&items, 3), (21..=25).collect::<Vec<_>>());
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items: Vec<i64> = (1..=5).collect();
        assert!(paginate(&items, 2).is_empty());
        assert!(paginate(&items, 1000).is_empty());
        assert!(paginate::<i64>(&[], 1).is_empty());
        assert!(paginate(&items, usize::MAX).is_empty());
    }

    #[test]
    fn test_pages_reconstruct_sequence() {
        let items: Vec<i64> = (1..=37).collect();
        let mut rebuilt = Vec::new();
        let mut page = 1;
        loop {
            let slice = paginate(&items, page);
            if slice.is_empty() {
                break;
            }
            assert!(slice.len() <= QUESTIONS_PER_PAGE);
            rebuilt.extend(slice);
            page += 1;
        }
        assert_eq!(rebuilt, items);
        assert_eq!(page, 5);
    }
}

//! Mock extractor implementation for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::{ExtractionError, FilterExtractor};
use crate::domain::search::types::ListingFilters;

/// Mock extractor that returns a configurable result and counts calls.
///
/// # Examples
///
/// ```ignore
/// // Always answer with fixed filters
/// let extractor = MockExtractor::returning(ListingFilters {
///     price_max: Some(900_000),
///     ..Default::default()
/// });
///
/// // Simulate an upstream failure
/// let extractor = MockExtractor::failing("Gemini API failed with status 500");
/// ```
#[derive(Clone)]
pub struct MockExtractor {
    result: Arc<Result<ListingFilters, String>>,
    call_count: Arc<AtomicUsize>,
}

impl MockExtractor {
    /// Create a mock that always returns the same filters.
    pub fn returning(filters: ListingFilters) -> Self {
        Self {
            result: Arc::new(Ok(filters)),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock whose every call fails as an upstream error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            result: Arc::new(Err(message.into())),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times `extract` was called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Default for MockExtractor {
    fn default() -> Self {
        Self::returning(ListingFilters::default())
    }
}

#[async_trait]
impl FilterExtractor for MockExtractor {
    async fn extract(&self, _user_query: &str) -> Result<ListingFilters, ExtractionError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        match self.result.as_ref() {
            Ok(filters) => Ok(filters.clone()),
            Err(message) => Err(ExtractionError::Upstream(
                gemini::GeminiError::ResponseError(message.clone()),
            )),
        }
    }
}

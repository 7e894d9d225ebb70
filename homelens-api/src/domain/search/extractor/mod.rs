//! Filter extraction behind a trait, so routes and the service can be tested
//! without real network calls.

mod gemini_extractor;
mod mock;

pub use gemini_extractor::GeminiExtractor;
pub use mock::MockExtractor;

use async_trait::async_trait;

use super::types::ListingFilters;

/// Error type for filter extraction.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("user query is empty")]
    EmptyQuery,

    #[error("{0}")]
    Upstream(#[from] gemini::GeminiError),

    #[error("model response contained no candidates")]
    EmptyResponse,

    #[error("failed to parse model output: {0}")]
    Parse(String),
}

/// Translates a free-text query into structured listing filters.
#[async_trait]
pub trait FilterExtractor: Send + Sync {
    async fn extract(&self, user_query: &str) -> Result<ListingFilters, ExtractionError>;
}

//! Gemini-backed filter extraction.

use async_trait::async_trait;
use gemini::{GeminiClient, GenerateContentRequest};

use super::{ExtractionError, FilterExtractor};
use crate::domain::search::parser::{build_prompt, parse_filters};
use crate::domain::search::types::ListingFilters;

/// Sampling settings for filter extraction.
const TEMPERATURE: f64 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 500;

pub struct GeminiExtractor {
    client: GeminiClient,
}

impl GeminiExtractor {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Try to create from the `GEMINI_API_KEY` environment variable.
    ///
    /// Returns `None` if the key is not set, which disables the search
    /// endpoint while the rest of the API stays up.
    pub fn try_from_env() -> Option<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())?;
        Some(Self::new(GeminiClient::new(api_key)))
    }
}

#[async_trait]
impl FilterExtractor for GeminiExtractor {
    async fn extract(&self, user_query: &str) -> Result<ListingFilters, ExtractionError> {
        let request = GenerateContentRequest::from_prompt(
            build_prompt(user_query),
            TEMPERATURE,
            MAX_OUTPUT_TOKENS,
        );

        let response = self.client.generate_content(&request).await?;
        let text = response.first_text().ok_or(ExtractionError::EmptyResponse)?;

        parse_filters(text)
    }
}

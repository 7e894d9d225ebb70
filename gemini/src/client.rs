use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::{GenerateContentRequest, GenerateContentResponse};

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Upper bound on a single generation call. A hung upstream fails the
/// request instead of hanging it.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct GeminiClient {
    api_key: String,
    http: reqwest::Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            api_key: api_key.into(),
            http,
            base_url: GEMINI_API_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Perform one generation call. A single attempt; failures are not
    /// retried.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        // The API authenticates via a key in the query string.
        let url = format!("{}?key={}", self.base_url, self.api_key);

        debug!("Gemini generateContent request");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeminiError::Timeout
                } else {
                    GeminiError::ResponseError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::StatusError {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| {
                GeminiError::ParsingError(format!("Failed to parse response as JSON: {}", e))
            })
    }
}

#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Gemini API request timed out")]
    Timeout,
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("Gemini API failed with status {status}: {body}")]
    StatusError { status: u16, body: String },
    #[error("ParsingError: {0}")]
    ParsingError(String),
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use nyc_opendata::SalesFetchError;

use crate::domain::search::ExtractionError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

pub struct ApiError {
    status: StatusCode,
    error: String,
    message: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn internal(error: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, error)
    }

    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.error,
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<ExtractionError> for ApiError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::EmptyQuery => Self::bad_request("User query is required"),
            ExtractionError::Upstream(ref upstream) => {
                tracing::error!("Gemini API error: {}", upstream);
                Self::internal("Failed to process AI search").with_message(err.to_string())
            }
            ExtractionError::EmptyResponse | ExtractionError::Parse(_) => {
                tracing::error!("Unusable Gemini response: {}", err);
                Self::internal("Failed to process AI search").with_message(err.to_string())
            }
        }
    }
}

impl From<SalesFetchError> for ApiError {
    fn from(err: SalesFetchError) -> Self {
        tracing::error!("Open data fetch failed: {}", err);
        Self::internal("Failed to fetch housing data").with_message(err.to_string())
    }
}

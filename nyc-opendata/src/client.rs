use thiserror::Error;
use tracing::debug;

use crate::domain::{Listing, RawSale};

const SOCRATA_URL: &str = "https://data.cityofnewyork.us/resource/usep-8jbt.json";

/// Client for the NYC Open Data annualized-sales dataset.
pub struct SalesClient {
    http: reqwest::Client,
    base_url: String,
}

impl SalesClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: SOCRATA_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Fetch up to `limit` sale records for one borough, normalized into
    /// listings. Row order from the dataset is preserved.
    pub async fn fetch_sales(&self, borough: u8, limit: u32) -> Result<Vec<Listing>, SalesFetchError> {
        let url = format!("{}?borough={}&$limit={}", self.base_url, borough, limit);

        debug!(borough, limit, "fetching sale records");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| SalesFetchError::ResponseError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SalesFetchError::StatusError(status.as_u16()));
        }

        let rows = response.json::<Vec<RawSale>>().await.map_err(|e| {
            SalesFetchError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })?;

        Ok(rows
            .into_iter()
            .enumerate()
            .map(|(index, raw)| Listing::from_raw(raw, index))
            .collect())
    }
}

impl Default for SalesClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Error, Debug)]
pub enum SalesFetchError {
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("open data API failed with status {0}")]
    StatusError(u16),
    #[error("ParsingError: {0}")]
    ParsingError(String),
}

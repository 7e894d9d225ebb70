use std::sync::Arc;

use nyc_opendata::SalesClient;

use crate::config::ListingsSettings;
use crate::domain::search::AiSearchService;

#[derive(Clone)]
pub struct AppState {
    /// `None` when no Gemini API key is configured; the search endpoint
    /// reports a configuration error while the rest of the API stays up.
    pub search: Option<Arc<AiSearchService>>,
    pub sales_client: Arc<SalesClient>,
    pub listings: ListingsSettings,
}

impl AppState {
    pub fn new(
        search: Option<Arc<AiSearchService>>,
        sales_client: SalesClient,
        listings: ListingsSettings,
    ) -> Self {
        Self {
            search,
            sales_client: Arc::new(sales_client),
            listings,
        }
    }
}

//! Search service combining filter extraction and filter application.

use std::sync::Arc;

use nyc_opendata::Listing;

use super::extractor::{ExtractionError, FilterExtractor};
use super::filter::apply_filters;
use super::types::AiSearchOutcome;

/// Orchestrates one AI search: extract filters from the query, then apply
/// them over the supplied listings.
pub struct AiSearchService {
    extractor: Arc<dyn FilterExtractor>,
}

impl AiSearchService {
    pub fn new(extractor: Arc<dyn FilterExtractor>) -> Self {
        Self { extractor }
    }

    /// Run one search. Exactly one extraction call is made per request;
    /// filtering preserves the input listing order.
    pub async fn search(
        &self,
        user_query: &str,
        listings: &[Listing],
    ) -> Result<AiSearchOutcome, ExtractionError> {
        let user_query = user_query.trim();
        if user_query.is_empty() {
            return Err(ExtractionError::EmptyQuery);
        }

        let filters = self.extractor.extract(user_query).await?;
        let results = apply_filters(listings, &filters);

        Ok(AiSearchOutcome {
            explanation: filters.explanation.clone(),
            results,
            filters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::extractor::MockExtractor;
    use crate::domain::search::types::ListingFilters;

    fn make_listing(id: &str, price: Option<i64>, units: Option<i64>) -> Listing {
        Listing {
            id: id.to_string(),
            address: format!("{} Example Street", id),
            price,
            residential_units: units,
            commercial_units: Some(0),
            total_units: units,
            gross_sqft: Some(1800),
            land_sqft: Some(2000),
            year_built: Some(1930),
            neighborhood: Some("RIDGEWOOD".to_string()),
            sale_date: None,
            building_class: None,
            zip_code: Some("11385".to_string()),
        }
    }

    fn make_service(extractor: MockExtractor) -> AiSearchService {
        AiSearchService::new(Arc::new(extractor))
    }

    #[tokio::test]
    async fn empty_query_fails_without_calling_extractor() {
        let extractor = MockExtractor::default();
        let service = make_service(extractor.clone());

        let result = service.search("   ", &[]).await;

        assert!(matches!(result, Err(ExtractionError::EmptyQuery)));
        assert_eq!(extractor.call_count(), 0);
    }

    #[tokio::test]
    async fn search_applies_extracted_filters() {
        let extractor = MockExtractor::returning(ListingFilters {
            price_max: Some(900_000),
            residential_units_min: Some(3),
            explanation: "multi-family homes under 900k".to_string(),
            ..Default::default()
        });
        let service = make_service(extractor.clone());

        let listings = vec![
            make_listing("keep", Some(850_000), Some(3)),
            make_listing("too-expensive", Some(950_000), Some(4)),
            make_listing("too-few-units", Some(800_000), Some(2)),
        ];

        let outcome = service.search("3 families under 900k", &listings).await.unwrap();

        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].id, "keep");
        assert_eq!(outcome.explanation, "multi-family homes under 900k");
        assert_eq!(outcome.filters.price_max, Some(900_000));
        assert_eq!(extractor.call_count(), 1);
    }

    #[tokio::test]
    async fn unconstrained_filters_return_everything() {
        let extractor = MockExtractor::returning(ListingFilters {
            explanation: "showing everything".to_string(),
            ..Default::default()
        });
        let service = make_service(extractor);

        let listings = vec![
            make_listing("a", Some(100), Some(1)),
            make_listing("b", None, None),
        ];

        let outcome = service.search("show me everything", &listings).await.unwrap();
        assert_eq!(outcome.results, listings);
    }

    #[tokio::test]
    async fn extractor_failure_propagates() {
        let service = make_service(MockExtractor::failing("Gemini API failed with status 500"));

        let result = service.search("anything", &[]).await;
        assert!(matches!(result, Err(ExtractionError::Upstream(_))));
    }
}

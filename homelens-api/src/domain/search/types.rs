//! Core types for the listing search domain.

use serde::{Deserialize, Serialize};

use nyc_opendata::Listing;

/// Structured filters extracted from a free-text query.
///
/// Every bound is independently optional; `None` means no constraint on that
/// field. Decoding is strict about types: a field carrying the wrong type
/// fails the whole decode instead of silently passing through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingFilters {
    /// Lower bound on residential units.
    pub residential_units_min: Option<i64>,
    /// Upper bound on residential units.
    pub residential_units_max: Option<i64>,
    /// Lower bound on the sale price.
    pub price_min: Option<i64>,
    /// Upper bound on the sale price.
    pub price_max: Option<i64>,
    /// Case-insensitive substring match against the listing neighborhood.
    pub neighborhood: Option<String>,
    /// Lower bound on the construction year.
    pub year_built_min: Option<i64>,
    /// Human-readable summary of what is being searched for.
    #[serde(default)]
    pub explanation: String,
}

/// Result of one AI search: what the model said plus the filtered subset.
#[derive(Debug, Clone)]
pub struct AiSearchOutcome {
    pub explanation: String,
    pub results: Vec<Listing>,
    pub filters: ListingFilters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_decode_to_none() {
        let filters: ListingFilters = serde_json::from_str(r#"{"explanation": "anything"}"#).unwrap();

        assert_eq!(filters.price_min, None);
        assert_eq!(filters.price_max, None);
        assert_eq!(filters.neighborhood, None);
        assert_eq!(filters.explanation, "anything");
    }

    #[test]
    fn null_fields_decode_to_none() {
        let filters: ListingFilters = serde_json::from_str(
            r#"{
                "residential_units_min": null,
                "residential_units_max": null,
                "price_min": null,
                "price_max": 900000,
                "neighborhood": null,
                "year_built_min": null,
                "explanation": "under 900k"
            }"#,
        )
        .unwrap();

        assert_eq!(filters.price_max, Some(900_000));
        assert_eq!(filters.residential_units_min, None);
    }

    #[test]
    fn wrong_typed_field_fails_decode() {
        let result = serde_json::from_str::<ListingFilters>(
            r#"{"price_max": "cheap", "explanation": "?"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_explanation_decodes_to_empty() {
        let filters: ListingFilters = serde_json::from_str(r#"{"price_max": 1}"#).unwrap();
        assert_eq!(filters.explanation, "");
    }
}

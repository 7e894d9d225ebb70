//! Deterministic filter application over an in-memory listing set.

use nyc_opendata::Listing;

use super::types::ListingFilters;

/// Apply extracted filters to a listing set. Pure and infallible: listings
/// are checked against six independent predicates joined by AND, and input
/// order is preserved.
///
/// A numeric bound of zero and an empty neighborhood string impose no
/// constraint, mirroring how the extraction output encodes "nothing asked
/// for". A listing missing a numerically-bounded field is retained (the
/// comparison is skipped), a known admission gap; a listing missing its
/// neighborhood is excluded by an active neighborhood filter.
pub fn apply_filters(listings: &[Listing], filters: &ListingFilters) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| matches(listing, filters))
        .cloned()
        .collect()
}

fn matches(listing: &Listing, filters: &ListingFilters) -> bool {
    if let Some(min) = active_bound(filters.residential_units_min) {
        if listing.residential_units.is_some_and(|units| units < min) {
            return false;
        }
    }
    if let Some(max) = active_bound(filters.residential_units_max) {
        if listing.residential_units.is_some_and(|units| units > max) {
            return false;
        }
    }
    if let Some(min) = active_bound(filters.price_min) {
        if listing.price.is_some_and(|price| price < min) {
            return false;
        }
    }
    if let Some(max) = active_bound(filters.price_max) {
        if listing.price.is_some_and(|price| price > max) {
            return false;
        }
    }
    if let Some(neighborhood) = active_text(&filters.neighborhood) {
        match &listing.neighborhood {
            Some(listing_neighborhood) => {
                if !listing_neighborhood
                    .to_lowercase()
                    .contains(&neighborhood.to_lowercase())
                {
                    return false;
                }
            }
            None => return false,
        }
    }
    if let Some(min) = active_bound(filters.year_built_min) {
        if listing.year_built.is_some_and(|year| year < min) {
            return false;
        }
    }

    true
}

/// A zero bound means the model emitted no constraint.
fn active_bound(bound: Option<i64>) -> Option<i64> {
    bound.filter(|&value| value != 0)
}

fn active_text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

use serde::{Deserialize, Serialize};

/// One row of the rolling-sales dataset as returned by Socrata. Every field
/// arrives as a string; numeric fields are parsed during normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSale {
    pub bbl: Option<String>,
    pub block: Option<String>,
    pub lot: Option<String>,
    pub address: Option<String>,
    pub sale_price: Option<String>,
    pub residential_units: Option<String>,
    pub commercial_units: Option<String>,
    pub total_units: Option<String>,
    pub gross_square_feet: Option<String>,
    pub land_square_feet: Option<String>,
    pub year_built: Option<String>,
    pub neighborhood: Option<String>,
    pub sale_date: Option<String>,
    pub building_class_category: Option<String>,
    pub zip_code: Option<String>,
}

/// A normalized real-estate sale listing. Immutable once built; discarded on
/// the next fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub address: String,
    pub price: Option<i64>,
    pub residential_units: Option<i64>,
    pub commercial_units: Option<i64>,
    pub total_units: Option<i64>,
    pub gross_sqft: Option<i64>,
    pub land_sqft: Option<i64>,
    pub year_built: Option<i64>,
    pub neighborhood: Option<String>,
    pub sale_date: Option<String>,
    pub building_class: Option<String>,
    pub zip_code: Option<String>,
}

impl Listing {
    /// Normalize one raw Socrata row. `index` seeds the positional fallback
    /// id used when the natural keys are missing.
    pub fn from_raw(raw: RawSale, index: usize) -> Self {
        Self {
            id: synthesize_id(&raw, index),
            address: raw.address.unwrap_or_default(),
            price: parse_count(raw.sale_price.as_deref()),
            residential_units: parse_count(raw.residential_units.as_deref()),
            commercial_units: parse_count(raw.commercial_units.as_deref()),
            total_units: parse_count(raw.total_units.as_deref()),
            gross_sqft: parse_square_feet(raw.gross_square_feet.as_deref()),
            land_sqft: parse_square_feet(raw.land_square_feet.as_deref()),
            year_built: parse_count(raw.year_built.as_deref()),
            neighborhood: non_empty(raw.neighborhood),
            sale_date: non_empty(raw.sale_date),
            building_class: non_empty(raw.building_class_category),
            zip_code: non_empty(raw.zip_code),
        }
    }
}

/// Stable identifier: the borough-block-lot key when present, then
/// "{block}-{lot}", then a positional fallback.
fn synthesize_id(raw: &RawSale, index: usize) -> String {
    if let Some(bbl) = raw.bbl.as_deref().filter(|v| !v.is_empty()) {
        return bbl.to_string();
    }
    if let (Some(block), Some(lot)) = (
        raw.block.as_deref().filter(|v| !v.is_empty()),
        raw.lot.as_deref().filter(|v| !v.is_empty()),
    ) {
        return format!("{}-{}", block, lot);
    }
    format!("home-{}", index)
}

fn parse_count(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse().ok())
}

/// Square-footage values may carry thousands separators ("1,710").
fn parse_square_feet(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().replace(',', "").parse().ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

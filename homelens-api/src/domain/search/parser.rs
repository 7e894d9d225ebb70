//! Prompt construction and model-output parsing for filter extraction.

use super::extractor::ExtractionError;
use super::types::ListingFilters;

/// Build the extraction prompt. The user query is embedded verbatim; the
/// model is instructed to answer with the filter object and nothing else.
pub(crate) fn build_prompt(user_query: &str) -> String {
    format!(
        r#"You are a helpful real estate assistant. Extract filters from user queries and return valid JSON only.
Given this user query: "{user_query}"
Extract the following filters and return ONLY valid JSON with no markdown or explanation:
{{
    "residential_units_min": number or null,
    "residential_units_max": number or null,
    "price_min": number or null,
    "price_max": number or null,
    "neighborhood": string or null,
    "year_built_min": number or null,
    "explanation": "A friendly explanation of what you're searching for"
}}"#
    )
}

/// Decode model output into filters. The text is fence-stripped first; a
/// decode failure (including wrong-typed fields) fails the request.
pub(crate) fn parse_filters(text: &str) -> Result<ListingFilters, ExtractionError> {
    let cleaned = strip_code_fences(text);
    serde_json::from_str(cleaned).map_err(|e| ExtractionError::Parse(e.to_string()))
}

/// Models sometimes wrap the JSON in a fenced code block, with or without a
/// language tag. Strip the fences before parsing.
fn strip_code_fences(text: &str) -> &str {
    text.trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

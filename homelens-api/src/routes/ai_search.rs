use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use nyc_opendata::Listing;

use crate::{
    app_state::AppState,
    domain::search::ListingFilters,
    routes::ApiError,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/ai-search", post(ai_search))
}

#[derive(Serialize)]
struct AiSearchResponse {
    explanation: String,
    results: Vec<Listing>,
    filters: ListingFilters,
}

/// The body is taken as a raw JSON value so shape problems surface as 400s
/// before anything reaches the model API.
#[instrument(name = "POST /api/ai-search", skip(app_state, body))]
async fn ai_search(
    State(app_state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<AiSearchResponse>, ApiError> {
    let user_query = body
        .get("userQuery")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|query| !query.is_empty())
        .ok_or_else(|| ApiError::bad_request("User query is required"))?;

    let homes_value = body
        .get("homes")
        .filter(|value| value.is_array())
        .cloned()
        .ok_or_else(|| ApiError::bad_request("Homes data is required"))?;
    let homes: Vec<Listing> = serde_json::from_value(homes_value)
        .map_err(|_| ApiError::bad_request("Homes data is malformed"))?;

    let search = app_state
        .search
        .as_ref()
        .ok_or_else(|| ApiError::internal("GEMINI_API_KEY is not configured"))?;

    let outcome = search.search(user_query, &homes).await?;

    Ok(Json(AiSearchResponse {
        explanation: outcome.explanation,
        results: outcome.results,
        filters: outcome.filters,
    }))
}

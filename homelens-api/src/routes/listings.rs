use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use nyc_opendata::Listing;

use crate::{app_state::AppState, routes::ApiError};

pub fn router() -> Router<AppState> {
    Router::new().route("/listings", get(listings))
}

#[instrument(name = "GET /api/listings", skip(app_state))]
async fn listings(State(app_state): State<AppState>) -> Result<Json<Vec<Listing>>, ApiError> {
    let listings = app_state
        .sales_client
        .fetch_sales(app_state.listings.borough, app_state.listings.limit)
        .await?;

    Ok(Json(listings))
}

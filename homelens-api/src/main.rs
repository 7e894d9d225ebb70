use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use homelens_api::{
    app_state::AppState,
    config::read_config,
    domain::search::{AiSearchService, GeminiExtractor},
    router,
};
use nyc_opendata::SalesClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homelens_api=debug,tower_http=debug".into()),
        )
        .init();

    let config = read_config().expect("Failed to read configuration");

    let search = GeminiExtractor::try_from_env()
        .map(|extractor| Arc::new(AiSearchService::new(Arc::new(extractor))));
    if search.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set, the search endpoint is disabled");
    }

    let app_state = AppState::new(search, SalesClient::new(), config.listings.clone());
    let app = router::create(app_state, &config);

    let address = format!(
        "{}:{}",
        config.application.host, config.application.port
    );
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .expect("Failed to bind server address");
    tracing::info!("listening on {}", address);

    axum::serve(listener, app).await.expect("Server crashed");
}

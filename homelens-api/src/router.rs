use axum::{http::Method, Router};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, config::Settings, routes};

pub fn create(app_state: AppState, config: &Settings) -> Router<()> {
    let api = Router::new()
        .merge(routes::health::router())
        .merge(routes::listings::router())
        .merge(routes::ai_search::router());

    let base_app = Router::new()
        .nest("/api", api)
        .fallback(routes::not_found)
        .with_state(app_state);

    // Only the configured origins may call the API; credentials are allowed.
    let allowed_origins = config.application.allowed_origins.clone();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(["content-type".parse().unwrap(), "authorization".parse().unwrap()])
        .allow_credentials(true)
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            let origin_str = origin.to_str().unwrap_or_default();
            allowed_origins.iter().any(|allowed| allowed == origin_str)
        }));

    base_app
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
    gemini_configured: bool,
}

async fn health(State(app_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Server is running",
        gemini_configured: app_state.search.is_some(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use nyc_opendata::SalesClient;

    use crate::{
        app_state::AppState,
        config::ListingsSettings,
        domain::search::{AiSearchService, MockExtractor},
    };

    fn test_router(configured: bool) -> Router {
        let search = configured
            .then(|| Arc::new(AiSearchService::new(Arc::new(MockExtractor::default()))));
        let state = AppState::new(
            search,
            SalesClient::new(),
            ListingsSettings {
                borough: 4,
                limit: 100,
            },
        );

        super::router().with_state(state)
    }

    async fn get_health(router: Router) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_reports_configured_search() {
        let (status, body) = get_health(test_router(true)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["geminiConfigured"], true);
    }

    #[tokio::test]
    async fn health_stays_up_without_api_key() {
        let (status, body) = get_health(test_router(false)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["geminiConfigured"], false);
    }
}

pub(crate) mod ai_search;
pub(crate) mod error;
pub(crate) mod health;
pub(crate) mod listings;

pub(crate) use error::ApiError;

use axum::{http::StatusCode, http::Uri, Json};
use serde_json::{json, Value};

/// Fallback handler, echoes the unmatched path.
pub(crate) async fn not_found(uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found", "path": uri.path() })),
    )
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use axum::http::Uri;
    use axum::response::IntoResponse;
    use serde_json::Value;

    use super::not_found;

    #[tokio::test]
    async fn not_found_echoes_the_path() {
        let uri: Uri = "/api/unknown".parse().unwrap();

        let response = not_found(uri).await.into_response();
        assert_eq!(response.status(), 404);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Route not found");
        assert_eq!(body["path"], "/api/unknown");
    }
}

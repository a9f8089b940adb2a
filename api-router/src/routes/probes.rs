use axum::{http::StatusCode, response::IntoResponse, Json};
use common::catalog::fixtures;
use serde_json::json;

/// Liveness probe: 200 as long as the process answers.
pub async fn live() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Readiness probe: 200 once the match catalog is loaded, else 503.
pub async fn ready() -> impl IntoResponse {
    let catalog_size = fixtures::matches().len();
    if catalog_size == 0 {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "error",
                "checks": { "catalog": "fail" },
                "reason": "match catalog is empty"
            })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "checks": { "catalog": "ok" },
            "matches": catalog_size
        })),
    )
}

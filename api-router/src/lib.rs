use axum::{
    routing::{get, post},
    Router,
};
use error::ApiError;
use routes::{
    probes::{live, ready},
    search::search_products,
};

pub mod error;
mod routes;

/// Router for the JSON API. Handlers are stateless.
pub fn api_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    // Public probes for systemd/container health checks
    let probes = Router::new()
        .route("/ready", get(ready))
        .route("/live", get(live));

    probes
        .route("/search", post(search_products))
        .fallback(not_found)
}

async fn not_found() -> ApiError {
    ApiError::NotFound("No such API route".to_string())
}

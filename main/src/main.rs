use api_router::api_routes;
use axum::{extract::FromRef, Router};
use common::utils::config::get_config;
use html_router::{html_routes, html_state::HtmlState};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set up tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();

    // Get config
    let config = get_config()?;
    info!(
        simulated_latency_ms = config.simulated_latency_ms,
        results_per_page = config.results_per_page,
        "Configuration loaded"
    );

    let html_state = HtmlState::new(config.clone());
    let app = app(html_state);

    info!("Starting server listening on 0.0.0.0:{}", config.http_port);
    let serve_address = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(serve_address).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn app(html_state: HtmlState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .merge(html_routes(&html_state))
        .with_state(AppState { html_state })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received ctrl_c, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}

#[derive(Clone, FromRef)]
struct AppState {
    html_state: HtmlState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use common::utils::config::AppConfig;
    use tower::ServiceExt;

    fn smoke_test_app() -> Router {
        let config = AppConfig {
            http_port: 0,
            simulated_latency_ms: 0,
            ..Default::default()
        };
        app(HtmlState::new(config))
    }

    async fn get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("router response")
    }

    #[tokio::test]
    async fn smoke_probes_respond() {
        let app = smoke_test_app();

        assert_eq!(get(app.clone(), "/api/live").await.status(), StatusCode::OK);
        assert_eq!(get(app, "/api/ready").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn api_and_pages_share_one_router() {
        let app = smoke_test_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/search")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"url":"https://www.apple.com/macbook-pro"}"#))
                    .expect("request"),
            )
            .await
            .expect("router response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(json["originalProduct"]["source"], "www.apple.com");

        let landing = get(app, "/").await;
        assert_eq!(landing.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_paths_are_not_found_on_both_surfaces() {
        let app = smoke_test_app();

        let api = get(app.clone(), "/api/nope").await;
        assert_eq!(api.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(api.into_body(), usize::MAX).await.expect("body");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json error");
        assert!(json["error"].is_string());

        assert_eq!(get(app, "/nope").await.status(), StatusCode::NOT_FOUND);
    }
}

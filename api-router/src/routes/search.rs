use axum::{body::Bytes, response::IntoResponse, Json};
use common::{
    catalog::{
        fixtures,
        types::{crypto_match::CryptoMatch, original_product::OriginalProduct},
    },
    error::AppError,
    utils::product_url::ProductUrl,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, error, info};

use crate::error::ApiError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub original_product: OriginalProduct,
    pub matches: Vec<CryptoMatch>,
}

/// Mock product search. Only the hostname of the submitted URL varies the
/// payload; every failure collapses into one generic 500.
pub async fn search_products(body: Bytes) -> Result<impl IntoResponse, ApiError> {
    let response = process_search(&body).map_err(|err| {
        error!("Error processing search: {}", err);
        ApiError::search_failed()
    })?;

    info!(
        source = %response.original_product.source,
        matches = response.matches.len(),
        "Served search results"
    );

    Ok(Json(response))
}

/// The body must be a JSON object with a string `url`; arrays, scalars and
/// other shapes are rejected rather than coerced.
fn process_search(body: &[u8]) -> Result<SearchResponse, AppError> {
    let fields: Map<String, Value> = serde_json::from_slice(body)?;
    let input = fields
        .get("url")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::Validation("body needs a string `url` field".to_string()))?;
    let url = ProductUrl::parse(input)?;
    debug!(%url, "Searching catalog for product link");

    Ok(SearchResponse {
        original_product: fixtures::original_product(Some(&url)),
        matches: fixtures::featured_matches(),
    })
}

#[cfg(test)]
mod tests {
    use crate::api_routes;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn post_search(body: impl Into<Body>) -> (StatusCode, Value) {
        let app: Router = Router::new().nest("/api", api_routes());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/search")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(body.into())
                    .expect("request"),
            )
            .await
            .expect("router response");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn valid_url_returns_hostname_and_featured_match() {
        let (status, json) =
            post_search(json!({ "url": "https://www.apple.com/macbook-pro" }).to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["originalProduct"]["source"], "www.apple.com");
        assert_eq!(json["originalProduct"]["title"], "Product from www.apple.com");
        assert_eq!(json["originalProduct"]["price"], 1999);
        assert!(json["originalProduct"].get("description").is_none());

        let matches = json["matches"].as_array().expect("matches array");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0]["id"], 1);
        assert_eq!(matches[0]["merchant"]["name"], "Newegg");
        assert_eq!(matches[0]["similarity"], 98);
    }

    #[tokio::test]
    async fn source_tracks_the_submitted_hostname() {
        for (url, host) in [
            ("https://newegg.com/p/N82E16834", "newegg.com"),
            ("http://shop.example.org:8080/a?b=c", "shop.example.org"),
            ("https://EXAMPLE.com", "example.com"),
        ] {
            let (status, json) = post_search(json!({ "url": url }).to_string()).await;
            assert_eq!(status, StatusCode::OK, "{url}");
            assert_eq!(json["originalProduct"]["source"], host, "{url}");
        }
    }

    #[tokio::test]
    async fn unparseable_url_returns_generic_failure() {
        let (status, json) = post_search(json!({ "url": "not a url" }).to_string()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, json!({ "error": "Failed to process search" }));
    }

    #[tokio::test]
    async fn malformed_bodies_return_generic_failure() {
        for body in [
            "",
            "{",
            "null",
            r#"{"link":"https://apple.com"}"#,
            r#"{"url":42}"#,
            r#"["https://www.apple.com/x"]"#,
            r#""https://a.com""#,
        ] {
            let (status, json) = post_search(body).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{body}");
            assert_eq!(json["error"], "Failed to process search", "{body}");
        }
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize, Clone)]
pub enum ApiError {
    /// The message is returned verbatim, so it must not carry internals.
    #[error("{0}")]
    InternalError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl ApiError {
    pub fn search_failed() -> Self {
        Self::InternalError("Failed to process search".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::InternalError(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

#[derive(Serialize, Debug)]
struct ErrorResponse {
    error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        (status, serde_json::from_slice(&body).expect("body should be json"))
    }

    #[tokio::test]
    async fn search_failure_body_has_only_error_field() {
        let (status, json) = body_json(ApiError::search_failed()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({ "error": "Failed to process search" }));
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let (status, json) = body_json(ApiError::NotFound("no such route".into())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "no such route");
    }

    #[test]
    fn internal_error_display_is_the_public_message() {
        let api_error = ApiError::InternalError("Internal server error".to_string());
        assert_eq!(api_error.to_string(), "Internal server error");
    }
}

use thiserror::Error;

// Core internal errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid product URL '{input}': {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Request body error: {0}")]
    Body(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),
}

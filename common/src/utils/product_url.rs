use std::fmt;

use tracing::debug;
use url::Url;

use crate::error::AppError;

/// A user supplied product link that has passed URL parsing.
///
/// Parsing never panics; callers decide how to surface the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUrl(Url);

impl ProductUrl {
    pub fn parse(input: &str) -> Result<Self, AppError> {
        Url::parse(input)
            .map(Self)
            .map_err(|source| {
                debug!(%source, "Rejected product link");
                AppError::InvalidUrl {
                    input: input.to_string(),
                    source,
                }
            })
    }

    /// Domain component used as the display label for the product's origin.
    /// URLs without a host (`mailto:`, `data:`) yield an empty string.
    pub fn hostname(&self) -> &str {
        self.0.host_str().unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ProductUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

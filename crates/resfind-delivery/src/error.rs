//! Typed error enum for the delivery crate.

use thiserror::Error;

/// Errors from Content Delivery API operations.
///
/// [`fetch_resources`](crate::fetch_resources) collapses all of these into an
/// empty collection; [`try_fetch_resources`](crate::try_fetch_resources)
/// returns them as-is.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    Status { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl DeliveryError {
    /// Whether a retry could plausibly succeed. Nothing retries today; this
    /// only feeds the log line.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::Status { code, .. } => matches!(code, 429 | 500 | 502 | 503 | 504),
            _ => false,
        }
    }
}

pub mod acbl;
pub mod ffbridge;

use thiserror::Error;

/// Network or decode failure at a provider boundary. Opaque to the core;
/// the route handler picks the response status.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

impl UpstreamError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            UpstreamError::Status { status, .. } if *status == reqwest::StatusCode::NOT_FOUND
        )
    }
}

//! Error types for the remote catalog API.

use thiserror::Error;

/// Errors returned by gateway calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, transport, or body read failure.
    #[error("Network error requesting '{url}': {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("Unexpected HTTP status {status} from '{url}'")]
    Status { url: String, status: u16 },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// True for failures below the decoding layer, including HTTP error statuses.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network { .. } | ApiError::Status { .. })
    }

    /// Get error type string for logs and error states
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Network { .. } => "network_error",
            ApiError::Status { .. } => "http_status",
            ApiError::Decode { .. } => "decode_error",
        }
    }
}

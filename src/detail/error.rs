use std::sync::Arc;

use thiserror::Error;

use crate::api::ApiError;

/// A detail fetch failed.
///
/// Cloneable so one failure can be delivered to every caller that
/// joined the same in-flight request.
#[derive(Debug, Clone, Error)]
pub enum DetailFetchError {
    #[error("Failed to load details for '{id}': {source}")]
    Api {
        id: String,
        #[source]
        source: Arc<ApiError>,
    },

    /// The background fetch task panicked or was cancelled with the runtime.
    #[error("Detail fetch for '{id}' did not complete: {message}")]
    Interrupted { id: String, message: String },
}

impl DetailFetchError {
    pub fn new(id: impl Into<String>, source: ApiError) -> Self {
        Self::Api {
            id: id.into(),
            source: Arc::new(source),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Api { id, .. } | Self::Interrupted { id, .. } => id,
        }
    }

    /// The gateway error behind this failure, if it came from the API.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api { source, .. } => Some(source),
            Self::Interrupted { .. } => None,
        }
    }
}

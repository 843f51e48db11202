//! Error types.
//!
//! `ServiceError` is defined here rather than in `quizdeck-client` so the
//! session state machine can turn a failed call into the message it shows
//! without knowing which transport produced it.

use thiserror::Error;

/// Errors that can occur when talking to a quizdeck backend service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The service answered with a non-2xx status.
    #[error("API error (HTTP {status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },

    /// The credential was rejected or has expired (HTTP 401).
    #[error("unauthorized: {}", .0.as_deref().unwrap_or("no detail"))]
    Unauthorized(Option<String>),

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ServiceError {
    /// The message the service itself provided, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ServiceError::Api { detail, .. } | ServiceError::Unauthorized(detail) => {
                detail.as_deref()
            }
            _ => None,
        }
    }

    /// HTTP status behind this error, when the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Api { status, .. } => Some(*status),
            ServiceError::Unauthorized(_) => Some(401),
            _ => None,
        }
    }

    /// Returns `true` if the caller must re-authenticate.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, ServiceError::Unauthorized(_))
    }

    /// Returns `true` for failures where no usable response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ServiceError::Timeout(_) | ServiceError::Network(_) | ServiceError::Decode(_)
        )
    }
}

/// Errors reading a locally selected exam file.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} is not valid UTF-8 text")]
    NotUtf8(String),
}

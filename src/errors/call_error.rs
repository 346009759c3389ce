use thiserror::Error;

use super::codes::ResponseCode;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure raised by a call before any response was obtained
#[derive(Debug, Error)]
pub enum CallError {
    /// Host could not be resolved or a connection could not be made
    #[error("Host unreachable: {message}")]
    HostUnreachable {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Request timed out: {message}")]
    Timeout { message: String },

    /// Response arrived but its body could not be decoded
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] BoxError),

    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),

    /// Cooperative cancellation of the call, never turned into a result
    #[error("Call was cancelled")]
    Cancelled,
}

impl CallError {
    pub fn host_unreachable(message: impl Into<String>) -> Self {
        Self::HostUnreachable {
            message: message.into(),
            source: None,
        }
    }

    pub fn transport(error: impl Into<BoxError>) -> Self {
        Self::Transport(error.into())
    }

    pub fn decode(error: impl Into<BoxError>) -> Self {
        Self::Decode(error.into())
    }

    pub fn is_host_unreachable(&self) -> bool {
        matches!(self, Self::HostUnreachable { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Sentinel code recorded for this failure
    pub fn sentinel_code(&self) -> u16 {
        if self.is_host_unreachable() {
            ResponseCode::NetworkError.code()
        } else {
            ResponseCode::UnknownError.code()
        }
    }
}

impl From<reqwest::Error> for CallError {
    fn from(error: reqwest::Error) -> Self {
        // Timeouts can also be connect errors, so check them first
        if error.is_timeout() {
            Self::Timeout {
                message: error.to_string(),
            }
        } else if error.is_connect() {
            Self::HostUnreachable {
                message: error.to_string(),
                source: Some(Box::new(error)),
            }
        } else if error.is_decode() {
            Self::Decode(Box::new(error))
        } else {
            Self::Transport(Box::new(error))
        }
    }
}

impl From<serde_json::Error> for CallError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(Box::new(error))
    }
}

impl From<tokio::task::JoinError> for CallError {
    fn from(error: tokio::task::JoinError) -> Self {
        if error.is_cancelled() {
            Self::Cancelled
        } else {
            Self::Transport(Box::new(error))
        }
    }
}

/// Returned by the orchestrator when the call was cancelled instead of
/// completing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("API call cancelled before it produced a result")]
pub struct CallCancelled;

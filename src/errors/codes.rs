use serde::{Deserialize, Serialize};
use std::fmt;

/// Response codes the crate knows by name.
///
/// Most are plain HTTP statuses. `Ongoing`, `NetworkError` and `UnknownError`
/// double as sentinels for results that never saw a real HTTP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseCode {
    /// No call has completed yet
    Ongoing,

    Success,

    SuccessNoContent,

    Unauthorized,

    /// Backends answer unknown accounts with a 404
    InvalidEmail,

    UnprocessableEntity,

    /// Client is too old for the backend
    ForceUpdate,

    ServerError,

    /// Host could not be resolved or reached
    NetworkError,

    /// Transport failed for any other reason
    UnknownError,
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ongoing => write!(f, "ONGOING"),
            Self::Success => write!(f, "SUCCESS"),
            Self::SuccessNoContent => write!(f, "SUCCESS_NO_CONTENT"),
            Self::Unauthorized => write!(f, "UNAUTHORIZED"),
            Self::InvalidEmail => write!(f, "INVALID_EMAIL"),
            Self::UnprocessableEntity => write!(f, "UNPROCESSABLE_ENTITY"),
            Self::ForceUpdate => write!(f, "FORCE_UPDATE"),
            Self::ServerError => write!(f, "SERVER_ERROR"),
            Self::NetworkError => write!(f, "NETWORK_ERROR"),
            Self::UnknownError => write!(f, "UNKNOWN_ERROR"),
        }
    }
}

impl ResponseCode {
    /// Numeric code carried by results and wrappers
    pub const fn code(&self) -> u16 {
        match self {
            Self::Ongoing => 0,
            Self::Success => 200,
            Self::SuccessNoContent => 204,
            Self::Unauthorized => 401,
            Self::InvalidEmail => 404,
            Self::UnprocessableEntity => 422,
            Self::ForceUpdate => 426,
            Self::ServerError => 500,
            Self::NetworkError => 503,
            Self::UnknownError => 512,
        }
    }

    /// Look up a known code, `None` for anything unnamed
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(Self::Ongoing),
            200 => Some(Self::Success),
            204 => Some(Self::SuccessNoContent),
            401 => Some(Self::Unauthorized),
            404 => Some(Self::InvalidEmail),
            422 => Some(Self::UnprocessableEntity),
            426 => Some(Self::ForceUpdate),
            500 => Some(Self::ServerError),
            503 => Some(Self::NetworkError),
            512 => Some(Self::UnknownError),
            _ => None,
        }
    }

    /// True for the codes that never come from a real response
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::Ongoing | Self::NetworkError | Self::UnknownError)
    }
}

impl From<ResponseCode> for u16 {
    fn from(code: ResponseCode) -> Self {
        code.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_codes() {
        assert_eq!(ResponseCode::Ongoing.code(), 0);
        assert_eq!(ResponseCode::NetworkError.code(), 503);
        assert_eq!(ResponseCode::UnknownError.code(), 512);
        assert!(ResponseCode::UnknownError.is_sentinel());
        assert!(!ResponseCode::Unauthorized.is_sentinel());
    }

    #[test]
    fn test_from_code_lookup() {
        assert_eq!(ResponseCode::from_code(426), Some(ResponseCode::ForceUpdate));
        assert_eq!(ResponseCode::from_code(404), Some(ResponseCode::InvalidEmail));
        assert_eq!(ResponseCode::from_code(418), None);
    }

    #[test]
    fn test_display_matches_serde_name() {
        let code = ResponseCode::UnprocessableEntity;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, format!("\"{}\"", code));
    }
}

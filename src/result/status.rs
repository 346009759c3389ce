use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a request as seen by a presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Ongoing,
    Success,
    Failed,
}

impl RequestStatus {
    /// Integer form for bindings that only understand numbers
    pub fn as_i32(&self) -> i32 {
        match self {
            RequestStatus::Ongoing => 0,
            RequestStatus::Success => 1,
            RequestStatus::Failed => 2,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, RequestStatus::Ongoing)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestStatus::Ongoing => write!(f, "ONGOING"),
            RequestStatus::Success => write!(f, "SUCCESS"),
            RequestStatus::Failed => write!(f, "FAILED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_values() {
        assert_eq!(RequestStatus::Ongoing.as_i32(), 0);
        assert_eq!(RequestStatus::Success.as_i32(), 1);
        assert_eq!(RequestStatus::Failed.as_i32(), 2);
    }

    #[test]
    fn test_only_ongoing_is_not_terminal() {
        assert!(!RequestStatus::Ongoing.is_terminal());
        assert!(RequestStatus::Success.is_terminal());
        assert!(RequestStatus::Failed.is_terminal());
    }

    #[test]
    fn test_display_matches_serde_names() {
        for status in [
            RequestStatus::Ongoing,
            RequestStatus::Success,
            RequestStatus::Failed,
        ] {
            assert_eq!(
                serde_json::to_value(status).unwrap(),
                serde_json::Value::String(status.to_string())
            );
        }
        assert_eq!(RequestStatus::Failed.to_string(), "FAILED");
        assert_eq!(
            serde_json::from_str::<RequestStatus>("\"ONGOING\"").unwrap(),
            RequestStatus::Ongoing
        );
    }
}

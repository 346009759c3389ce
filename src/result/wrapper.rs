use serde::{Deserialize, Serialize};

use super::network_result::NetworkResult;
use super::status::RequestStatus;
use crate::errors::ResponseCode;

/// Flat view of a request for a presentation layer.
///
/// Only the three factories build one, so `status`, `success`, `data` and
/// `errors` always agree with each other. Deserialization goes through the
/// same factories and rejects payloads whose fields disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    try_from = "RawResponseWrapper<T, E>",
    bound(deserialize = "T: Deserialize<'de>, E: Deserialize<'de>")
)]
pub struct ResponseWrapper<T, E> {
    response_code: u16,
    success: bool,
    status: RequestStatus,
    data: Option<T>,
    errors: Option<Vec<E>>,
}

impl<T, E> ResponseWrapper<T, E> {
    /// Request in flight, nothing to show yet
    pub fn ongoing() -> Self {
        Self {
            response_code: ResponseCode::Ongoing.code(),
            success: false,
            status: RequestStatus::Ongoing,
            data: None,
            errors: None,
        }
    }

    pub fn success(code: u16, data: Option<T>) -> Self {
        Self {
            response_code: code,
            success: true,
            status: RequestStatus::Success,
            data,
            errors: None,
        }
    }

    pub fn error(code: u16, errors: Option<Vec<E>>) -> Self {
        Self {
            response_code: code,
            success: false,
            status: RequestStatus::Failed,
            data: None,
            errors,
        }
    }

    pub fn response_code(&self) -> u16 {
        self.response_code
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn errors(&self) -> Option<&[E]> {
        self.errors.as_deref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn into_errors(self) -> Option<Vec<E>> {
        self.errors
    }
}

/// Wire shape of a wrapper before its fields are checked against each other
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResponseWrapper<T, E> {
    response_code: u16,
    success: bool,
    status: RequestStatus,
    data: Option<T>,
    errors: Option<Vec<E>>,
}

impl<T, E> TryFrom<RawResponseWrapper<T, E>> for ResponseWrapper<T, E> {
    type Error = String;

    fn try_from(raw: RawResponseWrapper<T, E>) -> Result<Self, Self::Error> {
        match (raw.status, raw.success) {
            (RequestStatus::Ongoing, false)
                if raw.response_code == ResponseCode::Ongoing.code()
                    && raw.data.is_none()
                    && raw.errors.is_none() =>
            {
                Ok(Self::ongoing())
            }
            (RequestStatus::Success, true) if raw.errors.is_none() => {
                Ok(Self::success(raw.response_code, raw.data))
            }
            (RequestStatus::Failed, false) if raw.data.is_none() => {
                Ok(Self::error(raw.response_code, raw.errors))
            }
            (status, success) => Err(format!(
                "inconsistent response wrapper: status {} with success={}",
                status, success
            )),
        }
    }
}

impl<T, E> Default for ResponseWrapper<T, E> {
    fn default() -> Self {
        Self::ongoing()
    }
}

impl<T, E> From<NetworkResult<T, E>> for ResponseWrapper<T, E> {
    fn from(result: NetworkResult<T, E>) -> Self {
        match result {
            NetworkResult::Success { code, data } => Self::success(code, data),
            NetworkResult::Error {
                code,
                parsed_errors,
                ..
            } => Self::error(code, parsed_errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ongoing_defaults() {
        let wrapper = ResponseWrapper::<String, String>::ongoing();
        assert_eq!(wrapper.response_code(), 0);
        assert!(!wrapper.is_success());
        assert_eq!(wrapper.status(), RequestStatus::Ongoing);
        assert!(wrapper.data().is_none());
        assert!(wrapper.errors().is_none());
        assert_eq!(wrapper, ResponseWrapper::default());
    }

    #[test]
    fn test_flatten_no_content_success() {
        let result: NetworkResult<String, String> = NetworkResult::Success {
            code: 204,
            data: None,
        };
        let wrapper = result.into_response_wrapper();

        assert_eq!(wrapper, ResponseWrapper::success(204, None));
        assert!(wrapper.is_success());
        assert_eq!(wrapper.status(), RequestStatus::Success);
        assert!(wrapper.errors().is_none());
    }

    #[test]
    fn test_flatten_error_drops_consumed_flag() {
        let consumed: NetworkResult<String, String> = NetworkResult::Error {
            code: 422,
            is_error_consumed: true,
            parsed_errors: Some(vec!["invalid email".to_string()]),
        };
        let unconsumed: NetworkResult<String, String> = NetworkResult::Error {
            code: 422,
            is_error_consumed: false,
            parsed_errors: Some(vec!["invalid email".to_string()]),
        };

        let wrapper = ResponseWrapper::from(consumed);
        assert_eq!(wrapper, ResponseWrapper::from(unconsumed));
        assert_eq!(wrapper.status(), RequestStatus::Failed);
        assert!(!wrapper.is_success());
        assert!(wrapper.data().is_none());
        assert_eq!(wrapper.errors(), Some(&["invalid email".to_string()][..]));
    }

    #[test]
    fn test_serializes_camel_case() {
        let wrapper = ResponseWrapper::<serde_json::Value, String>::success(
            200,
            Some(json!({ "id": 7 })),
        );
        assert_eq!(
            serde_json::to_value(&wrapper).unwrap(),
            json!({
                "responseCode": 200,
                "success": true,
                "status": "SUCCESS",
                "data": { "id": 7 },
                "errors": null
            })
        );
    }

    #[test]
    fn test_deserializes_through_factories() {
        let wrapper: ResponseWrapper<u32, String> = serde_json::from_value(json!({
            "responseCode": 422,
            "success": false,
            "status": "FAILED",
            "data": null,
            "errors": ["invalid email"]
        }))
        .unwrap();
        assert_eq!(
            wrapper,
            ResponseWrapper::error(422, Some(vec!["invalid email".to_string()]))
        );

        let ongoing = serde_json::to_value(ResponseWrapper::<u32, String>::ongoing()).unwrap();
        let wrapper: ResponseWrapper<u32, String> = serde_json::from_value(ongoing).unwrap();
        assert_eq!(wrapper, ResponseWrapper::ongoing());
    }

    #[test]
    fn test_rejects_mismatched_fields() {
        let failed_but_successful = serde_json::from_str::<ResponseWrapper<u32, String>>(
            r#"{"responseCode":0,"success":true,"status":"FAILED","data":5,"errors":["x"]}"#,
        );
        assert!(failed_but_successful.is_err());

        let success_with_errors = serde_json::from_value::<ResponseWrapper<u32, String>>(json!({
            "responseCode": 200,
            "success": true,
            "status": "SUCCESS",
            "data": 5,
            "errors": ["x"]
        }));
        assert!(success_with_errors.is_err());

        let ongoing_with_data = serde_json::from_value::<ResponseWrapper<u32, String>>(json!({
            "responseCode": 0,
            "success": false,
            "status": "ONGOING",
            "data": 5,
            "errors": null
        }));
        assert!(ongoing_with_data.is_err());
    }
}

use enum_as_inner::EnumAsInner;
use serde::{Deserialize, Serialize};

use super::wrapper::ResponseWrapper;
use crate::call::response::ApiResponse;
use crate::errors::ResponseCode;
use crate::handlers::ErrorParser;

/// Outcome of a single API call.
///
/// `T` is the success payload, `E` the typed error record produced by an
/// [`ErrorParser`]. Values are built once and never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, EnumAsInner)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NetworkResult<T, E> {
    Success {
        code: u16,
        data: Option<T>,
    },
    Error {
        code: u16,
        is_error_consumed: bool,
        parsed_errors: Option<Vec<E>>,
    },
}

impl<T, E> NetworkResult<T, E> {
    /// Take code and body from a response the caller already classified as
    /// successful
    pub fn success_from(response: ApiResponse<T>) -> Self {
        let code = response.code();
        NetworkResult::Success {
            code,
            data: response.into_body(),
        }
    }

    /// Take the code from a failed response and run `error_parser` over its
    /// error body, if one was supplied
    pub fn error_from<R>(
        response: &ApiResponse<R>,
        is_error_consumed: bool,
        error_parser: Option<&dyn ErrorParser<E>>,
    ) -> Self {
        let parsed_errors =
            error_parser.and_then(|parser| parser.parse_errors(&response.as_failed()));

        NetworkResult::Error {
            code: response.code(),
            is_error_consumed,
            parsed_errors,
        }
    }

    /// HTTP status or sentinel code
    pub fn code(&self) -> u16 {
        match self {
            NetworkResult::Success { code, .. } | NetworkResult::Error { code, .. } => *code,
        }
    }

    pub fn response_code(&self) -> Option<ResponseCode> {
        ResponseCode::from_code(self.code())
    }

    /// Whether a consumer already handled this failure. Always false for
    /// successes.
    pub fn is_error_consumed(&self) -> bool {
        matches!(
            self,
            NetworkResult::Error {
                is_error_consumed: true,
                ..
            }
        )
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            NetworkResult::Success { data, .. } => data.as_ref(),
            NetworkResult::Error { .. } => None,
        }
    }

    pub fn parsed_errors(&self) -> Option<&[E]> {
        match self {
            NetworkResult::Success { .. } => None,
            NetworkResult::Error { parsed_errors, .. } => parsed_errors.as_deref(),
        }
    }

    /// Transform the payload, leaving errors untouched
    pub fn map<U, F>(self, f: F) -> NetworkResult<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            NetworkResult::Success { code, data } => NetworkResult::Success {
                code,
                data: data.map(f),
            },
            NetworkResult::Error {
                code,
                is_error_consumed,
                parsed_errors,
            } => NetworkResult::Error {
                code,
                is_error_consumed,
                parsed_errors,
            },
        }
    }

    pub fn into_response_wrapper(self) -> ResponseWrapper<T, E> {
        self.into()
    }
}

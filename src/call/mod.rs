//! Wrapping a single API call into a [`NetworkResult`]

pub mod response;

use std::future::Future;
use tracing::{debug, warn};

use crate::errors::{CallCancelled, CallError};
use crate::handlers::{ErrorConsumer, ErrorParser};
use crate::result::NetworkResult;

pub use response::{ApiResponse, FailedResponse};

/// Run one async call and classify its outcome.
///
/// Transport failures become `Error` results carrying a sentinel code: 503
/// when the host could not be reached, 512 otherwise. Non-2xx responses
/// become `Error` results with their real code and whatever `error_parser`
/// extracted. Only cancellation escapes, as `Err(CallCancelled)`.
///
/// The call is made exactly once.
pub async fn safe_api_call<T, E, F, Fut>(
    call: F,
    error_parser: Option<&dyn ErrorParser<E>>,
    error_consumer: Option<&dyn ErrorConsumer>,
) -> Result<NetworkResult<T, E>, CallCancelled>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<ApiResponse<T>, CallError>>,
{
    let outcome = call().await;
    classify(outcome, error_parser, error_consumer)
}

/// Blocking counterpart of [`safe_api_call`] for synchronous transports
pub fn safe_api_call_blocking<T, E, F>(
    call: F,
    error_parser: Option<&dyn ErrorParser<E>>,
    error_consumer: Option<&dyn ErrorConsumer>,
) -> Result<NetworkResult<T, E>, CallCancelled>
where
    F: FnOnce() -> Result<ApiResponse<T>, CallError>,
{
    classify(call(), error_parser, error_consumer)
}

fn classify<T, E>(
    outcome: Result<ApiResponse<T>, CallError>,
    error_parser: Option<&dyn ErrorParser<E>>,
    error_consumer: Option<&dyn ErrorConsumer>,
) -> Result<NetworkResult<T, E>, CallCancelled> {
    let response = match outcome {
        Ok(response) => response,
        Err(CallError::Cancelled) => {
            debug!("API call cancelled, propagating");
            return Err(CallCancelled);
        }
        Err(error) => {
            let code = error.sentinel_code();
            let is_error_consumed =
                error_consumer.is_some_and(|consumer| consumer.consume_exception(&error));
            warn!(
                code,
                consumed = is_error_consumed,
                error = %error,
                "API call failed before a response was received"
            );
            return Ok(NetworkResult::Error {
                code,
                is_error_consumed,
                parsed_errors: None,
            });
        }
    };

    if response.is_successful() {
        debug!(code = response.code(), "API call succeeded");
        return Ok(NetworkResult::success_from(response));
    }

    let is_error_consumed =
        error_consumer.is_some_and(|consumer| consumer.consume_error(&response.as_failed()));
    debug!(
        code = response.code(),
        consumed = is_error_consumed,
        "API call returned an error status"
    );
    Ok(NetworkResult::error_from(
        &response,
        is_error_consumed,
        error_parser,
    ))
}

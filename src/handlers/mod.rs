//! Pluggable strategies for failed calls

pub mod json_errors;
pub mod status_consumer;

use crate::call::response::FailedResponse;
use crate::errors::CallError;

pub use json_errors::{JsonErrorsParser, DEFAULT_FALLBACK_MESSAGE};
pub use status_consumer::StatusCodeConsumer;

/// Turns the body of a failed response into typed error records.
///
/// Implementations must not panic on malformed bodies: return `None` (or a
/// placeholder record) instead. `None` and an empty list both mean "nothing
/// parsed", so prefer `None`.
pub trait ErrorParser<E>: Send + Sync {
    fn parse_errors(&self, response: &FailedResponse<'_>) -> Option<Vec<E>>;
}

/// Decides whether a failure was already handled by a side effect (forced
/// logout, update prompt) so callers can skip their own error handling.
pub trait ErrorConsumer: Send + Sync {
    fn consume_error(&self, _response: &FailedResponse<'_>) -> bool {
        false
    }

    fn consume_exception(&self, _error: &CallError) -> bool {
        false
    }
}

/// [`ErrorParser`] backed by a closure, see [`parse_fn`]
#[derive(Clone, Copy)]
pub struct FnErrorParser<F>(F);

/// Use a closure as an [`ErrorParser`]
pub fn parse_fn<E, F>(f: F) -> FnErrorParser<F>
where
    F: Fn(&FailedResponse<'_>) -> Option<Vec<E>> + Send + Sync,
{
    FnErrorParser(f)
}

impl<E, F> ErrorParser<E> for FnErrorParser<F>
where
    F: Fn(&FailedResponse<'_>) -> Option<Vec<E>> + Send + Sync,
{
    fn parse_errors(&self, response: &FailedResponse<'_>) -> Option<Vec<E>> {
        (self.0)(response)
    }
}

/// [`ErrorConsumer`] for failed responses backed by a closure, see
/// [`consume_fn`]. Transport failures are never consumed.
#[derive(Clone, Copy)]
pub struct FnErrorConsumer<F>(F);

/// Use a closure as an [`ErrorConsumer`] for failed responses
pub fn consume_fn<F>(f: F) -> FnErrorConsumer<F>
where
    F: Fn(&FailedResponse<'_>) -> bool + Send + Sync,
{
    FnErrorConsumer(f)
}

impl<F> ErrorConsumer for FnErrorConsumer<F>
where
    F: Fn(&FailedResponse<'_>) -> bool + Send + Sync,
{
    fn consume_error(&self, response: &FailedResponse<'_>) -> bool {
        (self.0)(response)
    }
}

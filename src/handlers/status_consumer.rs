use tracing::info;

use super::ErrorConsumer;
use crate::call::response::FailedResponse;
use crate::errors::{CallError, ResponseCode};

/// Consumes failed responses with one of a fixed set of status codes and runs
/// a side effect for them, e.g. logging the user out on a 401.
pub struct StatusCodeConsumer<F> {
    codes: Vec<u16>,
    on_consumed: F,
    consume_unreachable: bool,
}

impl<F> StatusCodeConsumer<F>
where
    F: Fn(u16) + Send + Sync,
{
    pub fn new(codes: impl IntoIterator<Item = u16>, on_consumed: F) -> Self {
        Self {
            codes: codes.into_iter().collect(),
            on_consumed,
            consume_unreachable: false,
        }
    }

    /// Session expired: consume 401s
    pub fn unauthorized(on_consumed: F) -> Self {
        Self::new([ResponseCode::Unauthorized.code()], on_consumed)
    }

    /// Client too old: consume 426s
    pub fn force_update(on_consumed: F) -> Self {
        Self::new([ResponseCode::ForceUpdate.code()], on_consumed)
    }

    /// Also consume host-unreachable failures, e.g. to show an offline banner
    pub fn consume_unreachable(mut self, consume: bool) -> Self {
        self.consume_unreachable = consume;
        self
    }

    pub fn codes(&self) -> &[u16] {
        &self.codes
    }
}

impl<F> ErrorConsumer for StatusCodeConsumer<F>
where
    F: Fn(u16) + Send + Sync,
{
    fn consume_error(&self, response: &FailedResponse<'_>) -> bool {
        let code = response.code();
        if !self.codes.contains(&code) {
            return false;
        }

        info!(code, "Consuming failed response");
        (self.on_consumed)(code);
        true
    }

    fn consume_exception(&self, error: &CallError) -> bool {
        if !self.consume_unreachable || !error.is_host_unreachable() {
            return false;
        }

        let code = error.sentinel_code();
        info!(code, "Consuming unreachable host failure");
        (self.on_consumed)(code);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU16, AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_unauthorized_runs_side_effect() {
        let logouts = Arc::new(AtomicUsize::new(0));
        let counter = logouts.clone();
        let consumer = StatusCodeConsumer::unauthorized(move |_: u16| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(consumer.consume_error(&FailedResponse::new(401, None)));
        assert!(!consumer.consume_error(&FailedResponse::new(403, None)));
        assert_eq!(logouts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_multiple_codes() {
        let last = Arc::new(AtomicU16::new(0));
        let seen = last.clone();
        let consumer = StatusCodeConsumer::new([401, 426], move |code: u16| {
            seen.store(code, Ordering::SeqCst);
        });

        assert_eq!(consumer.codes(), &[401, 426]);
        assert!(consumer.consume_error(&FailedResponse::new(426, None)));
        assert_eq!(last.load(Ordering::SeqCst), 426);
    }

    #[test]
    fn test_exceptions_only_when_enabled() {
        let consumer = StatusCodeConsumer::force_update(|_: u16| {});
        let unreachable = CallError::host_unreachable("api.test");
        assert!(!consumer.consume_exception(&unreachable));

        let consumer = consumer.consume_unreachable(true);
        assert!(consumer.consume_exception(&unreachable));
        assert!(!consumer.consume_exception(&CallError::transport("reset by peer")));
    }
}

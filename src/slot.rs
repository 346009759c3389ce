use std::future::Future;
use tokio::sync::watch;
use tracing::debug;

use crate::call::{safe_api_call, ApiResponse};
use crate::errors::{CallCancelled, CallError};
use crate::handlers::{ErrorConsumer, ErrorParser};
use crate::result::{NetworkResult, RequestStatus, ResponseWrapper};

/// Observable holder of the latest [`ResponseWrapper`] for one request.
///
/// Starts out `Ongoing`. Every update replaces the whole wrapper and wakes all
/// subscribers.
pub struct ResponseSlot<T, E> {
    sender: watch::Sender<ResponseWrapper<T, E>>,
}

impl<T, E> ResponseSlot<T, E> {
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(ResponseWrapper::ongoing());
        Self { sender }
    }

    pub fn subscribe(&self) -> watch::Receiver<ResponseWrapper<T, E>> {
        self.sender.subscribe()
    }

    /// Replace the current wrapper, returning the previous one
    pub fn set(&self, wrapper: ResponseWrapper<T, E>) -> ResponseWrapper<T, E> {
        self.sender.send_replace(wrapper)
    }

    pub fn set_ongoing(&self) {
        self.set(ResponseWrapper::ongoing());
    }

    pub fn publish(&self, result: NetworkResult<T, E>) {
        self.set(result.into());
    }

    pub fn status(&self) -> RequestStatus {
        self.sender.borrow().status()
    }

    pub fn current(&self) -> ResponseWrapper<T, E>
    where
        T: Clone,
        E: Clone,
    {
        self.sender.borrow().clone()
    }

    /// Mark the slot ongoing, run the call through [`safe_api_call`] and
    /// publish the outcome.
    ///
    /// On cancellation the slot stays `Ongoing` and the cancellation is
    /// returned to the caller.
    pub async fn track<F, Fut>(
        &self,
        call: F,
        error_parser: Option<&dyn ErrorParser<E>>,
        error_consumer: Option<&dyn ErrorConsumer>,
    ) -> Result<(), CallCancelled>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ApiResponse<T>, CallError>>,
    {
        self.set_ongoing();
        let result = safe_api_call(call, error_parser, error_consumer).await?;
        debug!(code = result.code(), "Publishing call result");
        self.publish(result);
        Ok(())
    }
}

impl<T, E> Default for ResponseSlot<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

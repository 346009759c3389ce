//! Classify the outcome of a single API call into a [`NetworkResult`] and
//! flatten it into a [`ResponseWrapper`] for presentation code.

pub mod call;
pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod result;
pub mod slot;

pub use call::{safe_api_call, safe_api_call_blocking, ApiResponse, FailedResponse};
pub use client::ApiClient;
pub use config::ClientConfig;
pub use errors::{CallCancelled, CallError, ResponseCode};
pub use handlers::{
    consume_fn, parse_fn, ErrorConsumer, ErrorParser, JsonErrorsParser, StatusCodeConsumer,
};
pub use result::{NetworkResult, RequestStatus, ResponseWrapper};
pub use slot::ResponseSlot;

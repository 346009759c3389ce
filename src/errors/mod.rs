//! Response codes and call failures

pub mod call_error;
pub mod codes;

pub use call_error::{CallCancelled, CallError};
pub use codes::ResponseCode;

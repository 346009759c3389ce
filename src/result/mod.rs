//! Call outcomes and their presentation-layer projection

pub mod network_result;
pub mod status;
pub mod wrapper;

pub use network_result::NetworkResult;
pub use status::RequestStatus;
pub use wrapper::ResponseWrapper;

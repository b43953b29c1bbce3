pub mod types;
pub mod services;
pub mod endpoints;

pub use types::{ApiError, ErrorBody, StatusResponse, INVALID_PAYLOAD_DETAIL};
pub use endpoints::*;

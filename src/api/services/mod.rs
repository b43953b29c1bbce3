pub mod inference_service;
pub mod memory_service;
pub mod validation_service;

pub use inference_service::*;
pub use memory_service::*;
pub use validation_service::*;

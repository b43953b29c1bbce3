pub mod clock;
pub mod logging;
pub mod server;

pub use clock::now_ms;
pub use logging::{init_tracing, LoggingError};
pub use server::{bind, serve};

pub mod service_config;

pub use service_config::{
    ConfigError, ConfigOverrides, InferenceConfig, LoggingConfig, MemoryConfig, ServerConfig, ServiceConfig, ServiceKind,
    DEFAULT_INFERENCE_PORT, DEFAULT_MEMORY_PORT,
};

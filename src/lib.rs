pub mod config;
pub mod modules;
pub mod api;
pub mod utils;

#[cfg(test)]
pub mod _test_mock;

pub use config::{ServiceConfig, ServerConfig, LoggingConfig, InferenceConfig, MemoryConfig};
pub use modules::emotion::{
    BehaviorError, BehaviorRecord, CanonicalBehavior, EmotionPredict, EmotionPrediction,
    EmotionPredictorError, StubEmotionPredictor,
};
pub use modules::memory::{MemoryEntry, MemoryLookup, MemoryQuery, MemoryStoreError, StubMemoryStore};
pub use api::services::{InferenceService, MemoryService};
pub use api::{inference_router, memory_router};

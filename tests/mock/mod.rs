// Each test binary uses only part of the shared helpers.
#![allow(dead_code)]

pub mod emotion_mock;
pub mod memory_mock;
pub mod server;

pub use emotion_mock::{MockEmotionPredictor, TestBehaviorData};
pub use memory_mock::{FailingLookup, TestMemoryData};
pub use server::{spawn_inference, spawn_memory, TestServer};

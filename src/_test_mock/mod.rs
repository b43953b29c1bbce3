pub mod behavior_mock;
pub mod memory_mock;

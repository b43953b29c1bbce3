pub mod store;

pub use store::{MemoryEntry, MemoryLookup, MemoryQuery, MemoryStoreError, StubMemoryStore};

use empath_services::{MemoryEntry, MemoryLookup, MemoryQuery, MemoryStoreError};

pub struct FailingLookup;

impl MemoryLookup for FailingLookup {
    fn lookup(&self, _query: &MemoryQuery) -> Result<MemoryEntry, MemoryStoreError> {
        Err(MemoryStoreError::Backend("connection refused".to_string()))
    }
}

pub struct TestMemoryData;

impl TestMemoryData {
    pub fn test_session_id() -> String {
        format!("test-session-{}", uuid::Uuid::new_v4())
    }
}

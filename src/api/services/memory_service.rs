use std::sync::Arc;
use tracing::debug;

use crate::api::types::ApiError;
use crate::config::MemoryConfig;
use crate::modules::memory::{MemoryEntry, MemoryLookup, MemoryQuery, StubMemoryStore};

#[derive(Clone)]
pub struct MemoryService {
    lookup: Arc<dyn MemoryLookup>,
    pub config: MemoryConfig,
}

impl MemoryService {
    pub fn new(lookup: Arc<dyn MemoryLookup>, config: MemoryConfig) -> Self {
        Self { lookup, config }
    }

    pub fn with_stub(config: MemoryConfig) -> Self {
        let store = StubMemoryStore::new(config.placeholder_value.clone());
        Self::new(Arc::new(store), config)
    }

    pub fn get(&self, query: &MemoryQuery) -> Result<MemoryEntry, ApiError> {
        let entry = self.lookup.lookup(query)?;
        debug!(session_id = %query.session_id, key = ?query.key, "memory lookup served");
        Ok(entry)
    }
}

impl Default for MemoryService {
    fn default() -> Self {
        Self::with_stub(MemoryConfig::default())
    }
}

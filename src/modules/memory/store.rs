use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type SessionId = String;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MemoryStoreError {
    #[error("Backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryQuery {
    pub session_id: SessionId,
    #[serde(default)]
    pub key: Option<String>,
}

impl MemoryQuery {
    pub fn new(session_id: impl Into<SessionId>, key: Option<&str>) -> Self {
        Self {
            session_id: session_id.into(),
            key: key.map(str::to_string),
        }
    }
}

/// `key` serializes as `null` when the query carried none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryEntry {
    pub session_id: SessionId,
    pub key: Option<String>,
    pub value: String,
}

#[cfg_attr(test, mockall::automock)]
pub trait MemoryLookup: Send + Sync {
    fn lookup(&self, query: &MemoryQuery) -> Result<MemoryEntry, MemoryStoreError>;
}

/// Echoes the query back with a fixed value; no backing storage.
#[derive(Debug, Clone)]
pub struct StubMemoryStore {
    placeholder_value: String,
}

impl StubMemoryStore {
    pub fn new(placeholder_value: impl Into<String>) -> Self {
        Self {
            placeholder_value: placeholder_value.into(),
        }
    }

    pub fn placeholder_value(&self) -> &str {
        &self.placeholder_value
    }
}

impl Default for StubMemoryStore {
    fn default() -> Self {
        Self::new("stub")
    }
}

impl MemoryLookup for StubMemoryStore {
    fn lookup(&self, query: &MemoryQuery) -> Result<MemoryEntry, MemoryStoreError> {
        Ok(MemoryEntry {
            session_id: query.session_id.clone(),
            key: query.key.clone(),
            value: self.placeholder_value.clone(),
        })
    }
}

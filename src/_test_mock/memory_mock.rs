use crate::modules::memory::store::MemoryQuery;

pub struct MemoryTestHelpers;

impl MemoryTestHelpers {
    pub fn test_session_id() -> String {
        format!("test-session-{}", uuid::Uuid::new_v4())
    }

    pub fn test_session_ids(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("test-session-{}", i)).collect()
    }

    pub fn sample_queries() -> Vec<MemoryQuery> {
        let mut queries: Vec<MemoryQuery> = Self::test_session_ids(3)
            .into_iter()
            .map(|session_id| MemoryQuery::new(session_id, Some("last_choice")))
            .collect();
        queries.push(MemoryQuery::new("test-session-none", None));
        queries.push(MemoryQuery::new("", Some("")));
        queries
    }
}

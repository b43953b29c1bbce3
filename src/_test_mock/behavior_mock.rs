use crate::modules::emotion::behavior::CanonicalBehavior;
use std::collections::HashMap;

pub struct BehaviorTestHelpers;

impl BehaviorTestHelpers {
    pub fn canonical(session_id: &str, timestamp_ms: i64) -> CanonicalBehavior {
        CanonicalBehavior {
            session_id: session_id.to_string(),
            timestamp_ms,
            decision_latency_ms: 0.0,
            action_frequency: 0,
            recent_choices: Vec::new(),
            context: HashMap::new(),
        }
    }

    pub fn busy_canonical(session_id: &str, timestamp_ms: i64) -> CanonicalBehavior {
        CanonicalBehavior {
            decision_latency_ms: 850.5,
            action_frequency: 14,
            recent_choices: vec![3, 1, 4, 1, 5],
            context: HashMap::from([("zone".to_string(), 2.0), ("threat".to_string(), 0.75)]),
            ..Self::canonical(session_id, timestamp_ms)
        }
    }
}

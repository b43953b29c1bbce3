use empath_services::{CanonicalBehavior, EmotionPredict, EmotionPrediction, EmotionPredictorError};
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

/// Hand-rolled predictor keyed by session id, recording every behavior it sees.
pub struct MockEmotionPredictor {
    responses: HashMap<String, Result<EmotionPrediction, EmotionPredictorError>>,
    default_response: Result<EmotionPrediction, EmotionPredictorError>,
    seen: Mutex<Vec<CanonicalBehavior>>,
}

impl MockEmotionPredictor {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            default_response: Ok(Self::prediction("neutral", 0.5)),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn prediction(emotion: &str, confidence: f64) -> EmotionPrediction {
        let scores = BTreeMap::from([(emotion.to_string(), confidence)]);
        EmotionPrediction::new(emotion, confidence, scores, 0)
    }

    pub fn with_response(
        mut self,
        session_id: &str,
        response: Result<EmotionPrediction, EmotionPredictorError>,
    ) -> Self {
        self.responses.insert(session_id.to_string(), response);
        self
    }

    pub fn with_default_response(mut self, response: Result<EmotionPrediction, EmotionPredictorError>) -> Self {
        self.default_response = response;
        self
    }

    pub fn failing() -> Self {
        Self::new().with_default_response(Err(EmotionPredictorError::Inference("Mock error".to_string())))
    }

    pub fn seen(&self) -> Vec<CanonicalBehavior> {
        self.seen.lock().unwrap().clone()
    }
}

impl EmotionPredict for MockEmotionPredictor {
    fn predict(
        &self,
        behavior: &CanonicalBehavior,
        received_at_ms: i64,
    ) -> Result<EmotionPrediction, EmotionPredictorError> {
        self.seen.lock().unwrap().push(behavior.clone());
        let mut response = self
            .responses
            .get(&behavior.session_id)
            .cloned()
            .unwrap_or_else(|| self.default_response.clone());

        if let Ok(prediction) = response.as_mut() {
            prediction.timestamp_ms = if behavior.timestamp_ms != 0 {
                behavior.timestamp_ms
            } else {
                received_at_ms
            };
        }
        response
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

pub struct TestBehaviorData;

impl TestBehaviorData {
    pub fn full_payload() -> Value {
        json!({
            "session_id": "s1",
            "decision_latency_ms": 100.0,
            "action_frequency": 2,
            "recent_choices": [1, 2],
            "context": {"x": 1.0}
        })
    }

    pub fn minimal_payload() -> Value {
        json!({"session_id": "s1"})
    }

    pub fn valid_payloads() -> Vec<Value> {
        vec![
            Self::minimal_payload(),
            Self::full_payload(),
            json!({"session_id": "s2", "timestamp_ms": 1_700_000_000_000i64}),
            json!({"session_id": "s3", "decision_latency_ms": null, "context": null}),
            json!({"session_id": "s4", "recent_choices": [], "context": {}}),
            json!({"session_id": "s5", "context": {"a": 1, "b": -2.5, "c": "3.25"}}),
            json!({"session_id": "s6", "action_frequency": 0, "unknown_field": "ignored"}),
        ]
    }

    pub fn invalid_payloads() -> Vec<Value> {
        vec![
            json!({"session_id": "s1", "context": {"x": "bad"}}),
            json!({"session_id": "s1", "context": {"x": 1.0, "y": [1]}}),
            json!({"session_id": "s1", "recent_choices": [1, "two"]}),
            json!({"session_id": "s1", "recent_choices": "1,2"}),
            json!({"session_id": "s1", "context": ["x"]}),
            json!({"session_id": "s1", "decision_latency_ms": "slow"}),
            json!({"session_id": "s1", "timestamp_ms": {"at": 1}}),
            json!({"session_id": "s1", "action_frequency": "often"}),
            json!({"session_id": "s1", "action_frequency": 3.7}),
            json!({"session_id": "s1", "timestamp_ms": "1500.9"}),
            json!({"session_id": "s1", "recent_choices": [1.5]}),
        ]
    }
}

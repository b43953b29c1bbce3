use std::sync::Arc;
use tracing::debug;

use crate::api::types::ApiError;
use crate::config::InferenceConfig;
use crate::modules::emotion::{
    canonicalize, BehaviorRecord, EmotionPredict, EmotionPrediction, StubEmotionPredictor,
};

/// Built once at startup and cloned into each request; holds no mutable state.
#[derive(Clone)]
pub struct InferenceService {
    predictor: Arc<dyn EmotionPredict>,
    pub config: InferenceConfig,
}

impl InferenceService {
    pub fn new(predictor: Arc<dyn EmotionPredict>, config: InferenceConfig) -> Self {
        Self { predictor, config }
    }

    pub fn with_stub(config: InferenceConfig) -> Self {
        Self::new(Arc::new(StubEmotionPredictor::new()), config)
    }

    pub fn predictor_name(&self) -> &'static str {
        self.predictor.name()
    }

    pub fn infer(&self, record: BehaviorRecord, received_at_ms: i64) -> Result<EmotionPrediction, ApiError> {
        let behavior = canonicalize(record, received_at_ms)?;
        debug!(
            session_id = %behavior.session_id,
            timestamp_ms = behavior.timestamp_ms,
            choices = behavior.recent_choices.len(),
            context_keys = behavior.context.len(),
            "behavior canonicalized"
        );

        let prediction = self.predictor.predict(&behavior, received_at_ms)?;
        debug!(
            session_id = %behavior.session_id,
            dominant_emotion = %prediction.dominant_emotion,
            predictor = self.predictor.name(),
            "prediction produced"
        );

        Ok(prediction)
    }
}

impl Default for InferenceService {
    fn default() -> Self {
        Self::with_stub(InferenceConfig::default())
    }
}

pub mod behavior;
pub mod predictor;

pub use behavior::{
    behavior_from_value, canonicalize, convert, normalize, parse_behavior, BehaviorError, BehaviorRecord,
    CanonicalBehavior, NormalizedBehavior,
};
pub use predictor::{EmotionPredict, EmotionPrediction, EmotionPredictorError, StubEmotionPredictor};

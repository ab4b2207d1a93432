//! Fraud probability scoring: trained artifacts when present, heuristic otherwise.

mod onnx;
mod scorer;

pub use onnx::{OnnxClassifier, OnnxScaler};
pub use scorer::{Scorer, ScoringStrategy};

use crate::error::{SentinelError, SentinelResult};

/// Previously fitted normalization of the feature vector.
pub trait FeatureScaler: Send + Sync {
    fn transform(&self, features: &[f32]) -> SentinelResult<Vec<f32>>;
}

/// Previously trained binary classifier.
pub trait ProbabilityModel: Send + Sync {
    /// Probability of the positive (fraudulent) class.
    fn predict_probability(&self, features: &[f32]) -> SentinelResult<f64>;
}

/// Scaler + classifier pair, loaded once and read-only afterwards.
pub struct ModelArtifacts {
    pub scaler: Box<dyn FeatureScaler>,
    pub classifier: Box<dyn ProbabilityModel>,
}

impl ModelArtifacts {
    pub fn new(scaler: Box<dyn FeatureScaler>, classifier: Box<dyn ProbabilityModel>) -> Self {
        Self { scaler, classifier }
    }

    /// Load both ONNX artifacts. Fails if either is missing or unreadable, or if
    /// the runtime library itself cannot be loaded (`ort` panics in that case).
    pub fn load_onnx(config: &crate::config::ModelConfig) -> SentinelResult<Self> {
        let loaded = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let scaler = OnnxScaler::load(&config.scaler_path, config.intra_threads)?;
            let classifier = OnnxClassifier::load(&config.classifier_path, config.intra_threads)?;
            Ok(Self::new(Box::new(scaler), Box::new(classifier)))
        }));
        loaded.unwrap_or_else(|payload| Err(SentinelError::RuntimeUnavailable(panic_message(&*payload))))
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "runtime panicked while loading".to_string())
}

impl std::fmt::Debug for ModelArtifacts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelArtifacts").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_payloads_become_messages() {
        let owned: Box<dyn std::any::Any + Send> = Box::new(String::from("no libonnxruntime"));
        assert_eq!(panic_message(&*owned), "no libonnxruntime");
        let borrowed: Box<dyn std::any::Any + Send> = Box::new("static text");
        assert_eq!(panic_message(&*borrowed), "static text");
        let other: Box<dyn std::any::Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(&*other), "runtime panicked while loading");
    }
}

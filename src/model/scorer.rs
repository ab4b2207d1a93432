//! Maps a feature vector to a fraud probability in [0, 1].

use super::ModelArtifacts;
use crate::config::ModelConfig;
use crate::error::{SentinelError, SentinelResult};
use crate::features::FeatureVector;
use tracing::{info, warn};

/// Which scoring path the process runs. Chosen once at construction.
#[derive(Debug)]
pub enum ScoringStrategy {
    /// Scaler then classifier
    Model(ModelArtifacts),
    /// mean(features) / 100, clamped. Crude placeholder for when no artifacts exist.
    Heuristic,
}

#[derive(Debug)]
pub struct Scorer {
    strategy: ScoringStrategy,
}

impl Scorer {
    pub fn new(strategy: ScoringStrategy) -> Self {
        Self { strategy }
    }

    pub fn heuristic() -> Self {
        Self::new(ScoringStrategy::Heuristic)
    }

    /// Try to load both artifacts; on any failure stay on the heuristic for the life of the process.
    pub fn from_config(config: &ModelConfig) -> Self {
        match ModelArtifacts::load_onnx(config) {
            Ok(artifacts) => {
                info!(
                    scaler = %config.scaler_path.display(),
                    classifier = %config.classifier_path.display(),
                    "model artifacts loaded; model-backed scoring"
                );
                Self::new(ScoringStrategy::Model(artifacts))
            }
            Err(e) => {
                warn!(error = %e, "model artifacts unavailable; heuristic scoring");
                Self::heuristic()
            }
        }
    }

    pub fn model_loaded(&self) -> bool {
        matches!(self.strategy, ScoringStrategy::Model(_))
    }

    pub fn strategy(&self) -> &ScoringStrategy {
        &self.strategy
    }

    pub fn score(&self, features: &FeatureVector) -> SentinelResult<f64> {
        match &self.strategy {
            ScoringStrategy::Heuristic => Ok((features.mean() / 100.0).clamp(0.0, 1.0)),
            ScoringStrategy::Model(artifacts) => {
                let scaled = artifacts.scaler.transform(&features.to_f32())?;
                let prob = artifacts.classifier.predict_probability(&scaled)?;
                if !prob.is_finite() {
                    return Err(SentinelError::Inference(format!(
                        "classifier returned non-finite probability {prob}"
                    )));
                }
                Ok(prob.clamp(0.0, 1.0))
            }
        }
    }
}

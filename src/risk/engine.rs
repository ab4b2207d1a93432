//! Runs extraction, scoring and the rule stages; assembles the analysis.

use super::{identify, recommend, Recommendation, RiskFactor};
use crate::config::RiskConfig;
use crate::error::SentinelResult;
use crate::features::FeatureExtractor;
use crate::model::Scorer;
use crate::telemetry::BehavioralData;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result for a single response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudAnalysis {
    pub fraud_probability: f64,
    pub is_suspicious: bool,
    pub risk_factors: Vec<RiskFactor>,
    pub confidence: f64,
    pub recommendations: Vec<Recommendation>,
}

impl FraudAnalysis {
    pub fn new(
        probability: f64,
        risk_factors: Vec<RiskFactor>,
        recommendations: Vec<Recommendation>,
        config: &RiskConfig,
    ) -> Self {
        Self {
            fraud_probability: probability,
            is_suspicious: probability > config.review_threshold,
            risk_factors,
            confidence: confidence(probability),
            recommendations,
        }
    }
}

/// Distance from the 0.5 midpoint, rescaled to [0, 1].
pub fn confidence(probability: f64) -> f64 {
    ((probability - 0.5).abs() * 2.0).min(1.0)
}

/// Shared across requests; holds no per-request state.
pub struct RiskEngine {
    extractor: FeatureExtractor,
    scorer: Scorer,
    config: RiskConfig,
}

impl RiskEngine {
    pub fn new(scorer: Scorer, config: RiskConfig) -> Self {
        Self {
            extractor: FeatureExtractor::new(),
            scorer,
            config,
        }
    }

    pub fn analyze(&self, data: &BehavioralData) -> SentinelResult<FraudAnalysis> {
        let features = self.extractor.extract(data);
        let probability = self.scorer.score(&features)?;
        let factors = identify(data, &features, probability);
        let recommendations = recommend(&factors, probability, &self.config);

        debug!(
            survey_id = %data.survey_id,
            response_id = %data.response_id,
            probability,
            factors = factors.len(),
            "response scored"
        );

        Ok(FraudAnalysis::new(probability, factors, recommendations, &self.config))
    }

    pub fn model_loaded(&self) -> bool {
        self.scorer.model_loaded()
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::DeviceFingerprint;

    fn engine() -> RiskEngine {
        RiskEngine::new(Scorer::heuristic(), RiskConfig::default())
    }

    #[test]
    fn confidence_formula() {
        assert_eq!(confidence(0.5), 0.0);
        assert_eq!(confidence(1.0), 1.0);
        assert_eq!(confidence(0.0), 1.0);
        assert!((confidence(0.75) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn suspicious_is_strictly_above_review_threshold() {
        let c = RiskConfig::default();
        assert!(!FraudAnalysis::new(0.7, vec![], vec![], &c).is_suspicious);
        assert!(FraudAnalysis::new(0.7000001, vec![], vec![], &c).is_suspicious);
    }

    #[test]
    fn mobile_only_response() {
        let mut data = BehavioralData::empty("s", "r");
        data.device_fingerprint = DeviceFingerprint {
            is_mobile: Some(true),
            ..Default::default()
        };
        let a = engine().analyze(&data).unwrap();
        assert!((a.fraud_probability - 1.0 / 24.0 / 100.0).abs() < 1e-12);
        assert!(!a.is_suspicious);
        assert_eq!(a.risk_factors, vec![RiskFactor::NoMouseData, RiskFactor::NoKeystrokeData]);
        assert!(a.recommendations.is_empty());
        assert_eq!(a.confidence, confidence(a.fraud_probability));
    }

    #[test]
    fn fast_responses_recommend_minimum_time() {
        let mut data = BehavioralData::empty("s", "r");
        data.response_times = vec![0.5, 0.5, 0.5];
        let a = engine().analyze(&data).unwrap();
        assert_eq!(a.risk_factors[0], RiskFactor::FastResponses);
        assert_eq!(a.recommendations, vec![Recommendation::MinimumTime]);
    }

    #[test]
    fn serializes_to_wire_shape() {
        let a = FraudAnalysis::new(
            0.95,
            vec![RiskFactor::NoKeystrokeData],
            vec![Recommendation::Reject],
            &RiskConfig::default(),
        );
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v["is_suspicious"], true);
        assert_eq!(v["risk_factors"][0], "No keystroke data");
        assert_eq!(v["recommendations"][0], "Reject response - very high fraud probability");
        assert!(v["confidence"].as_f64().unwrap() > 0.89);
    }
}

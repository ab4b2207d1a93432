//! Action recommendations from probability tier and risk factors.

use super::RiskFactor;
use crate::config::RiskConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Reject response - very high fraud probability")]
    Reject,
    #[serde(rename = "Flag for manual review")]
    ManualReview,
    #[serde(rename = "Monitor user for patterns")]
    Monitor,
    #[serde(rename = "Consider adding minimum time requirements")]
    MinimumTime,
    #[serde(rename = "Implement additional bot detection measures")]
    BotDetection,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Reject => "Reject response - very high fraud probability",
            Recommendation::ManualReview => "Flag for manual review",
            Recommendation::Monitor => "Monitor user for patterns",
            Recommendation::MinimumTime => "Consider adding minimum time requirements",
            Recommendation::BotDetection => "Implement additional bot detection measures",
        }
    }

    /// Highest tier whose threshold the probability strictly exceeds.
    pub fn tier(probability: f64, config: &RiskConfig) -> Option<Self> {
        if probability > config.reject_threshold {
            Some(Recommendation::Reject)
        } else if probability > config.review_threshold {
            Some(Recommendation::ManualReview)
        } else if probability > config.monitor_threshold {
            Some(Recommendation::Monitor)
        } else {
            None
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn recommend(factors: &[RiskFactor], probability: f64, config: &RiskConfig) -> Vec<Recommendation> {
    let mut out = Vec::new();
    if let Some(tier) = Recommendation::tier(probability, config) {
        out.push(tier);
    }
    if factors.contains(&RiskFactor::FastResponses) {
        out.push(Recommendation::MinimumTime);
    }
    if factors.contains(&RiskFactor::RoboticMouse) {
        out.push(Recommendation::BotDetection);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(factors: &[RiskFactor], p: f64) -> Vec<Recommendation> {
        recommend(factors, p, &RiskConfig::default())
    }

    #[test]
    fn one_tier_at_most() {
        assert_eq!(rec(&[], 0.95), vec![Recommendation::Reject]);
        assert_eq!(rec(&[], 0.9), vec![Recommendation::ManualReview]);
        assert_eq!(rec(&[], 0.71), vec![Recommendation::ManualReview]);
        assert_eq!(rec(&[], 0.7), vec![Recommendation::Monitor]);
        assert!(rec(&[], 0.5).is_empty());
    }

    #[test]
    fn factor_additions_follow_tier() {
        let factors = [RiskFactor::RoboticMouse, RiskFactor::FastResponses];
        assert_eq!(
            rec(&factors, 0.95),
            vec![
                Recommendation::Reject,
                Recommendation::MinimumTime,
                Recommendation::BotDetection,
            ]
        );
        assert_eq!(rec(&[RiskFactor::FastResponses], 0.0), vec![Recommendation::MinimumTime]);
    }

    #[test]
    fn unrelated_factors_add_nothing() {
        assert!(rec(&[RiskFactor::NoMouseData, RiskFactor::RepetitiveAnswers], 0.1).is_empty());
    }
}

//! Named threshold rules over the raw telemetry. Output order is part of the contract.

use crate::features::stats::{longest_streak, mean, std_dev};
use crate::features::FeatureVector;
use crate::telemetry::BehavioralData;
use serde::{Deserialize, Serialize};
use std::fmt;

const FAST_MEAN_RESPONSE_SECS: f64 = 2.0;
const ROBOTIC_MIN_SAMPLES: usize = 10;
const ROBOTIC_MAX_VELOCITY_STD: f64 = 0.1;
const REPETITIVE_STREAK_SHARE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskFactor {
    #[serde(rename = "Extremely fast response times")]
    FastResponses,
    #[serde(rename = "Robotic mouse movement patterns")]
    RoboticMouse,
    #[serde(rename = "Repetitive answer patterns")]
    RepetitiveAnswers,
    #[serde(rename = "No mouse movement data")]
    NoMouseData,
    #[serde(rename = "No keystroke data")]
    NoKeystrokeData,
}

impl RiskFactor {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskFactor::FastResponses => "Extremely fast response times",
            RiskFactor::RoboticMouse => "Robotic mouse movement patterns",
            RiskFactor::RepetitiveAnswers => "Repetitive answer patterns",
            RiskFactor::NoMouseData => "No mouse movement data",
            RiskFactor::NoKeystrokeData => "No keystroke data",
        }
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evaluate every rule in fixed order. `_features` and `_probability` are
/// accepted so rules can grow into them; none of the current rules read them.
pub fn identify(data: &BehavioralData, _features: &FeatureVector, _probability: f64) -> Vec<RiskFactor> {
    let mut factors = Vec::new();

    if !data.response_times.is_empty() && mean(&data.response_times) < FAST_MEAN_RESPONSE_SECS {
        factors.push(RiskFactor::FastResponses);
    }

    if data.mouse_movements.len() > ROBOTIC_MIN_SAMPLES {
        // A reported velocity of exactly 0 counts as not reported.
        let reported: Vec<f64> = data
            .mouse_movements
            .iter()
            .filter_map(|m| m.velocity)
            .filter(|&v| v != 0.0)
            .collect();
        if !reported.is_empty() && std_dev(&reported) < ROBOTIC_MAX_VELOCITY_STD {
            factors.push(RiskFactor::RoboticMouse);
        }
    }

    if !data.answer_patterns.is_empty() {
        let streak = longest_streak(&data.answer_patterns) as f64;
        if streak > data.answer_patterns.len() as f64 * REPETITIVE_STREAK_SHARE {
            factors.push(RiskFactor::RepetitiveAnswers);
        }
    }

    if data.mouse_movements.is_empty() {
        factors.push(RiskFactor::NoMouseData);
    }

    if data.keystrokes.is_empty() {
        factors.push(RiskFactor::NoKeystrokeData);
    }

    factors
}

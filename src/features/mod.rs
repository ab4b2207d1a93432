//! Behavioral feature extraction: raw telemetry → fixed 24-slot vector.

mod pipeline;
mod behavioral;
pub mod stats;

pub use pipeline::FeatureExtractor;
pub use behavioral::{
    AnswerStats, BehavioralStats, DeviceStats, KeystrokeStats, MouseStats, ResponseTimeStats,
};

use serde::{Deserialize, Serialize};

/// Width of every feature vector.
pub const FEATURE_DIM: usize = 24;

/// Slot layout, group by group.
pub mod slot {
    pub const MOUSE: usize = 0;
    pub const KEYSTROKE: usize = 6;
    pub const RESPONSE_TIME: usize = 11;
    pub const ANSWER: usize = 16;
    pub const DEVICE: usize = 19;
}

/// Fixed-size feature vector for model input. Every value is finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: [f64; FEATURE_DIM],
}

impl FeatureVector {
    /// Build from raw values, replacing NaN and infinities with 0.
    pub fn sanitized(mut values: [f64; FEATURE_DIM]) -> Self {
        for v in values.iter_mut() {
            if !v.is_finite() {
                *v = 0.0;
            }
        }
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / FEATURE_DIM as f64
    }

    /// Single-precision copy for ONNX input.
    pub fn to_f32(&self) -> Vec<f32> {
        self.values.iter().map(|&v| v as f32).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_replaces_non_finite() {
        let mut raw = [1.0; FEATURE_DIM];
        raw[0] = f64::NAN;
        raw[5] = f64::INFINITY;
        raw[23] = f64::NEG_INFINITY;
        let fv = FeatureVector::sanitized(raw);
        assert_eq!(fv.get(0), Some(0.0));
        assert_eq!(fv.get(5), Some(0.0));
        assert_eq!(fv.get(23), Some(0.0));
        assert_eq!(fv.get(1), Some(1.0));
        assert_eq!(fv.get(24), None);
        assert!(fv.as_slice().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn slots_cover_the_vector() {
        assert_eq!(slot::DEVICE + 5, FEATURE_DIM);
    }
}

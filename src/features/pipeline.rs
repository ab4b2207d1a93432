//! Feature extraction pipeline: telemetry → behavioral stats → sanitized vector.

use super::{BehavioralStats, FeatureVector};
use crate::telemetry::BehavioralData;

/// Stateless; one extractor can serve every request concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureExtractor;

impl FeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Never fails: degenerate statistics come out as 0.
    pub fn extract(&self, data: &BehavioralData) -> FeatureVector {
        let stats = BehavioralStats::from_data(data);
        FeatureVector::sanitized(stats.to_vector())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{slot, FEATURE_DIM};
    use crate::telemetry::{DeviceFingerprint, MouseSample};

    #[test]
    fn empty_modalities_zero_the_first_19_slots() {
        let mut data = BehavioralData::empty("s", "r");
        data.device_fingerprint = DeviceFingerprint {
            is_mobile: Some(true),
            ..Default::default()
        };
        let fv = FeatureExtractor::new().extract(&data);
        assert_eq!(fv.as_slice().len(), FEATURE_DIM);
        assert!(fv.as_slice()[..slot::DEVICE].iter().all(|&v| v == 0.0));
        assert_eq!(&fv.as_slice()[slot::DEVICE..], &[1.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn zero_time_delta_is_sanitized() {
        let mut data = BehavioralData::empty("s", "r");
        data.mouse_movements = vec![
            MouseSample { x: 0.0, y: 0.0, timestamp: 7, velocity: None },
            MouseSample { x: 5.0, y: 0.0, timestamp: 7, velocity: None },
            MouseSample { x: 5.0, y: 0.0, timestamp: 7, velocity: None },
        ];
        let fv = FeatureExtractor::new().extract(&data);
        assert!(fv.as_slice().iter().all(|v| v.is_finite()));
        assert_eq!(fv.get(slot::MOUSE), Some(0.0));
        assert_eq!(fv.get(slot::MOUSE + 4), Some(3.0));
    }

    #[test]
    fn answer_group_slots() {
        let mut data = BehavioralData::empty("s", "r");
        data.answer_patterns = ["a", "a", "b", "a", "a", "a"].iter().map(|s| s.to_string()).collect();
        let fv = FeatureExtractor::new().extract(&data);
        assert_eq!(fv.get(slot::ANSWER + 1), Some(3.0));
        assert_eq!(fv.get(slot::ANSWER + 2), Some(2.0 / 6.0));
    }
}

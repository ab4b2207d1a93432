//! Per-modality behavioral statistics for one response.

use super::stats::{
    distinct_ratio, longest_streak, mean, nan_max, nan_mean, nan_std, shannon_entropy, std_dev,
};
use super::FEATURE_DIM;
use crate::telemetry::{BehavioralData, DeviceFingerprint, KeystrokeEvent, MouseSample};
use serde::{Deserialize, Serialize};

/// Response times under this many seconds count as hurried.
const FAST_RESPONSE_SECS: f64 = 1.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MouseStats {
    pub mean_velocity: f64,
    pub std_velocity: f64,
    pub mean_acceleration: f64,
    pub std_acceleration: f64,
    pub sample_count: f64,
    pub max_velocity: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeystrokeStats {
    pub mean_dwell: f64,
    pub std_dwell: f64,
    pub mean_flight: f64,
    pub std_flight: f64,
    pub event_count: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseTimeStats {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub fast_count: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerStats {
    pub entropy: f64,
    pub longest_streak: f64,
    pub distinct_ratio: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceStats {
    pub is_mobile: f64,
    pub plugin_count: f64,
    pub screen_width: f64,
    pub screen_height: f64,
    pub color_depth: f64,
}

/// All groups together. Empty modalities stay at their zero defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehavioralStats {
    pub mouse: MouseStats,
    pub keystrokes: KeystrokeStats,
    pub response_times: ResponseTimeStats,
    pub answers: AnswerStats,
    pub device: DeviceStats,
}

impl MouseStats {
    pub fn from_trace(trace: &[MouseSample]) -> Self {
        if trace.is_empty() {
            return Self::default();
        }
        let velocities = step_velocities(trace);
        let accelerations = first_difference(&velocities);
        Self {
            mean_velocity: nan_mean(&velocities),
            std_velocity: nan_std(&velocities),
            mean_acceleration: nan_mean(&accelerations),
            std_acceleration: nan_std(&accelerations),
            sample_count: trace.len() as f64,
            max_velocity: nan_max(&velocities),
        }
    }
}

/// Distance over time between consecutive samples, in trace order. The first
/// entry is undefined (NaN). A zero time delta yields inf, or NaN if the
/// pointer did not move either.
fn step_velocities(trace: &[MouseSample]) -> Vec<f64> {
    let mut out = Vec::with_capacity(trace.len());
    out.push(f64::NAN);
    for pair in trace.windows(2) {
        let distance = (pair[1].x - pair[0].x).hypot(pair[1].y - pair[0].y);
        let dt = pair[1].timestamp as f64 - pair[0].timestamp as f64;
        out.push(distance / dt);
    }
    out
}

fn first_difference(values: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    if values.is_empty() {
        return out;
    }
    out.push(f64::NAN);
    out.extend(values.windows(2).map(|w| w[1] - w[0]));
    out
}

impl KeystrokeStats {
    pub fn from_events(events: &[KeystrokeEvent]) -> Self {
        if events.is_empty() {
            return Self::default();
        }
        let dwell: Vec<f64> = events.iter().map(|k| k.dwell_time).collect();
        let flight: Vec<f64> = events.iter().map(|k| k.flight_time).collect();
        Self {
            mean_dwell: nan_mean(&dwell),
            std_dwell: nan_std(&dwell),
            mean_flight: nan_mean(&flight),
            std_flight: nan_std(&flight),
            event_count: events.len() as f64,
        }
    }
}

impl ResponseTimeStats {
    pub fn from_latencies(times: &[f64]) -> Self {
        if times.is_empty() {
            return Self::default();
        }
        Self {
            mean: mean(times),
            std: std_dev(times),
            min: times.iter().copied().fold(f64::INFINITY, f64::min),
            max: times.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            fast_count: times.iter().filter(|&&t| t < FAST_RESPONSE_SECS).count() as f64,
        }
    }
}

impl AnswerStats {
    pub fn from_answers(answers: &[String]) -> Self {
        if answers.is_empty() {
            return Self::default();
        }
        Self {
            entropy: shannon_entropy(answers),
            longest_streak: longest_streak(answers) as f64,
            distinct_ratio: distinct_ratio(answers),
        }
    }
}

impl DeviceStats {
    pub fn from_fingerprint(fp: &DeviceFingerprint) -> Self {
        Self {
            is_mobile: if fp.is_mobile() { 1.0 } else { 0.0 },
            plugin_count: fp.plugin_count() as f64,
            screen_width: fp.screen_width(),
            screen_height: fp.screen_height(),
            color_depth: fp.color_depth(),
        }
    }
}

impl BehavioralStats {
    pub fn from_data(data: &BehavioralData) -> Self {
        Self {
            mouse: MouseStats::from_trace(&data.mouse_movements),
            keystrokes: KeystrokeStats::from_events(&data.keystrokes),
            response_times: ResponseTimeStats::from_latencies(&data.response_times),
            answers: AnswerStats::from_answers(&data.answer_patterns),
            device: DeviceStats::from_fingerprint(&data.device_fingerprint),
        }
    }

    /// Raw values in slot order, before sanitization.
    pub fn to_vector(&self) -> [f64; FEATURE_DIM] {
        let m = &self.mouse;
        let k = &self.keystrokes;
        let r = &self.response_times;
        let a = &self.answers;
        let d = &self.device;
        [
            m.mean_velocity,
            m.std_velocity,
            m.mean_acceleration,
            m.std_acceleration,
            m.sample_count,
            m.max_velocity,
            k.mean_dwell,
            k.std_dwell,
            k.mean_flight,
            k.std_flight,
            k.event_count,
            r.mean,
            r.std,
            r.min,
            r.max,
            r.fast_count,
            a.entropy,
            a.longest_streak,
            a.distinct_ratio,
            d.is_mobile,
            d.plugin_count,
            d.screen_width,
            d.screen_height,
            d.color_depth,
        ]
    }
}

//! Behavioral telemetry captured for one survey response.
//! Shared wire types for the HTTP payload and the scoring pipeline.

use serde::{Deserialize, Serialize};

/// Everything recorded for one response. Sole input to the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehavioralData {
    pub survey_id: String,
    pub response_id: String,
    /// Pointer trace in capture order; never re-sorted
    pub mouse_movements: Vec<MouseSample>,
    pub keystrokes: Vec<KeystrokeEvent>,
    /// Per-question latency in seconds, question order
    pub response_times: Vec<f64>,
    /// Accepted for payload compatibility; not scored
    pub scroll_events: Vec<serde_json::Value>,
    pub device_fingerprint: DeviceFingerprint,
    /// One opaque answer label per question, question order
    pub answer_patterns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MouseSample {
    pub x: f64,
    pub y: f64,
    pub timestamp: i64,
    /// Client-side velocity, when the collector computed one
    #[serde(default)]
    pub velocity: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeystrokeEvent {
    pub key: String,
    pub timestamp: i64,
    /// Key-down to key-up
    pub dwell_time: f64,
    /// Previous key-up to this key-down
    pub flight_time: f64,
}

/// Client-reported device traits. Absent fields take the defaults returned by
/// the accessors; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceFingerprint {
    #[serde(default)]
    pub is_mobile: Option<bool>,
    #[serde(default)]
    pub plugins: Option<Vec<String>>,
    #[serde(default)]
    pub screen_width: Option<f64>,
    #[serde(default)]
    pub screen_height: Option<f64>,
    #[serde(default)]
    pub color_depth: Option<f64>,
}

impl DeviceFingerprint {
    pub fn is_mobile(&self) -> bool {
        self.is_mobile.unwrap_or(false)
    }

    pub fn plugin_count(&self) -> usize {
        self.plugins.as_ref().map_or(0, Vec::len)
    }

    pub fn screen_width(&self) -> f64 {
        self.screen_width.unwrap_or(0.0)
    }

    pub fn screen_height(&self) -> f64 {
        self.screen_height.unwrap_or(0.0)
    }

    pub fn color_depth(&self) -> f64 {
        self.color_depth.unwrap_or(0.0)
    }
}

impl BehavioralData {
    /// Response with no telemetry at all; useful as a starting point.
    pub fn empty(survey_id: impl Into<String>, response_id: impl Into<String>) -> Self {
        Self {
            survey_id: survey_id.into(),
            response_id: response_id.into(),
            mouse_movements: Vec::new(),
            keystrokes: Vec::new(),
            response_times: Vec::new(),
            scroll_events: Vec::new(),
            device_fingerprint: DeviceFingerprint::default(),
            answer_patterns: Vec::new(),
        }
    }
}

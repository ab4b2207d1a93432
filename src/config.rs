//! Service configuration. Model artifacts are read once at startup from the paths below.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Scaler and classifier artifacts
    pub model: ModelConfig,
    /// Recommendation ladder and suspicious threshold
    pub risk: RiskConfig,
    /// HTTP listener
    pub server: ServerConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// ONNX feature scaler, `[1, 24] -> [1, 24]`
    pub scaler_path: PathBuf,
    /// ONNX binary classifier exposing class probabilities
    pub classifier_path: PathBuf,
    /// Intra-op threads per ONNX session
    pub intra_threads: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Probability above this recommends rejecting the response
    pub reject_threshold: f64,
    /// Probability above this flags for manual review; also the suspicious cutoff
    pub review_threshold: f64,
    /// Probability above this recommends monitoring
    pub monitor_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            scaler_path: PathBuf::from("models/scaler.onnx"),
            classifier_path: PathBuf::from("models/fraud_model.onnx"),
            intra_threads: 1,
        }
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            reject_threshold: 0.9,
            review_threshold: 0.7,
            monitor_threshold: 0.5,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8000".to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl ServiceConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<ServiceConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }
}

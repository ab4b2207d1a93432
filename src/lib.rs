//! Survey Sentinel — behavioral fraud scoring for survey responses.
//!
//! Modular structure:
//! - [`telemetry`] — Mouse, keystroke, latency, answer and device inputs
//! - [`features`] — 24-slot behavioral feature extraction
//! - [`model`] — Scaler + classifier scoring with heuristic fallback
//! - [`risk`] — Risk factor rules, recommendations, analysis assembly
//! - [`api`] — HTTP routes
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod error;
pub mod telemetry;
pub mod features;
pub mod model;
pub mod risk;
pub mod api;
pub mod logging;

pub use config::ServiceConfig;
pub use error::{SentinelError, SentinelResult};
pub use telemetry::{BehavioralData, DeviceFingerprint, KeystrokeEvent, MouseSample};
pub use features::{FeatureExtractor, FeatureVector, FEATURE_DIM};
pub use model::{Scorer, ScoringStrategy};
pub use risk::{FraudAnalysis, Recommendation, RiskEngine, RiskFactor};
pub use logging::StructuredLogger;

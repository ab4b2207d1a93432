//! Error types for the scoring service.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentinelError {
    #[error("model artifact not found: {}", .0.display())]
    ArtifactMissing(PathBuf),

    #[error("onnx runtime error: {0}")]
    Ort(#[from] ort::Error),

    #[error("onnx runtime unavailable: {0}")]
    RuntimeUnavailable(String),

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SentinelResult<T> = Result<T, SentinelError>;

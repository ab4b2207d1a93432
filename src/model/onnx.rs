//! ONNX Runtime sessions for the scaler and classifier artifacts.
//! Input to both: `[1, feature_dim]` f32.

use super::{FeatureScaler, ProbabilityModel};
use crate::error::{SentinelError, SentinelResult};
use ndarray::Array2;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Tensor;
use std::path::Path;

struct OnnxSession {
    session: Session,
    input_name: String,
    output_names: Vec<String>,
}

impl OnnxSession {
    fn load(path: &Path, intra_threads: usize) -> SentinelResult<Self> {
        if !path.exists() {
            return Err(SentinelError::ArtifactMissing(path.to_path_buf()));
        }

        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(intra_threads.max(1))?
            .commit_from_file(path)?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .unwrap_or_else(|| "input".to_string());
        let output_names = session.outputs.iter().map(|o| o.name.clone()).collect();

        tracing::debug!(path = %path.display(), input = %input_name, "onnx session ready");
        Ok(Self {
            session,
            input_name,
            output_names,
        })
    }

    /// Run one row through the session and return the requested output as flat f32 plus its shape.
    fn run(&self, features: &[f32], output: &str) -> SentinelResult<(Vec<i64>, Vec<f32>)> {
        let arr = Array2::from_shape_vec((1, features.len()), features.to_vec())
            .map_err(|e| SentinelError::Inference(e.to_string()))?;
        let input = Tensor::from_array(arr)?;
        let outputs = self
            .session
            .run(ort::inputs![self.input_name.as_str() => input]?)?;
        let value = outputs
            .get(output)
            .ok_or_else(|| SentinelError::Inference(format!("missing output {output}")))?;
        let (shape, data) = value.try_extract_raw_tensor::<f32>()?;
        Ok((shape.to_vec(), data.to_vec()))
    }
}

/// Fitted standard scaler exported to ONNX.
pub struct OnnxScaler {
    inner: OnnxSession,
    output_name: String,
}

impl OnnxScaler {
    pub fn load(path: &Path, intra_threads: usize) -> SentinelResult<Self> {
        let inner = OnnxSession::load(path, intra_threads)?;
        let output_name = inner
            .output_names
            .first()
            .cloned()
            .ok_or_else(|| SentinelError::Inference("scaler has no outputs".into()))?;
        Ok(Self { inner, output_name })
    }
}

impl FeatureScaler for OnnxScaler {
    fn transform(&self, features: &[f32]) -> SentinelResult<Vec<f32>> {
        let (_, data) = self.inner.run(features, &self.output_name)?;
        if data.len() != features.len() {
            return Err(SentinelError::Inference(format!(
                "scaler returned {} values for {} features",
                data.len(),
                features.len()
            )));
        }
        Ok(data)
    }
}

/// Binary classifier exported with a probability tensor output (no zipmap).
pub struct OnnxClassifier {
    inner: OnnxSession,
    output_name: String,
}

impl OnnxClassifier {
    pub fn load(path: &Path, intra_threads: usize) -> SentinelResult<Self> {
        let inner = OnnxSession::load(path, intra_threads)?;
        let output_name = probability_output(&inner.output_names).ok_or_else(|| {
            SentinelError::Inference("classifier has no probability output".into())
        })?;
        Ok(Self { inner, output_name })
    }
}

impl ProbabilityModel for OnnxClassifier {
    fn predict_probability(&self, features: &[f32]) -> SentinelResult<f64> {
        let (shape, data) = self.inner.run(features, &self.output_name)?;
        positive_class(&shape, &data)
            .map(f64::from)
            .ok_or_else(|| SentinelError::Inference(format!("unexpected output shape {shape:?}")))
    }
}

/// Prefer an output named like "probabilities"; otherwise the last non-label output.
fn probability_output(names: &[String]) -> Option<String> {
    names
        .iter()
        .find(|n| n.contains("prob"))
        .or_else(|| names.iter().rev().find(|n| !n.contains("label")))
        .cloned()
}

/// `[1, 2]` or `[2]` → class 1 column; `[1, 1]` or `[1]` → the single value.
fn positive_class(shape: &[i64], data: &[f32]) -> Option<f32> {
    let classes = *shape.last()?;
    match classes {
        c if c >= 2 => data.get(1).copied(),
        1 => data.first().copied(),
        _ => None,
    }
}

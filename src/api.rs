//! HTTP surface: analyze one response, report health.
//! Malformed bodies are rejected by the `Json` extractor before the engine runs.

use crate::risk::{FraudAnalysis, RiskEngine};
use crate::telemetry::BehavioralData;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};
use uuid::Uuid;

pub struct ApiState {
    pub engine: RiskEngine,
}

pub fn api_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/analyze-behavior", post(analyze_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

async fn health_handler(State(state): State<Arc<ApiState>>) -> Json<Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "model_loaded": state.engine.model_loaded(),
    }))
}

async fn analyze_handler(
    State(state): State<Arc<ApiState>>,
    Json(data): Json<BehavioralData>,
) -> Result<Json<FraudAnalysis>, (StatusCode, Json<Value>)> {
    let analysis_id = Uuid::new_v4();
    match state.engine.analyze(&data) {
        Ok(analysis) => {
            debug!(
                %analysis_id,
                response_id = %data.response_id,
                probability = analysis.fraud_probability,
                suspicious = analysis.is_suspicious,
                "analysis complete"
            );
            Ok(Json(analysis))
        }
        Err(e) => {
            error!(
                %analysis_id,
                survey_id = %data.survey_id,
                response_id = %data.response_id,
                error = %e,
                "fraud analysis failed"
            );
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "detail": "Analysis failed" })),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RiskConfig;
    use crate::error::{SentinelError, SentinelResult};
    use crate::model::{FeatureScaler, ModelArtifacts, ProbabilityModel, Scorer, ScoringStrategy};

    struct Identity;

    impl FeatureScaler for Identity {
        fn transform(&self, features: &[f32]) -> SentinelResult<Vec<f32>> {
            Ok(features.to_vec())
        }
    }

    struct Broken;

    impl ProbabilityModel for Broken {
        fn predict_probability(&self, _: &[f32]) -> SentinelResult<f64> {
            Err(SentinelError::Inference("runtime unavailable".into()))
        }
    }

    fn state(scorer: Scorer) -> Arc<ApiState> {
        Arc::new(ApiState {
            engine: RiskEngine::new(scorer, RiskConfig::default()),
        })
    }

    #[tokio::test]
    async fn health_reports_heuristic_mode() {
        let Json(body) = health_handler(State(state(Scorer::heuristic()))).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["model_loaded"], false);
    }

    #[tokio::test]
    async fn analyze_returns_analysis() {
        let mut data = BehavioralData::empty("s1", "r1");
        data.response_times = vec![0.5, 0.5, 0.5];
        let Json(a) = analyze_handler(State(state(Scorer::heuristic())), Json(data))
            .await
            .unwrap();
        assert!(!a.is_suspicious);
        assert_eq!(a.risk_factors[0].as_str(), "Extremely fast response times");
    }

    #[tokio::test]
    async fn inference_failure_is_generic_500() {
        let scorer = Scorer::new(ScoringStrategy::Model(ModelArtifacts::new(
            Box::new(Identity),
            Box::new(Broken),
        )));
        let st = state(scorer);
        let Json(health) = health_handler(State(st.clone())).await;
        assert_eq!(health["model_loaded"], true);

        let (status, Json(body)) = analyze_handler(State(st), Json(BehavioralData::empty("s", "r")))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "detail": "Analysis failed" }));
    }
}

//! Survey Sentinel entrypoint.
//! With a payload path argument, scores that one file and prints the analysis as a JSON line;
//! otherwise serves the HTTP API until Ctrl+C.

use survey_sentinel::{
    api::{api_router, ApiState},
    config::ServiceConfig,
    logging::StructuredLogger,
    model::Scorer,
    risk::RiskEngine,
    telemetry::BehavioralData,
};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

fn run_once(engine: &RiskEngine, payload: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let data: BehavioralData = serde_json::from_str(&std::fs::read_to_string(payload)?)?;
    let analysis = engine.analyze(&data)?;
    StructuredLogger::emit_json(&analysis, &mut std::io::stdout().lock())?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("SENTINEL_CONFIG_PATH")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = ServiceConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    info!(config = %config_path.display(), "survey sentinel starting");

    // Artifacts are loaded exactly once; a failure pins the process to heuristic scoring.
    let scorer = Scorer::from_config(&config.model);
    let engine = RiskEngine::new(scorer, config.risk.clone());

    if let Some(payload) = std::env::args().nth(1) {
        return run_once(&engine, Path::new(&payload));
    }

    let state = Arc::new(ApiState { engine });
    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    info!(bind = %config.server.bind, "listening (Ctrl+C to stop)");

    axum::serve(listener, api_router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    info!("survey sentinel stopping");
    Ok(())
}

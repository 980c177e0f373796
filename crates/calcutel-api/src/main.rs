use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use calcutel_api::config::ApiConfig;
use calcutel_api::state::AppState;
use calcutel_norms::ScoringEngine;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env();
    let catalog = config.load_catalog()?;
    if !catalog.anomalies().is_empty() {
        tracing::info!(
            anomalies = catalog.anomalies().len(),
            "catalog loaded with data-quality findings"
        );
    }

    let state = AppState {
        engine: ScoringEngine::new(Arc::new(catalog)),
    };

    lambda_http::run(calcutel_api::router(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}

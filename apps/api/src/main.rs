mod analysis;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::oracle::LlmScoringOracle;
use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (a missing credential is a configuration
    // error, surfaced before the server binds)
    let config = Config::from_env().map_err(|e| AppError::Config(e.to_string()))?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Copyscore API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the scoring oracle (credential injected here, once)
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    let oracle = Arc::new(LlmScoringOracle::new(llm));
    info!("Scoring oracle initialized (model: {})", llm_client::MODEL);

    // Build app state
    let state = AppState { oracle };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

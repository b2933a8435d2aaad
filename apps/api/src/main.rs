mod analysis;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::provider::{AnalysisProvider, LlmAnalysisProvider, StaticAnalysisProvider};
use crate::config::{AnalysisMode, Config};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing credential in live mode)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career API v{}", env!("CARGO_PKG_VERSION"));

    let provider = build_provider(&config)?;
    info!("Analysis provider initialized ({})", provider.name());

    let state = AppState { provider };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Picks the analysis backend named by `ANALYSIS_MODE`.
fn build_provider(config: &Config) -> Result<Arc<dyn AnalysisProvider>> {
    Ok(match config.mode {
        AnalysisMode::Llm => {
            let api_key = config
                .hf_api_key
                .clone()
                .context("HF_API_KEY not configured")?;
            let llm = LlmClient::new(api_key, config.hf_model_url.clone())?;
            info!("LLM client initialized (endpoint: {})", llm.endpoint());
            Arc::new(LlmAnalysisProvider(llm))
        }
        AnalysisMode::Static => Arc::new(StaticAnalysisProvider),
    })
}

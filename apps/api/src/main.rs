mod config;
mod errors;
mod llm_client;
mod matching;
mod models;
mod routes;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on invalid values or weights)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting FitMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.llm.clone()).context("Failed to build LLM HTTP client")?;
    info!(
        "LLM client initialized (model: {}, endpoint: {})",
        llm.model(),
        config.llm.base_url
    );

    // Build app state (scorer tables come from config)
    let state = AppState::new(config.clone(), Arc::new(llm));

    let weights = config.scoring.weights;
    info!(
        "Score weights: skill={} experience={} education={} keywords={} ({} stop words)",
        weights.skill_match,
        weights.experience_match,
        weights.education_match,
        weights.keyword_density,
        state.scorer.extractor().stop_word_count()
    );

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web front end has a fixed host

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("API_HOST and PORT must form a valid socket address")?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

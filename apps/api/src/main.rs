mod config;
mod document;
mod errors;
mod llm_client;
mod pipeline;
mod routes;
mod state;
mod tailoring;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::document::{HttpPdfExtractor, LocalPdfExtractor, PdfTextExtractor};
use crate::llm_client::LlmClient;
use crate::pipeline::TailorPipeline;
use crate::routes::build_router;
use crate::state::AppState;
use crate::tailoring::LlmTailor;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Tailor API v{}", env!("CARGO_PKG_VERSION"));

    // Text-extraction collaborator: remote service if configured, in-process otherwise
    let pdf: Arc<dyn PdfTextExtractor> = match &config.pdf_service_url {
        Some(url) => {
            info!("PDF extraction via remote service at {url}");
            Arc::new(HttpPdfExtractor::new(url.clone())?)
        }
        None => {
            info!("PDF extraction in-process");
            Arc::new(LocalPdfExtractor)
        }
    };

    // Text-transform collaborator
    let llm = LlmClient::new(config.anthropic_api_key.clone(), config.llm_max_attempts)?;
    info!(
        "LLM client initialized (model: {}, attempts: {})",
        llm_client::MODEL,
        config.llm_max_attempts
    );

    let state = AppState {
        pipeline: TailorPipeline::new(pdf, Arc::new(LlmTailor::new(llm))),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

mod analysis;
mod config;
mod errors;
mod extraction;
mod interview;
mod llm_client;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::{TesseractOcr, TextExtractor};
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

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

    info!("Starting Coach API v{}", env!("CARGO_PKG_VERSION"));

    let llm = GeminiClient::new(config.api_key().to_string())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    if !TesseractOcr::is_available() {
        warn!("OCR tools not found; scanned resumes will extract as empty text");
    }
    let extractor = TextExtractor::from_config(&config);
    info!(
        "Uploads are written to {} (OCR at {} dpi, lang {})",
        config.upload_path.display(),
        config.ocr_dpi,
        config.ocr_lang
    );

    let state = AppState::new(config.clone(), Arc::new(llm), extractor);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

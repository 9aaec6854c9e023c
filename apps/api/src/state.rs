use std::sync::Arc;

use chrono::Duration;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::llm_client::AnalysisClient;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Remote model used for both resume analysis and interview feedback.
    pub llm: Arc<dyn AnalysisClient>,
    pub extractor: Arc<TextExtractor>,
    pub sessions: SessionStore,
    pub config: Config,
    /// Serialises writes to the single upload path.
    pub upload_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(config: Config, llm: Arc<dyn AnalysisClient>, extractor: TextExtractor) -> Self {
        Self {
            llm,
            extractor: Arc::new(extractor),
            sessions: SessionStore::new(Duration::minutes(config.session_idle_minutes)),
            config,
            upload_lock: Arc::new(Mutex::new(())),
        }
    }
}

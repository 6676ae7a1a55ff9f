use crate::config::Config;
use crate::pipeline::TailorPipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Ingestion, tailoring and download, with their collaborators injected.
    pub pipeline: TailorPipeline,
    pub config: Config,
}

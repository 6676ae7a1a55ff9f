pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::pipeline::handlers;
use crate::state::AppState;

/// Body limit for JSON routes that carry a document back: the base64 buffer
/// plus extracted text, which may itself be as large as the upload.
fn document_body_limit(upload_limit: usize) -> usize {
    upload_limit.div_ceil(3) * 4 + upload_limit * 2
}

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);
    let document_limit =
        DefaultBodyLimit::max(document_body_limit(state.config.max_upload_bytes));

    Router::new()
        .route("/health", get(health::health_handler))
        // Ingestion
        .route(
            "/api/v1/documents",
            post(handlers::handle_upload).layer(upload_limit),
        )
        .route(
            "/api/process-pdf",
            post(handlers::handle_process_pdf).layer(upload_limit),
        )
        // Tailoring
        .route(
            "/api/v1/tailor",
            post(handlers::handle_tailor).layer(document_limit),
        )
        .route(
            "/api/v1/analyze",
            post(handlers::handle_analyze).layer(document_limit),
        )
        // Download
        .route(
            "/api/v1/download",
            post(handlers::handle_download).layer(document_limit),
        )
        // Presentation metadata
        .route("/api/v1/fonts", get(handlers::handle_fonts))
        .route("/api/v1/sections", get(handlers::handle_sections))
        .with_state(state)
}

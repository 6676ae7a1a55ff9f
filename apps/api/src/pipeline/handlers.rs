//! Axum route handlers for upload, tailoring, analysis and download.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::document::format::{FontOption, AVAILABLE_FONTS};
use crate::document::pdf::PdfText;
use crate::document::{DocumentContentView, DocumentFormat};
use crate::errors::AppError;
use crate::pipeline::TailorOutcome;
use crate::state::AppState;
use crate::tailoring::keywords::missing_keywords;
use crate::tailoring::{Section, TailorRequest};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorBody {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub section: Section,
    #[serde(default)]
    pub preserve_format: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadBody {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub format: String,
    /// Base64 of the original upload, as returned by the upload endpoint.
    pub buffer: Option<String>,
    #[serde(default)]
    pub preserve_format: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeBody {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub missing_keywords: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// Pulls the `file` field out of a multipart upload.
async fn read_upload(mut multipart: Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        return Ok((filename, data));
    }
    Err(AppError::Validation("No file uploaded".to_string()))
}

/// POST /api/v1/documents
///
/// Detects the upload's format and returns its canonical content plus the
/// original bytes (base64) for a later format-preserving download.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<DocumentContentView>, AppError> {
    let (filename, data) = read_upload(multipart).await?;
    let document = state.pipeline.ingest(&filename, data).await?;
    Ok(Json(DocumentContentView::from(&document)))
}

/// POST /api/process-pdf
///
/// Text-extraction service: `{text, pageCount}` for an uploaded PDF.
pub async fn handle_process_pdf(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<PdfText>, AppError> {
    let (_, data) = read_upload(multipart).await?;
    let extracted = state.pipeline.pdf_extractor().extract(data).await?;
    Ok(Json(extracted))
}

/// POST /api/v1/tailor
///
/// Rewrites the requested scope and returns the merged document.
pub async fn handle_tailor(
    State(state): State<AppState>,
    Json(body): Json<TailorBody>,
) -> Result<Json<TailorOutcome>, AppError> {
    if body.content.trim().is_empty() || body.job_description.trim().is_empty() {
        return Err(AppError::Validation("Missing required fields".to_string()));
    }

    let request = TailorRequest {
        resume_content: body.content,
        job_description: body.job_description,
        section: body.section,
        preserve_format: body.preserve_format,
    };
    let outcome = state.pipeline.tailor(&request).await?;
    Ok(Json(outcome))
}

/// POST /api/v1/download
///
/// Emits either the original upload or the edited text, per `preserveFormat`.
pub async fn handle_download(
    State(state): State<AppState>,
    Json(body): Json<DownloadBody>,
) -> Result<Response, AppError> {
    let format = DocumentFormat::from_tag(&body.format).unwrap_or_default();
    let original = body
        .buffer
        .as_deref()
        .map(|encoded| STANDARD.decode(encoded))
        .transpose()
        .map_err(|e| AppError::Validation(format!("buffer is not valid base64: {e}")))?
        .map(Bytes::from);

    let artifact = state.pipeline.download(
        &body.content,
        format,
        original.as_ref(),
        body.preserve_format,
    )?;

    let headers = [
        (header::CONTENT_TYPE, artifact.content_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", artifact.filename),
        ),
    ];
    Ok((headers, artifact.bytes).into_response())
}

/// POST /api/v1/analyze
pub async fn handle_analyze(Json(body): Json<AnalyzeBody>) -> Json<AnalyzeResponse> {
    Json(AnalyzeResponse {
        missing_keywords: missing_keywords(&body.content, &body.job_description),
    })
}

/// GET /api/v1/fonts
pub async fn handle_fonts() -> Json<&'static [FontOption]> {
    Json(AVAILABLE_FONTS)
}

/// GET /api/v1/sections
pub async fn handle_sections() -> Json<[Section; 5]> {
    Json(Section::VARIANTS)
}

//! PDF text extraction — the one ingestion path with non-local failure modes.
//!
//! `PdfTextExtractor` is the seam. `LocalPdfExtractor` runs `pdf-extract` in-process
//! (and backs `POST /api/process-pdf`); `HttpPdfExtractor` calls a remote service
//! speaking the same `{text, pageCount}` contract.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{multipart, Client};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Text extraction service returned {status}: {message}")]
    Service { status: u16, message: String },

    #[error("Text extraction returned no text")]
    MissingText,

    #[error("PDF parse error: {0}")]
    Parse(String),

    #[error("Extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Extracted text plus pagination. Serialized as the service response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfText {
    pub text: String,
    pub page_count: u32,
}

#[async_trait]
pub trait PdfTextExtractor: Send + Sync {
    async fn extract(&self, data: Bytes) -> Result<PdfText, PdfError>;
}

/// In-process extraction via `pdf-extract`.
#[derive(Debug, Clone, Default)]
pub struct LocalPdfExtractor;

#[async_trait]
impl PdfTextExtractor for LocalPdfExtractor {
    async fn extract(&self, data: Bytes) -> Result<PdfText, PdfError> {
        // Parsing is CPU-bound; keep it off the async executor.
        let pages = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem_by_pages(&data)
        })
        .await?
        .map_err(|e| PdfError::Parse(e.to_string()))?;

        let text = pages.concat();
        if text.trim().is_empty() {
            return Err(PdfError::MissingText);
        }

        let page_count = u32::try_from(pages.len()).unwrap_or(u32::MAX).max(1);
        debug!("Extracted {} chars across {page_count} pages", text.len());
        Ok(PdfText { text, page_count })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServiceResponse {
    text: Option<String>,
    page_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    message: String,
}

/// Remote text-extraction service client. One request, no retry.
#[derive(Clone)]
pub struct HttpPdfExtractor {
    client: Client,
    endpoint: String,
}

impl HttpPdfExtractor {
    pub fn new(endpoint: String) -> Result<Self, PdfError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()?,
            endpoint,
        })
    }
}

#[async_trait]
impl PdfTextExtractor for HttpPdfExtractor {
    async fn extract(&self, data: Bytes) -> Result<PdfText, PdfError> {
        let part = multipart::Part::stream(data)
            .file_name("document.pdf")
            .mime_str("application/pdf")?;
        let form = multipart::Form::new().part("file", part);

        let response = self.client.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ServiceError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(PdfError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let body: ServiceResponse = response.json().await?;
        parse_service_response(body)
    }
}

fn parse_service_response(body: ServiceResponse) -> Result<PdfText, PdfError> {
    let text = body.text.ok_or(PdfError::MissingText)?;
    Ok(PdfText {
        text,
        page_count: body.page_count.unwrap_or(1),
    })
}

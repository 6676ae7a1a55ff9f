//! Pipeline orchestrator — detect → extract → tailor → merge → reconcile.
//!
//! Holds no document state of its own. The caller keeps the current document
//! between upload, tailor and download; every step is an independent request.

pub mod handlers;

use std::sync::Arc;

use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::document::reconcile::{reconcile, DownloadArtifact, ReconcileError};
use crate::document::{extract, DocumentContent, DocumentFormat, ExtractError, PdfTextExtractor};
use crate::tailoring::section::{locate_section, replace_section, section_body_range};
use crate::tailoring::{Section, TailorError, TailorRequest, TextTransformer};

/// Result of a tailoring step.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorOutcome {
    /// Full document after the rewrite was merged in.
    pub content: String,
    /// The scope's text before the rewrite ("" when the section is absent).
    pub original: String,
    /// What the collaborator returned for the requested scope.
    pub tailored: String,
    pub section: Section,
    /// False when a scoped section was not found and the document was left as is.
    pub section_found: bool,
}

#[derive(Clone)]
pub struct TailorPipeline {
    pdf: Arc<dyn PdfTextExtractor>,
    transformer: Arc<dyn TextTransformer>,
}

impl TailorPipeline {
    pub fn new(pdf: Arc<dyn PdfTextExtractor>, transformer: Arc<dyn TextTransformer>) -> Self {
        Self { pdf, transformer }
    }

    pub fn pdf_extractor(&self) -> &dyn PdfTextExtractor {
        self.pdf.as_ref()
    }

    /// Upload step: classify by filename, then extract.
    pub async fn ingest(&self, filename: &str, data: Bytes) -> Result<DocumentContent, ExtractError> {
        let format = DocumentFormat::detect(filename);
        info!("Ingesting '{filename}' ({} bytes) as {format}", data.len());
        extract(data, format, self.pdf.as_ref()).await
    }

    /// Tailor step: rewrite the requested scope and merge it into the document.
    pub async fn tailor(&self, request: &TailorRequest) -> Result<TailorOutcome, TailorError> {
        let tailored = self.transformer.tailor(request).await?;
        let content = &request.resume_content;

        let section_found = match request.section.header() {
            None => true,
            Some(name) => section_body_range(content, name).is_some(),
        };
        if !section_found {
            warn!(
                "Section '{}' not found; document left unchanged",
                request.section
            );
        }

        Ok(TailorOutcome {
            content: replace_section(content, request.section, &tailored),
            original: locate_section(content, request.section),
            tailored,
            section: request.section,
            section_found,
        })
    }

    /// Download step.
    pub fn download(
        &self,
        content: &str,
        format: DocumentFormat,
        original: Option<&Bytes>,
        preserve_format: bool,
    ) -> Result<DownloadArtifact, ReconcileError> {
        reconcile(content, format, original, preserve_format)
    }
}

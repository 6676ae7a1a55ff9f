//! `DocumentContent` — the canonical in-memory form of an uploaded artifact.

use base64::{engine::general_purpose::STANDARD, Engine};
use bytes::Bytes;
use serde::Serialize;

use crate::document::format::DocumentFormat;

/// Format-specific data. `html` exists only for rich documents and
/// `page_count` only for PDFs, so the invariants hold by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FormatDetails {
    Plain,
    RichDoc { html: String },
    Pdf { page_count: u32 },
}

#[derive(Debug, Clone)]
pub struct DocumentContent {
    content: String,
    details: FormatDetails,
    /// Always set at extraction; edited text is carried by the caller, not here.
    original_format: bool,
    buffer: Bytes,
}

impl DocumentContent {
    /// Plain text: the buffer is the text re-encoded, so both always agree.
    pub fn plain(text: String) -> Self {
        let buffer = Bytes::from(text.clone().into_bytes());
        Self {
            content: text,
            details: FormatDetails::Plain,
            original_format: true,
            buffer,
        }
    }

    /// Rich document: canonical content is the converted HTML.
    pub fn rich_doc(html: String, original: Bytes) -> Self {
        Self {
            content: html.clone(),
            details: FormatDetails::RichDoc { html },
            original_format: true,
            buffer: original,
        }
    }

    pub fn pdf(text: String, page_count: u32, original: Bytes) -> Self {
        Self {
            content: text,
            details: FormatDetails::Pdf { page_count },
            original_format: true,
            buffer: original,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn format(&self) -> DocumentFormat {
        match self.details {
            FormatDetails::Plain => DocumentFormat::Plain,
            FormatDetails::RichDoc { .. } => DocumentFormat::RichDoc,
            FormatDetails::Pdf { .. } => DocumentFormat::Pdf,
        }
    }

    pub fn html(&self) -> Option<&str> {
        match &self.details {
            FormatDetails::RichDoc { html } => Some(html),
            _ => None,
        }
    }

    pub fn page_count(&self) -> Option<u32> {
        match self.details {
            FormatDetails::Pdf { page_count } => Some(page_count),
            _ => None,
        }
    }

    pub fn buffer(&self) -> &Bytes {
        &self.buffer
    }
}

/// Wire form of a `DocumentContent`, with the buffer base64-encoded.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentContentView {
    pub content: String,
    pub format: DocumentFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    pub original_format: bool,
    pub buffer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
}

impl From<&DocumentContent> for DocumentContentView {
    fn from(doc: &DocumentContent) -> Self {
        Self {
            content: doc.content.clone(),
            format: doc.format(),
            html: doc.html().map(String::from),
            original_format: doc.original_format,
            buffer: STANDARD.encode(&doc.buffer),
            page_count: doc.page_count(),
        }
    }
}

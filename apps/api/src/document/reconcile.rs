//! Output reconciliation — decides what bytes a download actually contains.

use bytes::Bytes;
use thiserror::Error;
use tracing::info;

use crate::document::format::DocumentFormat;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReconcileError {
    #[error("No content to download")]
    NothingToDownload,
}

/// A downloadable blob with its MIME type and suggested filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub bytes: Bytes,
    pub content_type: &'static str,
    pub filename: String,
}

/// Picks between re-attaching the original upload and exporting the edited text.
///
/// With `preserve_format` and an original buffer, the original bytes are emitted
/// unchanged and any text edits are NOT reflected. Otherwise the edited text is
/// exported as plain text, whatever the source format was.
pub fn reconcile(
    content: &str,
    format: DocumentFormat,
    original: Option<&Bytes>,
    preserve_format: bool,
) -> Result<DownloadArtifact, ReconcileError> {
    if content.is_empty() && original.is_none() {
        return Err(ReconcileError::NothingToDownload);
    }

    if let Some(buffer) = original.filter(|_| preserve_format) {
        info!("Re-attaching original {format} upload ({} bytes)", buffer.len());
        return Ok(DownloadArtifact {
            bytes: buffer.clone(),
            content_type: format.content_type(),
            filename: format!("document.{}", format.extension()),
        });
    }

    info!("Exporting edited text as plain text ({} bytes)", content.len());
    Ok(DownloadArtifact {
        bytes: Bytes::copy_from_slice(content.as_bytes()),
        content_type: DocumentFormat::Plain.content_type(),
        filename: "document.txt".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCX_MIME: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

    #[test]
    fn test_preserve_returns_original_bytes_regardless_of_edits() {
        let original = Bytes::from_static(b"PK\x03\x04original docx");
        let artifact = reconcile(
            "completely rewritten text",
            DocumentFormat::RichDoc,
            Some(&original),
            true,
        )
        .unwrap();
        assert_eq!(artifact.bytes, original);
        assert_eq!(artifact.content_type, DOCX_MIME);
        assert_eq!(artifact.filename, "document.docx");
    }

    #[test]
    fn test_no_preserve_exports_edited_text_as_plain() {
        let original = Bytes::from_static(b"%PDF-1.4");
        let artifact =
            reconcile("SUMMARY\nNew", DocumentFormat::Pdf, Some(&original), false).unwrap();
        assert_eq!(artifact.bytes.as_ref(), b"SUMMARY\nNew");
        assert_eq!(artifact.content_type, "text/plain");
        assert_eq!(artifact.filename, "document.txt");
    }

    #[test]
    fn test_preserve_without_buffer_falls_back_to_text() {
        let artifact = reconcile("edited", DocumentFormat::Pdf, None, true).unwrap();
        assert_eq!(artifact.bytes.as_ref(), b"edited");
        assert_eq!(artifact.content_type, "text/plain");
    }

    #[test]
    fn test_nothing_to_emit_fails() {
        assert_eq!(
            reconcile("", DocumentFormat::Plain, None, true),
            Err(ReconcileError::NothingToDownload)
        );
    }

    #[test]
    fn test_empty_text_with_buffer_still_preserves() {
        let original = Bytes::from_static(b"%PDF");
        let artifact = reconcile("", DocumentFormat::Pdf, Some(&original), true).unwrap();
        assert_eq!(artifact.bytes, original);
        assert_eq!(artifact.content_type, "application/pdf");
    }
}

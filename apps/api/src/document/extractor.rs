//! Content extraction — raw bytes plus a detected format in, `DocumentContent` out.
//!
//! Failures are atomic: no partially built document escapes, and the error
//! names the format whose stage failed.

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, info};

use crate::document::content::DocumentContent;
use crate::document::docx::docx_to_html;
use crate::document::format::DocumentFormat;
use crate::document::pdf::{PdfError, PdfTextExtractor};

#[derive(Debug, Error)]
pub enum ExtractFailure {
    #[error("text is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("invalid document archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("conversion task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("{0}")]
    Pdf(#[from] PdfError),
}

#[derive(Debug, Error)]
#[error("Failed to read {format} document: {source}")]
pub struct ExtractError {
    pub format: DocumentFormat,
    #[source]
    pub source: ExtractFailure,
}

/// Builds a `DocumentContent` from an upload. Only the PDF path leaves the process.
pub async fn extract(
    data: Bytes,
    format: DocumentFormat,
    pdf: &dyn PdfTextExtractor,
) -> Result<DocumentContent, ExtractError> {
    let result = match format {
        DocumentFormat::Plain => extract_plain(data),
        DocumentFormat::RichDoc => extract_rich_doc(data).await,
        DocumentFormat::Pdf => extract_pdf(data, pdf).await,
    };

    let document = result.map_err(|source| ExtractError { format, source })?;
    info!(
        "Extracted {format} document: {} chars, {} bytes retained",
        document.content().len(),
        document.buffer().len()
    );
    Ok(document)
}

fn extract_plain(data: Bytes) -> Result<DocumentContent, ExtractFailure> {
    let text = String::from_utf8(data.to_vec())?;
    Ok(DocumentContent::plain(text))
}

async fn extract_rich_doc(data: Bytes) -> Result<DocumentContent, ExtractFailure> {
    let original = data.clone();
    let html = tokio::task::spawn_blocking(move || docx_to_html(&data)).await??;
    debug!("Converted rich document to {} chars of HTML", html.len());
    Ok(DocumentContent::rich_doc(html, original))
}

async fn extract_pdf(
    data: Bytes,
    pdf: &dyn PdfTextExtractor,
) -> Result<DocumentContent, ExtractFailure> {
    let extracted = pdf.extract(data.clone()).await?;
    debug!("PDF extraction returned {} pages", extracted.page_count);
    Ok(DocumentContent::pdf(extracted.text, extracted.page_count, data))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::document::docx::tests::docx_fixture;
    use crate::document::pdf::PdfText;
    use async_trait::async_trait;

    /// Returns a fixed extraction result, or fails when `text` is `None`.
    pub(crate) struct StubPdf {
        pub text: Option<&'static str>,
        pub page_count: u32,
    }

    #[async_trait]
    impl PdfTextExtractor for StubPdf {
        async fn extract(&self, _data: Bytes) -> Result<PdfText, PdfError> {
            match self.text {
                Some(text) => Ok(PdfText {
                    text: text.to_string(),
                    page_count: self.page_count,
                }),
                None => Err(PdfError::Service {
                    status: 500,
                    message: "Failed to process PDF file".to_string(),
                }),
            }
        }
    }

    const NO_PDF: StubPdf = StubPdf {
        text: None,
        page_count: 0,
    };

    #[tokio::test]
    async fn test_plain_content_and_buffer_match_input() {
        let input = "SUMMARY\nDid X.\nSKILLS\nPython — ünïcode ✓";
        let doc = extract(Bytes::from(input), DocumentFormat::Plain, &NO_PDF)
            .await
            .unwrap();
        assert_eq!(doc.content().as_bytes(), input.as_bytes());
        assert_eq!(doc.buffer().as_ref(), input.as_bytes());
        assert!(doc.html().is_none());
        assert!(doc.page_count().is_none());
    }

    #[tokio::test]
    async fn test_plain_invalid_utf8_fails_with_format() {
        let err = extract(
            Bytes::from_static(&[0x66, 0xff, 0xfe]),
            DocumentFormat::Plain,
            &NO_PDF,
        )
        .await
        .unwrap_err();
        assert_eq!(err.format, DocumentFormat::Plain);
        assert!(matches!(err.source, ExtractFailure::Decode(_)));
        assert!(err.to_string().starts_with("Failed to read plain document"));
    }

    #[tokio::test]
    async fn test_rich_doc_content_is_html_and_buffer_is_original() {
        let data = Bytes::from(docx_fixture(
            r#"<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>"#,
        ));
        let doc = extract(data.clone(), DocumentFormat::RichDoc, &NO_PDF)
            .await
            .unwrap();
        assert_eq!(doc.content(), "<p>Jane Doe</p>");
        assert_eq!(doc.html(), Some("<p>Jane Doe</p>"));
        assert_eq!(doc.buffer(), &data);
    }

    #[tokio::test]
    async fn test_rich_doc_corrupt_archive_fails() {
        let err = extract(Bytes::from_static(b"nope"), DocumentFormat::RichDoc, &NO_PDF)
            .await
            .unwrap_err();
        assert_eq!(err.format, DocumentFormat::RichDoc);
    }

    #[tokio::test]
    async fn test_pdf_uses_collaborator_page_count() {
        let pdf = StubPdf {
            text: Some("Jane Doe\nEngineer"),
            page_count: 2,
        };
        let data = Bytes::from_static(b"%PDF-1.7 fake");
        let doc = extract(data.clone(), DocumentFormat::Pdf, &pdf).await.unwrap();
        assert_eq!(doc.format(), DocumentFormat::Pdf);
        assert_eq!(doc.page_count(), Some(2));
        assert_eq!(doc.content(), "Jane Doe\nEngineer");
        assert_eq!(doc.buffer(), &data);
    }

    #[tokio::test]
    async fn test_pdf_service_failure_is_wrapped() {
        let err = extract(Bytes::from_static(b"%PDF"), DocumentFormat::Pdf, &NO_PDF)
            .await
            .unwrap_err();
        assert_eq!(err.format, DocumentFormat::Pdf);
        assert!(err.to_string().contains("Failed to process PDF file"));
    }
}

// Document ingestion and re-emission.
// Detect → extract on the way in; reconcile on the way out.

pub mod content;
pub mod docx;
pub mod extractor;
pub mod format;
pub mod pdf;
pub mod reconcile;

pub use content::{DocumentContent, DocumentContentView};
pub use extractor::{extract, ExtractError};
pub use format::DocumentFormat;
pub use pdf::{HttpPdfExtractor, LocalPdfExtractor, PdfTextExtractor};

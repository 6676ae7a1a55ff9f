//! Format detection — classifies an upload by its file extension.

use serde::{Deserialize, Serialize};

/// Closed set of upload formats the service understands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentFormat {
    #[default]
    #[serde(alias = "txt")]
    Plain,
    #[serde(alias = "docx")]
    RichDoc,
    Pdf,
}

impl DocumentFormat {
    /// Classifies a filename by its lowercased extension.
    /// Unknown or missing extensions fall back to `Plain`.
    pub fn detect(filename: &str) -> Self {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "docx" => DocumentFormat::RichDoc,
            "pdf" => DocumentFormat::Pdf,
            _ => DocumentFormat::Plain,
        }
    }

    /// Parses a wire tag (`plain`, `richDoc`, `pdf` or the `txt`/`docx` extensions).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "plain" | "txt" => Some(DocumentFormat::Plain),
            "richDoc" | "docx" => Some(DocumentFormat::RichDoc),
            "pdf" => Some(DocumentFormat::Pdf),
            _ => None,
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            DocumentFormat::Plain => "text/plain",
            DocumentFormat::RichDoc => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            DocumentFormat::Pdf => "application/pdf",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Plain => "txt",
            DocumentFormat::RichDoc => "docx",
            DocumentFormat::Pdf => "pdf",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DocumentFormat::Plain => "plain",
            DocumentFormat::RichDoc => "richDoc",
            DocumentFormat::Pdf => "pdf",
        };
        f.write_str(name)
    }
}

/// Font choice offered to the presentation layer. Not used by any processing step.
#[derive(Debug, Clone, Serialize)]
pub struct FontOption {
    pub name: &'static str,
    pub value: &'static str,
}

pub const AVAILABLE_FONTS: &[FontOption] = &[
    FontOption { name: "Arial", value: "arial" },
    FontOption { name: "Times New Roman", value: "times-new-roman" },
    FontOption { name: "Calibri", value: "calibri" },
    FontOption { name: "Georgia", value: "georgia" },
    FontOption { name: "Helvetica", value: "helvetica" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_known_extensions() {
        assert_eq!(DocumentFormat::detect("resume.txt"), DocumentFormat::Plain);
        assert_eq!(DocumentFormat::detect("resume.docx"), DocumentFormat::RichDoc);
        assert_eq!(DocumentFormat::detect("resume.pdf"), DocumentFormat::Pdf);
    }

    #[test]
    fn test_detect_is_case_insensitive() {
        assert_eq!(DocumentFormat::detect("CV.PDF"), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::detect("CV.Docx"), DocumentFormat::RichDoc);
    }

    #[test]
    fn test_detect_unknown_or_missing_extension_is_plain() {
        assert_eq!(DocumentFormat::detect("resume.xyz"), DocumentFormat::Plain);
        assert_eq!(DocumentFormat::detect("resume"), DocumentFormat::Plain);
        assert_eq!(DocumentFormat::detect(""), DocumentFormat::Plain);
        assert_eq!(DocumentFormat::detect("archive.pdf.bak"), DocumentFormat::Plain);
    }

    #[test]
    fn test_content_type_table() {
        assert_eq!(DocumentFormat::Plain.content_type(), "text/plain");
        assert_eq!(DocumentFormat::Pdf.content_type(), "application/pdf");
        assert_eq!(
            DocumentFormat::RichDoc.content_type(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
    }

    #[test]
    fn test_from_tag_accepts_extensions_and_names() {
        assert_eq!(DocumentFormat::from_tag("docx"), Some(DocumentFormat::RichDoc));
        assert_eq!(DocumentFormat::from_tag("richDoc"), Some(DocumentFormat::RichDoc));
        assert_eq!(DocumentFormat::from_tag("txt"), Some(DocumentFormat::Plain));
        assert_eq!(DocumentFormat::from_tag("odt"), None);
    }

    #[test]
    fn test_serde_uses_camel_case_and_aliases() {
        let json = serde_json::to_string(&DocumentFormat::RichDoc).unwrap();
        assert_eq!(json, r#""richDoc""#);
        let parsed: DocumentFormat = serde_json::from_str(r#""docx""#).unwrap();
        assert_eq!(parsed, DocumentFormat::RichDoc);
    }
}

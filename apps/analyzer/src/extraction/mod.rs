//! Text Extractor — turns an uploaded resume (PDF or DOCX) into plain text.
//!
//! The format is derived from the declared file name only. Anything that is not
//! `.pdf` or `.docx` yields `Ok(None)`: the upload is silently ignored and no
//! downstream stage runs. Parse failures of a supported format are real errors.

pub mod docx;
pub mod pdf;

use std::path::Path;

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to read PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("failed to read DOCX: {0}")]
    Docx(#[from] docx_rs::ReaderError),
}

/// The two upload formats the pipeline understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Maps a declared file name to a format by its (case-insensitive) extension.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let extension = Path::new(file_name)
            .extension()?
            .to_str()?
            .to_ascii_lowercase();
        match extension.as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            _ => None,
        }
    }
}

/// An uploaded file as received from the form. Dropped after extraction.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub content: Bytes,
}

impl UploadedDocument {
    pub fn new(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    pub fn format(&self) -> Option<DocumentFormat> {
        DocumentFormat::from_file_name(&self.file_name)
    }
}

/// Extracts the full text of a document, or `None` for an unsupported format.
///
/// Never returns partially populated text: either every readable page/paragraph
/// joined with `\n`, or an error.
pub fn extract_text(document: &UploadedDocument) -> Result<Option<String>, ExtractionError> {
    let Some(format) = document.format() else {
        debug!(file_name = %document.file_name, "unsupported upload format, skipping extraction");
        return Ok(None);
    };

    let text = match format {
        DocumentFormat::Pdf => pdf::extract_text(&document.content)?,
        DocumentFormat::Docx => docx::extract_text(&document.content)?,
    };
    Ok(Some(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{docx_bytes, pdf_bytes};

    #[test]
    fn test_format_from_lowercase_extension() {
        assert_eq!(
            DocumentFormat::from_file_name("resume.pdf"),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(
            DocumentFormat::from_file_name("resume.docx"),
            Some(DocumentFormat::Docx)
        );
    }

    #[test]
    fn test_format_extension_is_case_insensitive() {
        assert_eq!(
            DocumentFormat::from_file_name("Jane Doe CV.PDF"),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(
            DocumentFormat::from_file_name("cv.DocX"),
            Some(DocumentFormat::Docx)
        );
    }

    #[test]
    fn test_format_uses_last_extension_only() {
        assert_eq!(
            DocumentFormat::from_file_name("resume.pdf.txt"),
            None
        );
        assert_eq!(
            DocumentFormat::from_file_name("resume.final.docx"),
            Some(DocumentFormat::Docx)
        );
    }

    #[test]
    fn test_format_rejects_unsupported_and_bare_names() {
        assert_eq!(DocumentFormat::from_file_name("resume.txt"), None);
        assert_eq!(DocumentFormat::from_file_name("resume.doc"), None);
        assert_eq!(DocumentFormat::from_file_name("resume"), None);
        assert_eq!(DocumentFormat::from_file_name(".pdf"), None);
    }

    #[test]
    fn test_txt_upload_yields_no_text() {
        let upload = UploadedDocument::new("resume.txt", "Education: BSc Computer Science");
        assert!(extract_text(&upload).unwrap().is_none());
    }

    #[test]
    fn test_unsupported_format_ignores_content_entirely() {
        // Content is a perfectly valid DOCX, but the declared name decides.
        let upload = UploadedDocument::new("resume.odt", docx_bytes(&["Education"]));
        assert!(extract_text(&upload).unwrap().is_none());
    }

    #[test]
    fn test_docx_dispatch() {
        let upload = UploadedDocument::new("resume.docx", docx_bytes(&["Skills", "Rust"]));
        let text = extract_text(&upload).unwrap().unwrap();
        assert_eq!(text, "Skills\nRust");
    }

    #[test]
    fn test_pdf_dispatch() {
        let upload = UploadedDocument::new("resume.pdf", pdf_bytes(&[Some("Experience")]));
        let text = extract_text(&upload).unwrap().unwrap();
        assert!(text.contains("Experience"), "got {text:?}");
    }

    #[test]
    fn test_corrupt_supported_file_is_an_error() {
        let upload = UploadedDocument::new("resume.pdf", "definitely not a pdf");
        assert!(matches!(
            extract_text(&upload),
            Err(ExtractionError::Pdf(_))
        ));

        let upload = UploadedDocument::new("resume.docx", "definitely not a zip");
        assert!(matches!(
            extract_text(&upload),
            Err(ExtractionError::Docx(_))
        ));
    }
}

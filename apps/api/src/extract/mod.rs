//! Plain-text extraction for uploaded CV files.

mod docx;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),
}

/// Supported upload formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
    Text,
}

impl FileKind {
    pub fn from_filename(filename: &str) -> Result<Self, ExtractError> {
        let ext = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => Ok(FileKind::Pdf),
            "docx" => Ok(FileKind::Docx),
            "txt" => Ok(FileKind::Text),
            "" => Err(ExtractError::UnsupportedType(filename.to_string())),
            other => Err(ExtractError::UnsupportedType(other.to_string())),
        }
    }
}

/// Extracts the text of an uploaded CV.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<String, ExtractError> {
    let kind = FileKind::from_filename(filename)?;
    let text = match kind {
        FileKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractError::Pdf(e.to_string()))?,
        FileKind::Docx => docx::extract_docx(bytes)?,
        FileKind::Text => String::from_utf8_lossy(bytes).into_owned(),
    };
    debug!(?kind, chars = text.len(), "Extracted upload text");
    Ok(text)
}

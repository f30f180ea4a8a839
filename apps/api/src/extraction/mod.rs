//! Text extraction — turns an uploaded file into one plain-text blob.
//!
//! The format is chosen from the declared file extension, never sniffed from
//! the bytes. Each adapter owns whatever scoped resource it needs (temp file,
//! in-memory cursor) and releases it before returning.

pub mod docx;
pub mod pdf;
pub mod spreadsheet;

use std::fmt;

use thiserror::Error;

/// Declared document formats the service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Xlsx,
    Txt,
}

impl DocumentFormat {
    /// Resolves the format from the last extension of `file_name`, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Result<Self, ExtractError> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            "xlsx" => Ok(Self::Xlsx),
            "txt" => Ok(Self::Txt),
            _ => Err(ExtractError::UnsupportedFormat { extension }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Xlsx => "xlsx",
            Self::Txt => "txt",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {extension:?}")]
    UnsupportedFormat { extension: String },

    #[error("Error extracting text from {format} file: {message}")]
    Extraction {
        format: DocumentFormat,
        message: String,
    },

    #[error("No text could be extracted")]
    EmptyDocument,

    #[error("Extraction task did not complete: {0}")]
    Interrupted(String),
}

impl ExtractError {
    pub(crate) fn extraction(format: DocumentFormat, err: impl fmt::Display) -> Self {
        Self::Extraction {
            format,
            message: err.to_string(),
        }
    }
}

/// Extracts plain text from `bytes`, dispatching on the extension of `file_name`.
///
/// An empty result is reported as `EmptyDocument`: a file that yields no text
/// is never worth sending to the model.
pub fn extract_text(file_name: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    let format = DocumentFormat::from_file_name(file_name)?;

    let text = match format {
        DocumentFormat::Pdf => pdf::extract_pdf_text(bytes)?,
        DocumentFormat::Docx => docx::extract_docx_text(bytes)?,
        DocumentFormat::Xlsx => spreadsheet::extract_xlsx_text(bytes)?,
        DocumentFormat::Txt => decode_plain_text(bytes)?,
    };

    if text.is_empty() {
        return Err(ExtractError::EmptyDocument);
    }

    tracing::debug!("Extracted {} chars from {file_name} ({format})", text.len());
    Ok(text)
}

fn decode_plain_text(bytes: &[u8]) -> Result<String, ExtractError> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| ExtractError::extraction(DocumentFormat::Txt, e))
}

//! Resume and transcript decoding
//!
//! Pure byte-to-text conversion: plain text decodes as UTF-8 with a
//! windows-1251 fallback; PDFs go through per-page text extraction.
//! File access lives in the infrastructure layer.

use std::path::PathBuf;

use encoding_rs::WINDOWS_1251;
use thiserror::Error;

/// Ingestion errors
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Unsupported resume format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("PDF text extraction failed: {0}")]
    Pdf(String),
}

/// Decode bytes as UTF-8, falling back to windows-1251
pub fn decode_text(data: &[u8]) -> String {
    match std::str::from_utf8(data) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (decoded, _, _) = WINDOWS_1251.decode(data);
            decoded.into_owned()
        }
    }
}

/// Extract per-page PDF text, discarding pages that yield no text
fn extract_pdf_text(data: &[u8]) -> Result<String, IngestError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(data)
        .map_err(|e| IngestError::Pdf(e.to_string()))?;
    let text = pages
        .iter()
        .map(|page| page.trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    Ok(text.trim().to_string())
}

/// Extract resume plain text from raw bytes with a format-hint suffix
/// (including the leading dot, e.g. ".pdf").
pub fn extract_resume_text_from_bytes(data: &[u8], suffix: &str) -> Result<String, IngestError> {
    match suffix.to_lowercase().as_str() {
        ".txt" | ".md" => Ok(decode_text(data).trim().to_string()),
        ".pdf" => extract_pdf_text(data),
        other => Err(IngestError::UnsupportedFormat(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn txt_bytes_pass_through_trimmed() {
        let text = extract_resume_text_from_bytes(b"hello", ".txt").unwrap();
        assert_eq!(text, "hello");

        let text = extract_resume_text_from_bytes(b"  spaced out  \n", ".md").unwrap();
        assert_eq!(text, "spaced out");
    }

    #[test]
    fn suffix_matching_is_case_insensitive() {
        let text = extract_resume_text_from_bytes(b"hello", ".TXT").unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn unknown_suffix_is_rejected() {
        let err = extract_resume_text_from_bytes(b"data", ".docx").unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFormat(ref s) if s == ".docx"));
    }

    #[test]
    fn windows_1251_fallback() {
        // "Привет" encoded as windows-1251, not valid UTF-8
        let data = [0xCF, 0xF0, 0xE8, 0xE2, 0xE5, 0xF2];
        let text = extract_resume_text_from_bytes(&data, ".txt").unwrap();
        assert_eq!(text, "Привет");
    }

    #[test]
    fn utf8_bytes_decode_directly() {
        assert_eq!(decode_text("Привет, мир".as_bytes()), "Привет, мир");
    }

    #[test]
    fn pdf_garbage_bytes_map_to_pdf_error() {
        let err = extract_resume_text_from_bytes(b"not a pdf at all", ".pdf").unwrap_err();
        assert!(matches!(err, IngestError::Pdf(_)));
    }

    #[test]
    fn pdf_truncated_header_maps_to_pdf_error() {
        let err = extract_resume_text_from_bytes(b"%PDF-1.7\n", ".pdf").unwrap_err();
        assert!(matches!(err, IngestError::Pdf(_)));
    }
}

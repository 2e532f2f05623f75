//! Resume and transcript file ingestion
//!
//! File access around the domain decoding: resume dispatch by extension
//! and transcript directory collection.

use std::path::{Path, PathBuf};

use crate::domain::ingest::{extract_resume_text_from_bytes, IngestError};

/// Extract resume plain text from an optional file path.
/// `None` passes through; a missing path is an error.
pub fn extract_resume_text_from_file(
    path: Option<&Path>,
) -> Result<Option<String>, IngestError> {
    let Some(path) = path else {
        return Ok(None);
    };
    if !path.exists() {
        return Err(IngestError::NotFound(path.to_path_buf()));
    }

    let suffix = path
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default();
    let data = std::fs::read(path).map_err(|e| IngestError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(Some(extract_resume_text_from_bytes(&data, &suffix)?))
}

/// Collect transcript files: a file is taken as-is, a directory yields its
/// `.txt` files sorted lexicographically.
pub fn collect_transcript_files(path: &Path) -> Result<Vec<PathBuf>, IngestError> {
    if path.is_dir() {
        let entries = std::fs::read_dir(path).map_err(|e| IngestError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| {
                p.extension()
                    .map(|ext| ext.eq_ignore_ascii_case("txt"))
                    .unwrap_or(false)
            })
            .collect();
        files.sort();
        Ok(files)
    } else if path.exists() {
        Ok(vec![path.to_path_buf()])
    } else {
        Err(IngestError::NotFound(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_resume_path_is_not_found() {
        let err =
            extract_resume_text_from_file(Some(Path::new("/no/such/resume.txt"))).unwrap_err();
        assert!(matches!(err, IngestError::NotFound(_)));
    }

    #[test]
    fn absent_resume_passes_through() {
        assert_eq!(extract_resume_text_from_file(None).unwrap(), None);
    }

    #[test]
    fn resume_txt_file_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("resume.txt");
        std::fs::write(&file, "  body  \n").unwrap();
        let text = extract_resume_text_from_file(Some(&file)).unwrap();
        assert_eq!(text.as_deref(), Some("body"));
    }

    #[test]
    fn resume_docx_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("resume.docx");
        std::fs::write(&file, "data").unwrap();
        let err = extract_resume_text_from_file(Some(&file)).unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFormat(ref s) if s == ".docx"));
    }

    #[test]
    fn resume_pdf_with_garbage_content_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("resume.pdf");
        std::fs::write(&file, b"garbage, not a pdf").unwrap();
        let err = extract_resume_text_from_file(Some(&file)).unwrap_err();
        assert!(matches!(err, IngestError::Pdf(_)));
    }

    #[test]
    fn collect_sorts_directory_txt_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("beta.txt"), "b").unwrap();
        std::fs::write(dir.path().join("alpha.txt"), "a").unwrap();
        std::fs::write(dir.path().join("notes.md"), "skip").unwrap();

        let files = collect_transcript_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["alpha.txt", "beta.txt"]);
    }

    #[test]
    fn collect_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("one.txt");
        std::fs::write(&file, "content").unwrap();

        let files = collect_transcript_files(&file).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn collect_missing_path_is_not_found() {
        let err = collect_transcript_files(Path::new("/no/such/dir")).unwrap_err();
        assert!(matches!(err, IngestError::NotFound(_)));
    }

    #[test]
    fn resume_windows_1251_file_decodes() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("resume.txt");
        // "Привет" encoded as windows-1251, not valid UTF-8
        std::fs::write(&file, [0xCF, 0xF0, 0xE8, 0xE2, 0xE5, 0xF2]).unwrap();
        let text = extract_resume_text_from_file(Some(&file)).unwrap();
        assert_eq!(text.as_deref(), Some("Привет"));
    }
}

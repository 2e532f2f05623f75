//! Q&A extraction use case

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::extraction::SystemPrompt;
use crate::domain::ingest::{decode_text, IngestError};
use crate::domain::report::qa_json_to_markdown;

use super::ports::{ExtractorError, StructuredExtractor};

/// Errors from the extraction use case
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Extractor(#[from] ExtractorError),

    #[error("Transcript is empty: {0}")]
    EmptyTranscript(PathBuf),

    #[error("Failed to write output: {0}")]
    PersistenceFailed(String),
}

/// Options shared across every transcript in a run
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// User-facing model alias
    pub model: String,
    /// Vacancy or position name, if known
    pub vacancy: Option<String>,
    /// Output language code, passed through to the prompt
    pub language: String,
    /// Directory for result JSON files, created if missing
    pub output_dir: PathBuf,
    /// Also write a markdown projection next to each JSON file
    pub write_markdown: bool,
}

/// Callbacks for stage reporting. Purely observational; every hook is
/// optional and a no-op by default.
#[derive(Default)]
pub struct ExtractCallbacks {
    /// Called with a stage label as the pipeline advances
    pub on_stage: Option<Box<dyn Fn(&str) + Send + Sync>>,
}

impl ExtractCallbacks {
    fn stage(&self, label: &str) {
        if let Some(ref cb) = self.on_stage {
            cb(label);
        }
    }
}

/// Q&A extraction use case: prompt building, structured LLM invocation,
/// and persistence of the result plus its usage sidecar.
pub struct QaExtractionUseCase<E: StructuredExtractor> {
    extractor: E,
}

impl<E: StructuredExtractor> QaExtractionUseCase<E> {
    /// Create a new use case instance
    pub fn new(extractor: E) -> Self {
        Self { extractor }
    }

    /// Run one extraction over already-loaded transcript text.
    ///
    /// Returns the path of the written JSON file. Nothing is written when
    /// the extractor fails; the failure propagates unchanged.
    pub async fn run(
        &self,
        transcript_text: &str,
        resume_text: Option<&str>,
        output_name: Option<&str>,
        options: &ExtractOptions,
        callbacks: &ExtractCallbacks,
    ) -> Result<PathBuf, ExtractError> {
        callbacks.stage("building prompt");
        let prompt = SystemPrompt::build(options.vacancy.as_deref(), &options.language);
        let user_message = compose_user_message(resume_text, transcript_text);

        callbacks.stage("extracting");
        let (extraction, usage) = self
            .extractor
            .extract(&prompt, &user_message, &options.model)
            .await?;

        callbacks.stage("writing");
        tokio::fs::create_dir_all(&options.output_dir)
            .await
            .map_err(|e| ExtractError::PersistenceFailed(e.to_string()))?;

        let filename = resolve_output_name(output_name, Utc::now());
        let json_path = options.output_dir.join(&filename);

        let mut json_text = serde_json::to_string_pretty(&extraction)
            .map_err(|e| ExtractError::PersistenceFailed(e.to_string()))?;
        json_text.push('\n');
        tokio::fs::write(&json_path, json_text)
            .await
            .map_err(|e| ExtractError::PersistenceFailed(e.to_string()))?;

        if !usage.is_empty() {
            let sidecar_path = sidecar_path_for(&json_path);
            let mut sidecar_text = serde_json::to_string_pretty(&usage.to_sidecar())
                .map_err(|e| ExtractError::PersistenceFailed(e.to_string()))?;
            sidecar_text.push('\n');
            tokio::fs::write(&sidecar_path, sidecar_text)
                .await
                .map_err(|e| ExtractError::PersistenceFailed(e.to_string()))?;
        }

        if options.write_markdown {
            let value = serde_json::to_value(&extraction)
                .map_err(|e| ExtractError::PersistenceFailed(e.to_string()))?;
            let markdown = qa_json_to_markdown(&value);
            tokio::fs::write(json_path.with_extension("md"), markdown)
                .await
                .map_err(|e| ExtractError::PersistenceFailed(e.to_string()))?;
        }

        Ok(json_path)
    }

    /// Run one extraction over a transcript file.
    ///
    /// Reads the transcript with legacy-encoding fallback, rejects blank
    /// transcripts before any LLM call, and writes to the deterministic
    /// name `<transcript_stem>_qa.json`.
    pub async fn run_for_file(
        &self,
        transcript_path: &Path,
        resume_text: Option<&str>,
        options: &ExtractOptions,
        callbacks: &ExtractCallbacks,
    ) -> Result<PathBuf, ExtractError> {
        let data = tokio::fs::read(transcript_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IngestError::NotFound(transcript_path.to_path_buf())
            } else {
                IngestError::Io {
                    path: transcript_path.to_path_buf(),
                    message: e.to_string(),
                }
            }
        })?;
        let transcript_text = decode_text(&data);
        let transcript_text = transcript_text.trim();
        if transcript_text.is_empty() {
            return Err(ExtractError::EmptyTranscript(transcript_path.to_path_buf()));
        }

        let stem = transcript_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "transcript".to_string());
        let output_name = format!("{}_qa.json", stem);

        self.run(
            transcript_text,
            resume_text,
            Some(&output_name),
            options,
            callbacks,
        )
        .await
    }

    /// Run extraction over several transcript files, strictly sequentially.
    ///
    /// One file's failure does not stop the remaining files; every result
    /// is returned so the caller can report each independently.
    pub async fn run_batch(
        &self,
        transcript_paths: &[PathBuf],
        resume_text: Option<&str>,
        options: &ExtractOptions,
        callbacks: &ExtractCallbacks,
    ) -> Vec<(PathBuf, Result<PathBuf, ExtractError>)> {
        let mut results = Vec::with_capacity(transcript_paths.len());
        for path in transcript_paths {
            let outcome = self
                .run_for_file(path, resume_text, options, callbacks)
                .await;
            results.push((path.clone(), outcome));
        }
        results
    }
}

/// Compose the user message with labeled resume and transcript sections
fn compose_user_message(resume_text: Option<&str>, transcript_text: &str) -> String {
    format!(
        "#RESUME: {}\n#INTERVIEW TRANSCRIPTION: {}",
        resume_text.unwrap_or(""),
        transcript_text
    )
}

/// Resolve the output filename: explicit name (".json" appended when
/// missing) or a UTC-timestamped default. Names are not deduplicated.
fn resolve_output_name(output_name: Option<&str>, now: DateTime<Utc>) -> String {
    match output_name {
        Some(name) if name.to_ascii_lowercase().ends_with(".json") => name.to_string(),
        Some(name) => format!("{}.json", name),
        None => format!("qa_extraction_{}.json", now.format("%Y%m%d_%H%M%S")),
    }
}

/// Usage sidecar path: same base name with `_usage.json` suffix
fn sidecar_path_for(json_path: &Path) -> PathBuf {
    let stem = json_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    json_path.with_file_name(format!("{}_usage.json", stem))
}

//! Main app runner for extraction mode

use std::env;
use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::application::{ExtractCallbacks, ExtractOptions, QaExtractionUseCase};
use crate::domain::config::AppConfig;
use crate::infrastructure::ingest::{collect_transcript_files, extract_resume_text_from_file};
use crate::infrastructure::{OpenAiExtractor, XdgConfigStore};

use super::args::RunOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run extraction over a transcript file or directory
pub async fn run_extraction(options: RunOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    // Load API key from config or environment
    let api_key = match get_api_key().await {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Ingest the optional resume once; it is reused across all transcripts
    let resume_text = match extract_resume_text_from_file(options.resume.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let transcript_files = match collect_transcript_files(&options.transcript) {
        Ok(files) => files,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };
    if transcript_files.is_empty() {
        presenter.error(&format!(
            "No transcript files found in {}",
            options.transcript.display()
        ));
        return ExitCode::from(EXIT_ERROR);
    }

    let use_case = QaExtractionUseCase::new(OpenAiExtractor::new(api_key));
    let extract_options = ExtractOptions {
        model: options.model.clone(),
        vacancy: options.vacancy.clone(),
        language: options.language.clone(),
        output_dir: options.output_dir.clone(),
        write_markdown: options.markdown,
    };

    // Sequential batch: one file's failure never stops the rest
    let mut failures = 0usize;
    for path in &transcript_files {
        let name = path.display().to_string();
        presenter.start_spinner(&name);

        let spinner = presenter.spinner_handle();
        let label = name.clone();
        let callbacks = ExtractCallbacks {
            on_stage: Some(Box::new(move |stage| {
                if let Some(ref s) = spinner {
                    s.set_message(format!("{}: {}", label, stage));
                }
            })),
        };

        match use_case
            .run_for_file(path, resume_text.as_deref(), &extract_options, &callbacks)
            .await
        {
            Ok(output_path) => {
                presenter.spinner_success(&format!("{} -> {}", name, output_path.display()));
            }
            Err(e) => {
                failures += 1;
                presenter.spinner_fail(&format!("{}: {}", name, e));
            }
        }
    }

    if failures == 0 {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        presenter.warn(&format!(
            "{} of {} transcripts failed",
            failures,
            transcript_files.len()
        ));
        ExitCode::from(EXIT_ERROR)
    }
}

/// Get API key from environment or config file
pub async fn get_api_key() -> Result<String, String> {
    // Check environment first
    if let Ok(key) = env::var("OPENAI_API_KEY") {
        if !key.is_empty() {
            return Ok(key);
        }
    }

    // Check config file
    let store = XdgConfigStore::new();
    let config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    config.api_key.ok_or_else(|| {
        "Missing API key. Set OPENAI_API_KEY environment variable or run 'interview-insights config set api_key <key>'".to_string()
    })
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_config = AppConfig {
        api_key: env::var("OPENAI_API_KEY").ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

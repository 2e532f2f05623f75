//! Interview Insights CLI entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use interview_insights::cli::{
    app::{load_merged_config, run_extraction, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands, RunOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use interview_insights::domain::config::AppConfig;
use interview_insights::domain::extraction::ModelAliasTable;
use interview_insights::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        api_key: None, // API key comes from env/file only
        model: cli.model.map(|m| m.alias().to_string()),
        language: cli.language.clone(),
        output_dir: cli
            .output_dir
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned()),
        markdown: if cli.markdown { Some(true) } else { None },
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    // A model must come from the CLI or the config file, and must resolve
    let model = match config.model.as_deref() {
        Some(model) => match ModelAliasTable::new().resolve(model) {
            Ok(_) => model.to_string(),
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        },
        None => {
            presenter.error("Missing model. Pass --model or run 'interview-insights config set model <alias>'");
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let Some(transcript) = cli.transcript else {
        presenter.error("Missing transcript path");
        return ExitCode::from(EXIT_USAGE_ERROR);
    };

    let options = RunOptions {
        vacancy: cli.vacancy,
        resume: cli.resume,
        language: config.language_or_default().to_string(),
        model,
        transcript,
        output_dir: PathBuf::from(config.output_dir_or_default()),
        markdown: config.markdown_or_default(),
    };

    run_extraction(options).await
}

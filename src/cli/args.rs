//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Interview Insights - structured Q&A extraction from interview transcripts
#[derive(Parser, Debug)]
#[command(name = "interview-insights")]
#[command(version = "1.0.0")]
#[command(about = "Extract interview Q&A insights from transcripts using OpenAI structured outputs")]
#[command(long_about = None)]
pub struct Cli {
    /// Vacancy or position name
    #[arg(long, value_name = "NAME")]
    pub vacancy: Option<String>,

    /// Path to resume file (.pdf/.txt/.md)
    #[arg(long, value_name = "PATH")]
    pub resume: Option<PathBuf>,

    /// Language for the extracted output
    #[arg(short = 'l', long, value_name = "LANG")]
    pub language: Option<String>,

    /// LLM model alias (required unless set in the config file)
    #[arg(short = 'm', long, value_name = "MODEL")]
    pub model: Option<ModelArg>,

    /// Path to a transcript file or a directory with .txt files
    #[arg(short = 't', long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Directory for QA JSON outputs
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Also write a markdown projection next to each JSON output
    #[arg(long)]
    pub markdown: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Model alias argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModelArg {
    #[value(name = "5.2")]
    Gpt52,
    #[value(name = "4.1")]
    Gpt41,
    #[value(name = "o4-mini")]
    O4Mini,
    #[value(name = "o3")]
    O3,
}

impl ModelArg {
    /// The user-facing alias string passed through to the extractor
    pub fn alias(&self) -> &'static str {
        match self {
            ModelArg::Gpt52 => "5.2",
            ModelArg::Gpt41 => "4.1",
            ModelArg::O4Mini => "o4-mini",
            ModelArg::O3 => "o3",
        }
    }
}

/// Parsed extraction run options
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub vacancy: Option<String>,
    pub resume: Option<PathBuf>,
    pub language: String,
    pub model: String,
    pub transcript: PathBuf,
    pub output_dir: PathBuf,
    pub markdown: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["api_key", "model", "language", "output_dir", "markdown"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

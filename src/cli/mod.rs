//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, and the main
//! application runner.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{run_extraction, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, ModelArg, RunOptions};
pub use config_cmd::handle_config_command;
pub use presenter::Presenter;

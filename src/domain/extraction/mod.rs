//! Extraction domain module

mod model_alias;
mod schema;
mod system_prompt;
mod usage;

pub use model_alias::{ModelAliasTable, SUPPORTED_ALIASES};
pub use schema::{QaExtraction, QaItem};
pub use system_prompt::SystemPrompt;
pub use usage::{TokenUsage, UsageSidecar};

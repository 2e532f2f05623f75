//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod extraction;
pub mod ingest;
pub mod report;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use extraction::{ModelAliasTable, QaExtraction, QaItem, SystemPrompt, TokenUsage};

//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub language: Option<String>,
    pub output_dir: Option<String>,
    pub markdown: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            model: None,
            language: Some("ru".to_string()),
            output_dir: Some("interview_insights".to_string()),
            markdown: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            model: other.model.or(self.model),
            language: other.language.or(self.language),
            output_dir: other.output_dir.or(self.output_dir),
            markdown: other.markdown.or(self.markdown),
        }
    }

    /// Get language, or "ru" if not set
    pub fn language_or_default(&self) -> &str {
        self.language.as_deref().unwrap_or("ru")
    }

    /// Get output directory, or the fixed relative default if not set
    pub fn output_dir_or_default(&self) -> &str {
        self.output_dir.as_deref().unwrap_or("interview_insights")
    }

    /// Get markdown setting, or false if not set
    pub fn markdown_or_default(&self) -> bool {
        self.markdown.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert!(config.api_key.is_none());
        assert!(config.model.is_none());
        assert_eq!(config.language, Some("ru".to_string()));
        assert_eq!(config.output_dir, Some("interview_insights".to_string()));
        assert_eq!(config.markdown, Some(false));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.api_key.is_none());
        assert!(config.model.is_none());
        assert!(config.language.is_none());
        assert!(config.output_dir.is_none());
        assert!(config.markdown.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            api_key: Some("base_key".to_string()),
            language: Some("ru".to_string()),
            model: Some("o3".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            api_key: Some("other_key".to_string()),
            language: None, // Should not override
            model: Some("o4-mini".to_string()),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.api_key, Some("other_key".to_string()));
        assert_eq!(merged.language, Some("ru".to_string())); // Kept from base
        assert_eq!(merged.model, Some("o4-mini".to_string()));
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig {
            api_key: Some("key".to_string()),
            markdown: Some(true),
            ..Default::default()
        };

        let merged = base.merge(AppConfig::empty());

        assert_eq!(merged.api_key, Some("key".to_string()));
        assert_eq!(merged.markdown, Some(true));
    }

    #[test]
    fn accessor_defaults() {
        let config = AppConfig::empty();
        assert_eq!(config.language_or_default(), "ru");
        assert_eq!(config.output_dir_or_default(), "interview_insights");
        assert!(!config.markdown_or_default());
    }
}

//! Model alias resolution

use std::collections::BTreeMap;

use crate::domain::error::UnsupportedModelError;

/// Canonical user-facing aliases, in the order they are advertised
pub const SUPPORTED_ALIASES: &[&str] = &["4.1", "5.2", "o3", "o4-mini"];

/// Mapping from user-facing alias to provider model identifier.
/// Long-form names are accepted as their own alias.
pub struct ModelAliasTable {
    aliases: BTreeMap<&'static str, &'static str>,
}

impl ModelAliasTable {
    pub fn new() -> Self {
        let mut aliases = BTreeMap::new();
        aliases.insert("5.2", "gpt-5.2");
        aliases.insert("4.1", "gpt-4.1");
        aliases.insert("o4-mini", "o4-mini");
        aliases.insert("o3", "o3");
        aliases.insert("gpt-5.2", "gpt-5.2");
        aliases.insert("gpt-4.1", "gpt-4.1");
        Self { aliases }
    }

    /// Resolve an alias to the provider model identifier.
    /// Unknown aliases fail before any network call is made.
    pub fn resolve(&self, model: &str) -> Result<&'static str, UnsupportedModelError> {
        self.aliases
            .get(model)
            .copied()
            .ok_or_else(|| UnsupportedModelError {
                input: model.to_string(),
                supported: SUPPORTED_ALIASES.join(", "),
            })
    }
}

impl Default for ModelAliasTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_short_aliases() {
        let table = ModelAliasTable::new();
        assert_eq!(table.resolve("5.2").unwrap(), "gpt-5.2");
        assert_eq!(table.resolve("4.1").unwrap(), "gpt-4.1");
        assert_eq!(table.resolve("o4-mini").unwrap(), "o4-mini");
        assert_eq!(table.resolve("o3").unwrap(), "o3");
    }

    #[test]
    fn resolves_long_names() {
        let table = ModelAliasTable::new();
        assert_eq!(table.resolve("gpt-5.2").unwrap(), "gpt-5.2");
        assert_eq!(table.resolve("gpt-4.1").unwrap(), "gpt-4.1");
    }

    #[test]
    fn rejects_unknown_alias_listing_supported() {
        let table = ModelAliasTable::new();
        let err = table.resolve("gpt-9").unwrap_err();
        assert_eq!(err.input, "gpt-9");
        assert_eq!(err.supported, "4.1, 5.2, o3, o4-mini");
        let message = err.to_string();
        assert!(message.contains("gpt-9"));
        assert!(message.contains("o4-mini"));
    }
}

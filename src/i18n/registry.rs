//! Language registry: Single source of truth for all supported languages.
//!
//! This module provides a centralized registry of the languages a report can
//! be rendered in. It uses a singleton pattern with `OnceLock` to ensure
//! thread-safe initialization and access.

use crate::i18n::strings::{LanguageStrings, ENGLISH_STRINGS, SPANISH_STRINGS};
use std::sync::OnceLock;

/// Configuration for a supported language.
///
/// Contains all metadata and settings for a specific language, including
/// its identifiers, names, number formatting convention and string table.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Numeric identifier used by callers that select languages by number
    pub id: i32,

    /// ISO 639-1 language code (e.g., "en", "es")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Spanish")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Español")
    pub native_name: &'static str,

    /// Character separating integer and fractional digits
    pub decimal_separator: char,

    /// Whether this is the fallback language (only one should be true)
    pub is_canonical: bool,

    /// Localized report strings
    pub strings: &'static LanguageStrings,
}

const ENGLISH: LanguageConfig = LanguageConfig {
    id: 2,
    code: "en",
    name: "English",
    native_name: "English",
    decimal_separator: '.',
    is_canonical: true,
    strings: &ENGLISH_STRINGS,
};

const SPANISH: LanguageConfig = LanguageConfig {
    id: 1,
    code: "es",
    name: "Spanish",
    native_name: "Español",
    decimal_separator: ',',
    is_canonical: false,
    strings: &SPANISH_STRINGS,
};

/// Global language registry singleton.
///
/// Initialized once on first access and immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its ISO 639-1 code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get a language configuration by its numeric id.
    pub fn get_by_id(&self, id: i32) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.id == id)
    }

    /// Get all languages.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the canonical language configuration.
    ///
    /// The canonical language is what unknown selections fall back to.
    /// English is returned if the table marks no language as canonical.
    pub fn canonical(&self) -> &LanguageConfig {
        self.languages
            .iter()
            .find(|lang| lang.is_canonical)
            .unwrap_or(&ENGLISH)
    }
}

/// Default language configurations: English (canonical) and Spanish.
fn default_languages() -> Vec<LanguageConfig> {
    vec![ENGLISH, SPANISH]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LanguageRegistry::get().get_by_code("en").unwrap();

        assert_eq!(config.id, 2);
        assert_eq!(config.name, "English");
        assert_eq!(config.decimal_separator, '.');
        assert!(config.is_canonical);
    }

    #[test]
    fn test_get_by_code_spanish() {
        let config = LanguageRegistry::get().get_by_code("es").unwrap();

        assert_eq!(config.id, 1);
        assert_eq!(config.native_name, "Español");
        assert_eq!(config.decimal_separator, ',');
        assert!(!config.is_canonical);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("fr").is_none());
    }

    #[test]
    fn test_get_by_id() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.get_by_id(1).unwrap().code, "es");
        assert_eq!(registry.get_by_id(2).unwrap().code, "en");
        assert!(registry.get_by_id(0).is_none());
        assert!(registry.get_by_id(-1).is_none());
        assert!(registry.get_by_id(3).is_none());
    }

    #[test]
    fn test_list_all_contains_english_and_spanish() {
        let all = LanguageRegistry::get().list_all();

        assert_eq!(all.len(), 2);
        assert!(all.iter().any(|lang| lang.code == "en"));
        assert!(all.iter().any(|lang| lang.code == "es"));
    }

    #[test]
    fn test_exactly_one_canonical() {
        let all = LanguageRegistry::get().list_all();
        assert_eq!(all.iter().filter(|lang| lang.is_canonical).count(), 1);
    }

    #[test]
    fn test_canonical_returns_english() {
        let canonical = LanguageRegistry::get().canonical();
        assert_eq!(canonical.code, "en");
    }

    #[test]
    fn test_canonical_falls_back_to_english_without_flag() {
        let registry = LanguageRegistry {
            languages: vec![SPANISH],
        };
        assert_eq!(registry.canonical().code, "en");
    }
}

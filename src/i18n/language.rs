//! Language type: the localization strategy used when rendering reports.
//!
//! A `Language` supplies every piece of localized text in a report
//! (vocabulary, pluralized shape names) and the number format.

use crate::i18n::number::format_decimal;
use crate::i18n::strings::LanguageStrings;
use crate::i18n::{LanguageConfig, LanguageRegistry};
use crate::shapes::ShapeKind;
use anyhow::{bail, Result};
use rust_decimal::Decimal;
use tracing::warn;

/// A validated language.
///
/// Only languages present in the registry can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "es")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const SPANISH: Language = Language { code: "es" };

    /// Numeric id selecting Spanish.
    pub const SPANISH_ID: i32 = 1;

    /// Numeric id selecting English.
    pub const ENGLISH_ID: i32 = 2;

    /// Select a language by numeric id.
    ///
    /// Unknown ids (including 0 and negatives) select the canonical
    /// language, English.
    ///
    /// # Example
    /// ```
    /// use shape_report::i18n::Language;
    ///
    /// assert_eq!(Language::from_id(Language::SPANISH_ID), Language::SPANISH);
    /// assert_eq!(Language::from_id(-7), Language::ENGLISH);
    /// ```
    pub fn from_id(id: i32) -> Language {
        let registry = LanguageRegistry::get();
        let config = registry
            .get_by_id(id)
            .unwrap_or_else(|| registry.canonical());
        Language { code: config.code }
    }

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is known
    /// * `Err` listing the supported codes otherwise
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) => Ok(Language { code: config.code }),
            None => {
                let supported: Vec<&str> =
                    registry.list_all().iter().map(|lang| lang.code).collect();
                bail!(
                    "Unknown language code: '{}' (supported: {})",
                    code,
                    supported.join(", ")
                )
            }
        }
    }

    /// Resolve a user-supplied language selection.
    ///
    /// Accepts a numeric id or an ISO code. Anything unrecognized falls back
    /// to the canonical language with a warning.
    pub fn parse_or_default(value: &str) -> Language {
        let value = value.trim();

        if let Ok(id) = value.parse::<i32>() {
            if LanguageRegistry::get().get_by_id(id).is_none() {
                warn!("Unknown language id {}, falling back to canonical language", id);
            }
            return Language::from_id(id);
        }

        match Language::from_code(&value.to_lowercase()) {
            Ok(language) => language,
            Err(e) => {
                warn!("{}, falling back to canonical language", e);
                Language::canonical()
            }
        }
    }

    /// Get the canonical (fallback) language.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// Falls back to the canonical configuration if the code is somehow
    /// absent, so lookups never fail.
    pub fn config(&self) -> &'static LanguageConfig {
        let registry = LanguageRegistry::get();
        registry
            .get_by_code(self.code)
            .unwrap_or_else(|| registry.canonical())
    }

    pub fn id(&self) -> i32 {
        self.config().id
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    pub fn decimal_separator(&self) -> char {
        self.config().decimal_separator
    }

    pub fn strings(&self) -> &'static LanguageStrings {
        self.config().strings
    }

    // ==================== Report Vocabulary ====================

    pub fn report_header(&self) -> &'static str {
        self.strings().report_header
    }

    pub fn empty_list_message(&self) -> &'static str {
        self.strings().empty_list_message
    }

    /// Name of a shape kind, pluralized for `count`.
    pub fn shape_name(&self, kind: ShapeKind, count: usize) -> &'static str {
        let strings = self.strings();
        let plural = match kind {
            ShapeKind::Square => strings.square,
            ShapeKind::Circle => strings.circle,
            ShapeKind::EquilateralTriangle => strings.triangle,
            ShapeKind::Trapezoid => strings.trapezoid,
        };
        plural.select(count)
    }

    /// Word for "shapes" in the totals line.
    ///
    /// The count is accepted for symmetry with `shape_name` but the word is
    /// the same for every count.
    pub fn shapes_word(&self, _count: usize) -> &'static str {
        self.strings().shapes_word
    }

    pub fn area_word(&self) -> &'static str {
        self.strings().area_word
    }

    pub fn perimeter_word(&self) -> &'static str {
        self.strings().perimeter_word
    }

    /// Format a measurement using this language's decimal separator.
    pub fn format_number(&self, value: Decimal) -> String {
        format_decimal(value, self.decimal_separator())
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

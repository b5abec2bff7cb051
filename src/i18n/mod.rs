//! Internationalization (i18n) module for localized reports.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages and their metadata
//! - `language`: Type-safe `Language` handle used as the report's localization strategy
//! - `strings`: Localized vocabulary tables
//! - `number`: Locale number formatting
//!
//! # Example
//!
//! ```
//! use shape_report::i18n::Language;
//!
//! let spanish = Language::from_id(Language::SPANISH_ID);
//! assert_eq!(spanish.report_header(), "Reporte de Formas");
//! ```

mod language;
mod number;
mod registry;
mod strings;

pub use language::Language;
pub use number::format_decimal;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{LanguageStrings, Plural, ENGLISH_STRINGS, SPANISH_STRINGS};

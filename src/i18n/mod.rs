//! Internationalization (i18n) module for multi-language support.
//!
//! This module owns everything language-related: the set of supported
//! languages, their layout direction, the translation tables and the
//! `LocalizationEngine` that holds the active language.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages and their metadata
//! - `language`: `Language` enum and the `Direction` derived from it
//! - `strings`: Compile-time complete translation tables
//! - `engine`: Active language state, persistence and key resolution
//! - `metrics`: Lookup hit/miss counters
//!
//! # Example
//!
//! ```rust,ignore
//! use impact_society_client::i18n::{Language, LocalizationEngine};
//!
//! let engine = LocalizationEngine::new(storage, document);
//! engine.initialize();
//! engine.change_language("fr");
//! assert_eq!(engine.translate("home"), "Accueil");
//! ```

mod engine;
mod language;
mod metrics;
mod registry;
mod strings;

pub use engine::{LocaleState, LocalizationEngine};
pub use language::{direction, Direction, Language, RTL_LANGUAGE_CODE};
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{LanguageStrings, ARABIC_STRINGS, ENGLISH_STRINGS, FRENCH_STRINGS};

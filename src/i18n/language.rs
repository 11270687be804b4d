//! Language type: closed, validated language representation.
//!
//! This module provides the `Language` enum and its text `Direction`. The
//! direction is always derived from the language and can never be set on its
//! own.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::Serialize;
use std::fmt;

/// Language code of the only right-to-left language the site ships.
pub const RTL_LANGUAGE_CODE: &str = "ar";

/// Layout direction of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Value written to the document `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction for any language code.
///
/// Total over all strings: unknown codes are laid out left-to-right.
pub fn direction(code: &str) -> Direction {
    if code == RTL_LANGUAGE_CODE {
        Direction::Rtl
    } else {
        Direction::Ltr
    }
}

/// A supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Every language the site ships, in switcher order.
    pub const ALL: [Language; 3] = [Language::Arabic, Language::French, Language::English];

    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "ar", "fr")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered and enabled
    /// * `Err` if the code is unknown or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(config.language),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The language used when nothing was persisted.
    pub fn default_language() -> Language {
        LanguageRegistry::get().default_language().language
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::French => "fr",
            Language::English => "en",
        }
    }

    /// Layout direction for this language.
    pub fn direction(&self) -> Direction {
        direction(self.code())
    }

    /// Get the full language configuration from the registry.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get().config_for(*self)
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language (e.g., "العربية", "Français").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

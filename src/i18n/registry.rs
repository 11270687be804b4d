//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is immutable data built once on first access. It holds no
//! per-session state; the active language lives in the `LocalizationEngine`.

use crate::i18n::{Direction, Language};
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// The language this entry describes
    pub language: Language,

    /// ISO 639-1 language code (e.g., "ar", "fr", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "Arabic", "French")
    pub name: &'static str,

    /// Native name shown in the language switcher (e.g., "العربية", "Français")
    pub native_name: &'static str,

    /// Whether this is the language used when nothing was persisted (only one should be true)
    pub is_default: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

impl LanguageConfig {
    pub fn direction(&self) -> Direction {
        self.language.direction()
    }
}

/// Registry of all supported languages.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get the configuration of a language.
    pub fn config_for(&self, language: Language) -> &LanguageConfig {
        // Every Language variant has an entry; checked by test_every_language_is_registered.
        self.languages
            .iter()
            .find(|config| config.language == language)
            .unwrap_or(&self.languages[0])
    }

    /// Get all enabled languages, in switcher order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if no default language is found or if multiple default
    /// languages are defined (this indicates a configuration error).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self.languages.iter().filter(|lang| lang.is_default).collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }
}

/// Arabic first: it is the site's default and the switcher lists it first.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            language: Language::Arabic,
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            language: Language::French,
            code: "fr",
            name: "French",
            native_name: "Français",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            language: Language::English,
            code: "en",
            name: "English",
            native_name: "English",
            is_default: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_every_language_is_registered() {
        let registry = LanguageRegistry::get();
        for language in Language::ALL {
            let config = registry.config_for(language);
            assert_eq!(config.language, language);
            assert_eq!(config.code, language.code());
        }
    }

    #[test]
    fn test_get_by_code_arabic() {
        let config = LanguageRegistry::get().get_by_code("ar").expect("registered");
        assert_eq!(config.name, "Arabic");
        assert_eq!(config.native_name, "العربية");
        assert_eq!(config.direction(), Direction::Rtl);
        assert!(config.is_default);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("es").is_none());
    }

    #[test]
    fn test_list_enabled_in_switcher_order() {
        let codes: Vec<_> = LanguageRegistry::get()
            .list_enabled()
            .iter()
            .map(|config| config.code)
            .collect();
        assert_eq!(codes, vec!["ar", "fr", "en"]);
    }

    #[test]
    fn test_default_language_is_arabic() {
        let default = LanguageRegistry::get().default_language();
        assert_eq!(default.language, Language::Arabic);
    }

    #[test]
    fn test_only_arabic_is_rtl() {
        let rtl: Vec<_> = LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .filter(|config| config.direction() == Direction::Rtl)
            .map(|config| config.code)
            .collect();
        assert_eq!(rtl, vec!["ar"]);
    }
}

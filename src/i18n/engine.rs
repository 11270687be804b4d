//! Localization engine: the process-wide language, its direction, and key
//! resolution.
//!
//! The engine is constructed once by the application context and shared by
//! reference. Presentation code reads the current `LocaleState` (or subscribes
//! to changes) and calls `change_language`; nothing else mutates it.

use crate::document::{DocumentEnvironment, DIR_ATTRIBUTE, LANG_ATTRIBUTE};
use crate::i18n::{Direction, Language, LanguageConfig, LanguageRegistry, LanguageStrings, TranslationMetrics};
use crate::storage::{KeyValueStore, LANGUAGE_KEY};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// The active language and its layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocaleState {
    language: Language,
    direction: Direction,
}

impl LocaleState {
    /// The only constructor: direction is always derived from the language.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            direction: language.direction(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

pub struct LocalizationEngine {
    state: watch::Sender<LocaleState>,
    default_language: Language,
    storage: Arc<dyn KeyValueStore>,
    document: Arc<dyn DocumentEnvironment>,
    metrics: TranslationMetrics,
}

impl LocalizationEngine {
    /// Engine using the registry's default language (Arabic).
    pub fn new(storage: Arc<dyn KeyValueStore>, document: Arc<dyn DocumentEnvironment>) -> Self {
        Self::with_default_language(Language::default_language(), storage, document)
    }

    pub fn with_default_language(
        default_language: Language,
        storage: Arc<dyn KeyValueStore>,
        document: Arc<dyn DocumentEnvironment>,
    ) -> Self {
        let (state, _) = watch::channel(LocaleState::new(default_language));
        Self {
            state,
            default_language,
            storage,
            document,
            metrics: TranslationMetrics::new(),
        }
    }

    /// Restore the persisted language (or the default) and apply it.
    pub fn initialize(&self) -> Language {
        match self.storage.get(LANGUAGE_KEY) {
            Some(code) => {
                debug!("Restoring persisted language '{}'", code);
                self.change_language(&code)
            }
            None => self.change_language(self.default_language.code()),
        }
    }

    /// Switch the active language.
    ///
    /// Unknown codes fall back to the default language. The resolved code is
    /// persisted and written to the document's `dir`/`lang` attributes.
    pub fn change_language(&self, code: &str) -> Language {
        let language = match Language::from_code(code) {
            Ok(language) => language,
            Err(e) => {
                warn!("{}; falling back to '{}'", e, self.default_language);
                self.default_language
            }
        };

        let locale = LocaleState::new(language);
        self.state.send_replace(locale);

        if let Err(e) = self.storage.set(LANGUAGE_KEY, language.code()) {
            warn!("Failed to persist language '{}': {}", language, e);
        }

        self.document
            .set_attribute(DIR_ATTRIBUTE, locale.direction().as_str());
        self.document.set_attribute(LANG_ATTRIBUTE, language.code());
        self.metrics.record_language_change();

        info!("Language set to {} ({})", language, locale.direction());
        language
    }

    /// Resolve a key in the active language.
    ///
    /// A key missing from the table comes back verbatim so the gap is visible
    /// on screen.
    pub fn translate(&self, key: &str) -> String {
        let language = self.language();
        match LanguageStrings::for_language(language).lookup(key) {
            Some(text) => {
                self.metrics.record_hit();
                text.to_string()
            }
            None => {
                self.metrics.record_miss();
                debug!("Missing translation for key '{}' in '{}'", key, language);
                key.to_string()
            }
        }
    }

    pub fn state(&self) -> LocaleState {
        *self.state.borrow()
    }

    pub fn language(&self) -> Language {
        self.state.borrow().language()
    }

    pub fn direction(&self) -> Direction {
        self.state.borrow().direction()
    }

    /// Receive every locale change from now on.
    pub fn subscribe(&self) -> watch::Receiver<LocaleState> {
        self.state.subscribe()
    }

    /// Languages offered by the language switcher.
    pub fn available_languages(&self) -> Vec<&'static LanguageConfig> {
        LanguageRegistry::get().list_enabled()
    }

    pub fn metrics(&self) -> &TranslationMetrics {
        &self.metrics
    }
}

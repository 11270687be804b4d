//! Document environment the localization engine writes layout hints into.
//!
//! A browser host maps this onto the root element's `dir` and `lang`
//! attributes. `DocumentAttributes` keeps them in memory for headless hosts
//! and tests.

use std::collections::HashMap;
use std::sync::RwLock;

pub const DIR_ATTRIBUTE: &str = "dir";
pub const LANG_ATTRIBUTE: &str = "lang";

/// Sink for document-level attributes.
pub trait DocumentEnvironment: Send + Sync {
    fn set_attribute(&self, name: &str, value: &str);
}

/// In-memory document root.
#[derive(Debug, Default)]
pub struct DocumentAttributes {
    attributes: RwLock<HashMap<String, String>>,
}

impl DocumentAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.attributes
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(name)
            .cloned()
    }

    pub fn dir(&self) -> Option<String> {
        self.get(DIR_ATTRIBUTE)
    }

    pub fn lang(&self) -> Option<String> {
        self.get(LANG_ATTRIBUTE)
    }
}

impl DocumentEnvironment for DocumentAttributes {
    fn set_attribute(&self, name: &str, value: &str) {
        self.attributes
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(name.to_string(), value.to_string());
    }
}

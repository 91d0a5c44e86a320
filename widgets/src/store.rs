//! Key/value preference storage.
//!
//! The browser implementation lives in the `site` crate over
//! `window.localStorage`; [`MemoryStore`] backs tests and non-browser builds.

use std::collections::HashMap;

use crate::error::WidgetError;

pub trait PreferenceStore {
    /// Read `key`. Unavailable storage reads as absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `key`.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Storage`] when the backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), WidgetError>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_owned(), value.to_owned());
        Self { entries }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), WidgetError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

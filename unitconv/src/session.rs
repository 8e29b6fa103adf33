//! Session state owned by the caller
//!
//! A `Session` is created when the user starts and handed by `&mut` to each
//! handler. Nothing here is global.

use serde::Serialize;
use unitconv_translate::Language;

/// Append-only list of formatted conversions
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: String) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One user's interactive session
#[derive(Debug, Clone, Default)]
pub struct Session {
    history: History,
    language: Language,
}

impl Session {
    pub fn new(language: Language) -> Self {
        Self { history: History::new(), language }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub(crate) fn record(&mut self, entry: String) {
        self.history.push(entry);
    }
}

//! Translator implementations
//!
//! `GoogleTranslator` talks to the public Google translate endpoint with a
//! blocking client. `Passthrough` returns the text as-is. `CachingTranslator`
//! remembers successful translations for the life of the session.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;
use thiserror::Error;

use crate::Language;

pub const DEFAULT_TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("translation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected translation response: {0}")]
    Malformed(String),

    #[error("translation service unavailable: {0}")]
    Unavailable(String),
}

/// Translates UI text into a target language
pub trait Translator {
    fn translate(&self, text: &str, target: Language) -> Result<String, TranslateError>;
}

impl<T: Translator + ?Sized> Translator for Box<T> {
    fn translate(&self, text: &str, target: Language) -> Result<String, TranslateError> {
        (**self).translate(text, target)
    }
}

/// Returns every text unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Translator for Passthrough {
    fn translate(&self, text: &str, _target: Language) -> Result<String, TranslateError> {
        Ok(text.to_string())
    }
}

/// Connection settings for [`GoogleTranslator`]
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_TRANSLATE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Google translate client; source language is auto-detected
pub struct GoogleTranslator {
    client: Client,
    base_url: String,
}

impl GoogleTranslator {
    pub fn new(config: TranslatorConfig) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, base_url: config.base_url })
    }
}

impl Translator for GoogleTranslator {
    fn translate(&self, text: &str, target: Language) -> Result<String, TranslateError> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let response = self.client
            .get(&self.base_url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target.code()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Unavailable(format!("HTTP {}", status)));
        }

        let payload: Value = response.json()?;
        parse_response(&payload)
    }
}

/// Join the translated segments of a `translate_a/single` reply.
///
/// The reply is positional JSON: `[[["Hola", "Hello", ...], ...], null, "en", ...]`.
fn parse_response(payload: &Value) -> Result<String, TranslateError> {
    let segments = payload.get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::Malformed("missing segment list".to_string()))?;

    let text: String = segments.iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if text.is_empty() {
        return Err(TranslateError::Malformed("no translated text".to_string()));
    }
    Ok(text)
}

/// Memoizes successful translations; failures are retried next time
pub struct CachingTranslator<T> {
    inner: T,
    cache: RefCell<HashMap<(Language, String), String>>,
}

impl<T: Translator> CachingTranslator<T> {
    pub fn new(inner: T) -> Self {
        Self { inner, cache: RefCell::new(HashMap::new()) }
    }

    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<T: Translator> Translator for CachingTranslator<T> {
    fn translate(&self, text: &str, target: Language) -> Result<String, TranslateError> {
        let key = (target, text.to_string());
        if let Some(hit) = self.cache.borrow().get(&key) {
            return Ok(hit.clone());
        }

        let translated = self.inner.translate(text, target)?;
        self.cache.borrow_mut().insert(key, translated.clone());
        Ok(translated)
    }
}

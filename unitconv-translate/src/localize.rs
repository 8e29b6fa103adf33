//! Translation with fallback to the original text

use serde::Serialize;
use unitconv_core::UcError;

use crate::{Language, Translator};

/// A piece of UI text in the session language
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Localized {
    pub text: String,
    /// Set when translation failed and `text` is the untranslated original
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<UcError>,
}

impl Localized {
    pub fn original(text: &str) -> Self {
        Self { text: text.to_string(), notice: None }
    }

    pub fn fell_back(&self) -> bool {
        self.notice.is_some()
    }
}

/// Translate `text` into `language`, falling back to `text` on any failure.
///
/// English is the source language of every label and is never sent out.
pub fn localize<T: Translator + ?Sized>(translator: &T, text: &str, language: Language) -> Localized {
    if language == Language::English {
        return Localized::original(text);
    }

    match translator.translate(text, language) {
        Ok(translated) => Localized { text: translated, notice: None },
        Err(e) => {
            tracing::warn!(language = language.code(), error = %e, "translation failed, using original text");
            Localized {
                text: text.to_string(),
                notice: Some(UcError::translation_unavailable(e.to_string())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TranslateError;
    use unitconv_core::{codes, Severity};

    struct Upper;

    impl Translator for Upper {
        fn translate(&self, text: &str, _target: Language) -> Result<String, TranslateError> {
            Ok(text.to_uppercase())
        }
    }

    struct Down;

    impl Translator for Down {
        fn translate(&self, _text: &str, _target: Language) -> Result<String, TranslateError> {
            Err(TranslateError::Unavailable("HTTP 503".to_string()))
        }
    }

    #[test]
    fn test_translates() {
        let l = localize(&Upper, "Result", Language::German);
        assert_eq!(l.text, "RESULT");
        assert!(!l.fell_back());
    }

    #[test]
    fn test_english_is_not_translated() {
        let l = localize(&Upper, "Result", Language::English);
        assert_eq!(l.text, "Result");
    }

    #[test]
    fn test_failure_falls_back_with_notice() {
        let l = localize(&Down, "Conversion History", Language::Urdu);
        assert_eq!(l.text, "Conversion History");
        let notice = l.notice.unwrap();
        assert_eq!(notice.code, codes::TRANSLATION_UNAVAILABLE);
        assert_eq!(notice.severity, Severity::Notice);
        assert!(notice.message.contains("503"));
    }

    #[test]
    fn test_works_through_trait_object() {
        let boxed: Box<dyn Translator> = Box::new(Upper);
        assert_eq!(localize(&boxed, "to", Language::French).text, "TO");
        assert_eq!(localize(boxed.as_ref(), "to", Language::French).text, "TO");
    }
}

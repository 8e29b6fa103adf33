//! Supported interface languages

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Interface language, serialized as its ISO 639-1 code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ur")]
    Urdu,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
}

impl Language {
    /// ISO 639-1 code sent to the translation service
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Urdu => "ur",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::iter().find(|l| l.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Accept either a code ("es") or a name ("Spanish")
    pub fn parse_any(s: &str) -> Option<Language> {
        Language::from_code(s).or_else(|| s.trim().parse().ok())
    }

    pub fn all() -> impl Iterator<Item = Language> {
        Language::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let codes: Vec<&str> = Language::all().map(Language::code).collect();
        assert_eq!(codes, ["en", "ur", "es", "fr", "de"]);
    }

    #[test]
    fn test_parse_any() {
        assert_eq!(Language::parse_any("es"), Some(Language::Spanish));
        assert_eq!(Language::parse_any("DE"), Some(Language::German));
        assert_eq!(Language::parse_any("urdu"), Some(Language::Urdu));
        assert_eq!(Language::parse_any("French"), Some(Language::French));
        assert_eq!(Language::parse_any("klingon"), None);
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_serde_uses_code() {
        assert_eq!(serde_json::to_string(&Language::Urdu).unwrap(), "\"ur\"");
        let lang: Language = serde_json::from_str("\"fr\"").unwrap();
        assert_eq!(lang, Language::French);
    }
}

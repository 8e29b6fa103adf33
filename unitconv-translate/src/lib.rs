//! unitconv Translate - UI text in the user's language
//!
//! Translation is a best-effort collaborator: a failed call never reaches the
//! user as an error, only as the original English text plus a notice.

mod language;
mod translator;
mod localize;

pub use language::Language;
pub use translator::{
    Translator, TranslateError, TranslatorConfig, GoogleTranslator, Passthrough, CachingTranslator,
    DEFAULT_TRANSLATE_URL, DEFAULT_TIMEOUT,
};
pub use localize::{localize, Localized};

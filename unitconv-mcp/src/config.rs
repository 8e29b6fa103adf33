//! Start-up configuration from the environment

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use unitconv::{Language, Settings};
use unitconv_translate::{TranslatorConfig, DEFAULT_TIMEOUT, DEFAULT_TRANSLATE_URL};

#[derive(Debug, Clone)]
pub struct Config {
    pub language: Language,
    pub export_path: PathBuf,
    pub translate_url: String,
    pub translate_timeout: Duration,
    /// Skip the translation service entirely
    pub offline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            export_path: Settings::default().export_path,
            translate_url: DEFAULT_TRANSLATE_URL.to_string(),
            translate_timeout: DEFAULT_TIMEOUT,
            offline: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparseable values keep their defaults
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Config::default();

        if let Some(lang) = lookup("UNITCONV_LANG") {
            match Language::parse_any(&lang) {
                Some(language) => config.language = language,
                None => tracing::warn!(value = %lang, "unsupported UNITCONV_LANG, using English"),
            }
        }
        if let Some(path) = lookup("UNITCONV_EXPORT_PATH").filter(|p| !p.trim().is_empty()) {
            config.export_path = PathBuf::from(path);
        }
        if let Some(url) = lookup("UNITCONV_TRANSLATE_URL").filter(|u| !u.trim().is_empty()) {
            config.translate_url = url;
        }
        if let Some(ms) = lookup("UNITCONV_TRANSLATE_TIMEOUT_MS") {
            match ms.trim().parse::<u64>() {
                Ok(ms) => config.translate_timeout = Duration::from_millis(ms),
                Err(_) => tracing::warn!(value = %ms, "invalid UNITCONV_TRANSLATE_TIMEOUT_MS"),
            }
        }
        if let Some(flag) = lookup("UNITCONV_OFFLINE") {
            config.offline = matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on");
        }

        config
    }

    pub fn settings(&self) -> Settings {
        Settings { export_path: self.export_path.clone() }
    }

    pub fn translator_config(&self) -> TranslatorConfig {
        TranslatorConfig {
            base_url: self.translate_url.clone(),
            timeout: self.translate_timeout,
        }
    }
}

//! Translation loader and i18n management
//!
//! This module loads the JSON resource bundles (one file per language,
//! keys grouped by component namespace) and resolves dotted keys with
//! `{name}` interpolation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use serde_json::{Map, Value};
use tokio::fs;
use tracing::{debug, error, info, warn};
use crate::config::I18nConfig;
use crate::utils::errors::{KidSpotsError, Result};

/// Main internationalization manager
#[derive(Debug, Clone)]
pub struct I18n {
    /// Loaded bundles by language code
    translations: HashMap<String, Map<String, Value>>,
    default_language: String,
    supported_languages: Vec<String>,
    translations_dir: PathBuf,
}

/// Interpolation values for a message
pub type TranslationParams = HashMap<String, String>;

/// Build interpolation values from key/value pairs
pub fn params<K, V, I>(pairs: I) -> TranslationParams
where
    K: Into<String>,
    V: ToString,
    I: IntoIterator<Item = (K, V)>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v.to_string())).collect()
}

impl I18n {
    pub fn new(config: &I18nConfig) -> Self {
        Self {
            translations: HashMap::new(),
            default_language: config.default_language.clone(),
            supported_languages: config.supported_languages.clone(),
            translations_dir: PathBuf::from(&config.translations_dir),
        }
    }

    /// Load `<translations_dir>/<lang>.json` for every supported language
    ///
    /// A missing or broken bundle is fatal only for the default language.
    pub async fn load_translations(&mut self) -> Result<()> {
        let dir = self.translations_dir.clone();
        if !dir.exists() {
            return Err(KidSpotsError::Config(format!(
                "Translations directory not found: {}",
                dir.display()
            )));
        }

        let supported_languages = self.supported_languages.clone();
        for lang_code in &supported_languages {
            let file_path = dir.join(format!("{}.json", lang_code));

            if file_path.exists() {
                match self.load_language_file(&file_path, lang_code).await {
                    Ok(_) => info!("Loaded translations for language: {}", lang_code),
                    Err(e) => {
                        error!("Failed to load translations for {}: {}", lang_code, e);
                        if lang_code == &self.default_language {
                            return Err(KidSpotsError::Config(format!(
                                "Failed to load default language translations: {}",
                                e
                            )));
                        }
                    }
                }
            } else {
                warn!("Translation file not found: {}", file_path.display());
                if lang_code == &self.default_language {
                    return Err(KidSpotsError::Config(format!(
                        "Default language translation file not found: {}",
                        file_path.display()
                    )));
                }
            }
        }

        Ok(())
    }

    async fn load_language_file(&mut self, file_path: &Path, lang_code: &str) -> Result<()> {
        let content = fs::read_to_string(file_path).await?;
        self.load_bundle(lang_code, &content)
    }

    /// Install a bundle from JSON text, replacing any previous one
    pub fn load_bundle(&mut self, lang_code: &str, content: &str) -> Result<()> {
        match serde_json::from_str(content)? {
            Value::Object(map) => {
                debug!("Loaded {} translation keys for {}", count_keys(&map), lang_code);
                self.translations.insert(lang_code.to_string(), map);
                Ok(())
            }
            _ => Err(KidSpotsError::Config(format!(
                "Invalid translation file format for {}",
                lang_code
            ))),
        }
    }

    /// Translate a dotted key such as `Footer.copyright`
    ///
    /// Falls back to the default language, then to the key itself.
    pub fn t(&self, key: &str, lang: &str, params: Option<&TranslationParams>) -> String {
        let effective_lang = self.effective_language(lang);

        let text = self
            .lookup(key, effective_lang)
            .or_else(|| {
                (effective_lang != self.default_language)
                    .then(|| self.lookup(key, &self.default_language))
                    .flatten()
            });

        match text {
            Some(text) => format_message(text, params),
            None => {
                warn!("Translation key '{}' not found", key);
                key.to_string()
            }
        }
    }

    /// Translate in the default language
    pub fn t_default(&self, key: &str, params: Option<&TranslationParams>) -> String {
        self.t(key, &self.default_language, params)
    }

    pub fn has_key(&self, key: &str, lang: &str) -> bool {
        self.lookup(key, lang).is_some()
    }

    pub fn is_language_supported(&self, lang: &str) -> bool {
        self.supported_languages.iter().any(|l| l == lang)
    }

    fn effective_language<'a>(&'a self, lang: &'a str) -> &'a str {
        if self.is_language_supported(lang) && self.translations.contains_key(lang) {
            lang
        } else {
            &self.default_language
        }
    }

    fn lookup(&self, key: &str, lang: &str) -> Option<&str> {
        let mut parts = key.split('.');
        let mut current = self.translations.get(lang)?.get(parts.next()?)?;
        for part in parts {
            current = current.get(part)?;
        }
        current.as_str()
    }

    pub fn supported_languages(&self) -> &[String] {
        &self.supported_languages
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Pick a language from an `Accept-Language` style list
    ///
    /// Entries are tried in order; region suffixes and quality values are
    /// ignored.
    pub fn detect_language(&self, accept_language: Option<&str>) -> String {
        accept_language
            .into_iter()
            .flat_map(|header| header.split(','))
            .filter_map(|entry| entry.split(';').next())
            .map(|tag| tag.trim().split('-').next().unwrap_or("").to_lowercase())
            .find(|code| self.is_language_supported(code))
            .unwrap_or_else(|| self.default_language.clone())
    }

    pub async fn reload_translations(&mut self) -> Result<()> {
        self.translations.clear();
        self.load_translations().await
    }

    pub fn stats(&self) -> TranslationStats {
        let mut stats = TranslationStats {
            languages: Vec::new(),
            total_keys: 0,
        };

        for (lang, translations) in &self.translations {
            let key_count = count_keys(translations);
            stats.languages.push(LanguageStats {
                code: lang.clone(),
                key_count,
            });
            if lang == &self.default_language {
                stats.total_keys = key_count;
            }
        }

        stats
    }
}

fn format_message(template: &str, params: Option<&TranslationParams>) -> String {
    match params {
        Some(params) => params.iter().fold(template.to_string(), |text, (key, value)| {
            text.replace(&format!("{{{}}}", key), value)
        }),
        None => template.to_string(),
    }
}

fn count_keys(obj: &Map<String, Value>) -> usize {
    obj.values()
        .map(|value| match value {
            Value::Object(nested) => count_keys(nested),
            _ => 1,
        })
        .sum()
}

#[derive(Debug, Clone)]
pub struct TranslationStats {
    pub languages: Vec<LanguageStats>,
    pub total_keys: usize,
}

#[derive(Debug, Clone)]
pub struct LanguageStats {
    pub code: String,
    pub key_count: usize,
}

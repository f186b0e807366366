//! Internationalization module
//!
//! This module handles the user-facing text of KidSpots. It loads the
//! per-language resource bundles and formats messages from them.

pub mod loader;

// Re-export commonly used i18n components
pub use loader::{I18n, LanguageStats, TranslationParams, TranslationStats, params};

/// Default-configured translations with the bundled Japanese resources
#[cfg(test)]
pub(crate) fn bundled() -> I18n {
    let mut i18n = I18n::new(&crate::config::Settings::default().i18n);
    if let Err(e) = i18n.load_bundle("ja", include_str!("../../translations/ja.json")) {
        panic!("bundled translations must parse: {}", e);
    }
    i18n
}

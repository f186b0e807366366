//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub app: AppConfig,
    pub catalog: CatalogConfig,
    pub uploads: UploadConfig,
    pub moderation: ModerationConfig,
    pub admin: AdminConfig,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

/// General application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub name: String,
    pub contact_email: String,
}

/// Catalog and simulated request latency configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    pub seed_mock_data: bool,
    pub fetch_delay_ms: u64,
    pub admin_fetch_delay_ms: u64,
    pub visibility_delay_ms: u64,
    pub delete_delay_ms: u64,
    pub create_delay_ms: u64,
    pub review_delay_ms: u64,
    pub settings_delay_ms: u64,
    pub contact_delay_ms: u64,
}

/// Attachment staging limits for the submission wizard
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadConfig {
    pub max_files: usize,
    pub max_file_size_bytes: u64,
    pub allowed_mime_prefixes: Vec<String>,
    pub allowed_mime_types: Vec<String>,
}

/// Moderation policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModerationConfig {
    /// Publish new submissions immediately instead of holding them for review
    pub auto_approval: bool,
}

/// Admin dashboard configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdminConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub default_language: String,
    pub supported_languages: Vec<String>,
    pub translations_dir: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
    pub json: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let defaults = config::Config::try_from(&Settings::default())?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("KIDSPOTS").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Parse a complete settings document from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, crate::utils::errors::KidSpotsError> {
        toml::from_str(content)
            .map_err(|e| crate::utils::errors::KidSpotsError::Config(format!("Invalid settings TOML: {}", e)))
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::KidSpotsError> {
        super::validation::validate_settings(self)
    }

    /// Settings with every simulated latency set to zero
    pub fn without_latency() -> Self {
        let mut settings = Self::default();
        settings.catalog.fetch_delay_ms = 0;
        settings.catalog.admin_fetch_delay_ms = 0;
        settings.catalog.visibility_delay_ms = 0;
        settings.catalog.delete_delay_ms = 0;
        settings.catalog.create_delay_ms = 0;
        settings.catalog.review_delay_ms = 0;
        settings.catalog.settings_delay_ms = 0;
        settings.catalog.contact_delay_ms = 0;
        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppConfig {
                name: "子育てスポット".to_string(),
                contact_email: "admin@childcare-spots.jp".to_string(),
            },
            catalog: CatalogConfig {
                seed_mock_data: true,
                fetch_delay_ms: 1200,
                admin_fetch_delay_ms: 800,
                visibility_delay_ms: 200,
                delete_delay_ms: 500,
                create_delay_ms: 2000,
                review_delay_ms: 1000,
                settings_delay_ms: 500,
                contact_delay_ms: 2000,
            },
            uploads: UploadConfig {
                max_files: 5,
                max_file_size_bytes: 10 * 1024 * 1024,
                allowed_mime_prefixes: vec!["image/".to_string()],
                allowed_mime_types: vec!["application/pdf".to_string()],
            },
            moderation: ModerationConfig {
                auto_approval: false,
            },
            admin: AdminConfig {
                default_page_size: 10,
                page_size_options: vec![5, 10, 25],
            },
            i18n: I18nConfig {
                default_language: "ja".to_string(),
                supported_languages: vec!["ja".to_string()],
                translations_dir: "translations".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "logs/kidspots.log".to_string(),
                json: false,
            },
        }
    }
}

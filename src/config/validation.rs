//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{KidSpotsError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_app_config(&settings.app)?;
    validate_upload_config(&settings.uploads)?;
    validate_admin_config(&settings.admin)?;
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate general application configuration
fn validate_app_config(config: &super::AppConfig) -> Result<()> {
    if config.name.trim().is_empty() {
        return Err(KidSpotsError::Config(
            "Application name is required".to_string()
        ));
    }

    if !config.contact_email.contains('@') {
        return Err(KidSpotsError::Config(
            format!("Invalid contact email: {}", config.contact_email)
        ));
    }

    Ok(())
}

/// Validate upload limits
fn validate_upload_config(config: &super::UploadConfig) -> Result<()> {
    if config.max_files == 0 {
        return Err(KidSpotsError::Config(
            "Max files must be greater than 0".to_string()
        ));
    }

    if config.max_file_size_bytes == 0 {
        return Err(KidSpotsError::Config(
            "Max file size must be greater than 0".to_string()
        ));
    }

    if config.allowed_mime_prefixes.is_empty() && config.allowed_mime_types.is_empty() {
        return Err(KidSpotsError::Config(
            "At least one allowed attachment type is required".to_string()
        ));
    }

    Ok(())
}

/// Validate admin dashboard configuration
fn validate_admin_config(config: &super::AdminConfig) -> Result<()> {
    if config.page_size_options.is_empty() || config.page_size_options.contains(&0) {
        return Err(KidSpotsError::Config(
            "Page size options must be non-empty and greater than 0".to_string()
        ));
    }

    if !config.page_size_options.contains(&config.default_page_size) {
        return Err(KidSpotsError::Config(
            "Default page size must be one of the page size options".to_string()
        ));
    }

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_language.is_empty() {
        return Err(KidSpotsError::Config(
            "Default language is required".to_string()
        ));
    }

    if config.supported_languages.is_empty() {
        return Err(KidSpotsError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    if !config.supported_languages.contains(&config.default_language) {
        return Err(KidSpotsError::Config(
            "Default language must be in supported languages list".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(KidSpotsError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(KidSpotsError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

//! Error handling for KidSpots
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;
use crate::i18n::{I18n, TranslationParams, params};

/// Main error type for KidSpots application
#[derive(Error, Debug)]
pub enum KidSpotsError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Upload rejected: {0}")]
    Upload(#[from] UploadError),

    #[error("Spot not found: {spot_id}")]
    SpotNotFound { spot_id: String },

    #[error("Review not found: {review_id}")]
    ReviewNotFound { review_id: String },

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Mutation failed ({operation}): {reason}")]
    MutationFailed { operation: MutationKind, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A single failed field check on a submitted form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Attachment staging errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Unsupported file type for {name}: {content_type}")]
    UnsupportedType { name: String, content_type: String },

    #[error("File {name} is {size} bytes, limit is {limit}")]
    TooLarge { name: String, size: u64, limit: u64 },

    #[error("At most {limit} files can be attached")]
    TooManyFiles { limit: usize },
}

/// The mutation that failed, used to pick the alert text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    CreateSpot,
    SpotVisibility,
    DeleteSpot,
    CreateReview,
    ReviewVisibility,
    DeleteReview,
    SaveSettings,
    SendContact,
}

impl std::fmt::Display for MutationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MutationKind::CreateSpot => "create_spot",
            MutationKind::SpotVisibility => "spot_visibility",
            MutationKind::DeleteSpot => "delete_spot",
            MutationKind::CreateReview => "create_review",
            MutationKind::ReviewVisibility => "review_visibility",
            MutationKind::DeleteReview => "delete_review",
            MutationKind::SaveSettings => "save_settings",
            MutationKind::SendContact => "send_contact",
        };
        f.write_str(name)
    }
}

impl MutationKind {
    pub fn message_key(&self) -> &'static str {
        match self {
            MutationKind::CreateSpot => "Errors.createSpot",
            MutationKind::SpotVisibility => "Errors.spotVisibility",
            MutationKind::DeleteSpot => "Errors.deleteSpot",
            MutationKind::CreateReview => "Errors.createReview",
            MutationKind::ReviewVisibility => "Errors.reviewVisibility",
            MutationKind::DeleteReview => "Errors.deleteReview",
            MutationKind::SaveSettings => "Errors.saveSettings",
            MutationKind::SendContact => "Errors.sendContact",
        }
    }
}

/// Result type alias for KidSpots operations
pub type Result<T> = std::result::Result<T, KidSpotsError>;

impl KidSpotsError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            KidSpotsError::Validation(_) => true,
            KidSpotsError::Upload(_) => true,
            KidSpotsError::SpotNotFound { .. } => false,
            KidSpotsError::ReviewNotFound { .. } => false,
            KidSpotsError::InvalidStateTransition { .. } => false,
            KidSpotsError::MutationFailed { .. } => true,
            KidSpotsError::Config(_) => false,
            KidSpotsError::Serialization(_) => false,
            KidSpotsError::Io(_) => true,
            KidSpotsError::UrlParse(_) => true,
            KidSpotsError::InvalidInput(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            KidSpotsError::Config(_) => ErrorSeverity::Critical,
            KidSpotsError::Validation(_) => ErrorSeverity::Info,
            KidSpotsError::Upload(_) => ErrorSeverity::Info,
            KidSpotsError::InvalidInput(_) => ErrorSeverity::Info,
            KidSpotsError::UrlParse(_) => ErrorSeverity::Info,
            KidSpotsError::SpotNotFound { .. } => ErrorSeverity::Warning,
            KidSpotsError::ReviewNotFound { .. } => ErrorSeverity::Warning,
            KidSpotsError::InvalidStateTransition { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }

    /// Text for the inline alert shown by whichever view triggered the action
    ///
    /// Field validation messages are shown verbatim; everything else comes
    /// from the `Errors` namespace of the resource bundle.
    pub fn user_message(&self, i18n: &I18n) -> String {
        match self {
            KidSpotsError::Validation(e) => e.message.clone(),
            KidSpotsError::InvalidInput(msg) => msg.clone(),
            other => {
                let (key, values) = other.message_key();
                i18n.t_default(key, Some(&values))
            }
        }
    }

    /// Bundle key and interpolation values of the alert text
    pub fn message_key(&self) -> (&'static str, TranslationParams) {
        match self {
            KidSpotsError::Upload(UploadError::TooManyFiles { limit }) => {
                ("Errors.tooManyFiles", params([("max", limit)]))
            }
            KidSpotsError::Upload(UploadError::TooLarge { name, .. }) => {
                ("Errors.fileTooLarge", params([("name", name)]))
            }
            KidSpotsError::Upload(UploadError::UnsupportedType { name, .. }) => {
                ("Errors.unsupportedFile", params([("name", name)]))
            }
            KidSpotsError::UrlParse(_) => ("Errors.invalidMapUrl", TranslationParams::new()),
            KidSpotsError::MutationFailed { operation, .. } => (operation.message_key(), TranslationParams::new()),
            KidSpotsError::SpotNotFound { .. } => ("Errors.spotNotFound", TranslationParams::new()),
            KidSpotsError::ReviewNotFound { .. } => ("Errors.reviewNotFound", TranslationParams::new()),
            _ => ("Errors.fetch", TranslationParams::new()),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

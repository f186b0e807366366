//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the KidSpots application.

use std::path::Path;
use tracing::{info, warn, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};
use crate::config::LoggingConfig;
use crate::utils::errors::{KidSpotsError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let path = Path::new(&config.file_path);
    let directory = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "kidspots.log".to_string());

    let file_appender = tracing_appender::rolling::daily(directory, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(non_blocking)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(non_blocking)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| KidSpotsError::Config(format!("Failed to install subscriber: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log visitor-side spot actions
pub fn log_spot_action(spot_id: &str, action: &str, details: Option<&str>) {
    info!(
        spot_id = spot_id,
        action = action,
        details = details,
        "Spot action performed"
    );
}

/// Log review actions
pub fn log_review_action(review_id: &str, spot_id: &str, action: &str) {
    info!(
        review_id = review_id,
        spot_id = spot_id,
        action = action,
        "Review action performed"
    );
}

/// Log moderator actions
pub fn log_admin_action(action: &str, target: Option<&str>, details: Option<&str>) {
    warn!(
        action = action,
        target = target,
        details = details,
        "Admin action performed"
    );
}

/// Log rejected form input
pub fn log_validation_failure(form: &str, field: &str, message: &str) {
    debug!(
        form = form,
        field = field,
        message = message,
        "Form validation failed"
    );
}

/// Log the artificial round-trip of a simulated request
pub fn log_contact_message(category: &str, subject: &str) {
    info!(
        category = category,
        subject = subject,
        "Contact message received"
    );
}

pub fn log_simulated_latency(operation: &str, delay_ms: u64) {
    debug!(
        operation = operation,
        delay_ms = delay_ms,
        "Simulated request completed"
    );
}

//! KidSpots
//!
//! A catalog of childcare-friendly places: parks, cafes, children's centers,
//! malls and libraries. This library provides the venue filter engine, the
//! optimistic mutation layer, the spot submission wizard, admin moderation
//! and Japanese localization as front-end independent components.

#![allow(non_snake_case)]

pub mod config;
pub mod database;
pub mod i18n;
pub mod models;
pub mod search;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{KidSpotsError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use i18n::I18n;
pub use search::{SpotFilters, filter_spots};
pub use services::ServiceFactory;
pub use state::{AppContext, AppStore, SubmissionWizard};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}

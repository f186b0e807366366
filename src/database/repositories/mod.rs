//! Catalog repositories module
//!
//! This module contains all repository implementations for data access

pub mod spot;
pub mod review;
pub mod image;

// Re-export repositories
pub use spot::SpotRepository;
pub use review::ReviewRepository;
pub use image::ImageRepository;

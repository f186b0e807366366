//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod amenity;
pub mod category;
pub mod contact;
pub mod image;
pub mod review;
pub mod spot;

// Re-export commonly used models
pub use amenity::{Amenity, AmenitySet};
pub use category::Category;
pub use contact::{ContactCategory, ContactMessage};
pub use image::SpotImage;
pub use review::{Review, NewReview, REVIEW_MAX_CHARS};
pub use spot::{Spot, SpotDraft, NewSpot, AgeRange, MAX_AGE};

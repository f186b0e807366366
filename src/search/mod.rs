//! Search module
//!
//! Criteria types and the pure filter engine used by the browsing view and
//! the moderation tables.

pub mod filter;

pub use filter::{
    AmenityRequirement, SpotFilters, filter_spots, matches_query, review_matches_query,
    spot_matches_query,
};

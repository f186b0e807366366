//! Catalog store module
//!
//! This module holds the in-memory catalog and its repositories

pub mod connection;
pub mod repositories;
pub mod seed;

use crate::config::CatalogConfig;

// Re-export commonly used database components
pub use connection::{Catalog, CatalogPool, create_pool};
pub use repositories::{SpotRepository, ReviewRepository, ImageRepository};

#[derive(Clone)]
pub struct DatabaseService {
    pub spots: SpotRepository,
    pub reviews: ReviewRepository,
    pub images: ImageRepository,
}

impl DatabaseService {
    pub fn new(pool: CatalogPool) -> Self {
        Self {
            spots: SpotRepository::new(pool.clone()),
            reviews: ReviewRepository::new(pool.clone()),
            images: ImageRepository::new(pool),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(create_pool(config.seed_mock_data))
    }

    /// Catalog loaded with the bundled sample data
    pub fn seeded() -> Self {
        Self::new(create_pool(true))
    }

    pub fn empty() -> Self {
        Self::new(create_pool(false))
    }
}

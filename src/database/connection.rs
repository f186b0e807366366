//! In-memory catalog storage
//!
//! The catalog lives in a single shared collection guarded by an async lock.
//! Repositories hold cheap clones of the handle.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use crate::models::{Review, Spot, SpotImage};
use super::seed;

/// Everything the catalog stores, in insertion order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub spots: Vec<Spot>,
    pub reviews: Vec<Review>,
    pub images: Vec<SpotImage>,
}

pub type CatalogPool = Arc<RwLock<Catalog>>;

/// Create the shared catalog, optionally loaded with the bundled sample data
pub fn create_pool(seed_mock_data: bool) -> CatalogPool {
    let catalog = if seed_mock_data {
        let catalog = seed::mock_catalog();
        info!(
            spots = catalog.spots.len(),
            reviews = catalog.reviews.len(),
            images = catalog.images.len(),
            "Catalog seeded with sample data"
        );
        catalog
    } else {
        Catalog::default()
    };

    Arc::new(RwLock::new(catalog))
}

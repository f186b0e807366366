//! Spot repository implementation

use chrono::Utc;
use crate::database::connection::CatalogPool;
use crate::models::Spot;
use crate::utils::errors::KidSpotsError;

#[derive(Clone)]
pub struct SpotRepository {
    pool: CatalogPool,
}

impl SpotRepository {
    pub fn new(pool: CatalogPool) -> Self {
        Self { pool }
    }

    /// Every spot, including ones hidden by moderation
    pub async fn list_all(&self) -> Result<Vec<Spot>, KidSpotsError> {
        Ok(self.pool.read().await.spots.clone())
    }

    /// Publicly listed spots in insertion order
    pub async fn list_visible(&self) -> Result<Vec<Spot>, KidSpotsError> {
        let catalog = self.pool.read().await;
        Ok(catalog.spots.iter().filter(|s| s.is_visible).cloned().collect())
    }

    /// Find spot by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Spot>, KidSpotsError> {
        let catalog = self.pool.read().await;
        Ok(catalog.spots.iter().find(|s| s.id == id).cloned())
    }

    /// Append a new spot
    pub async fn insert(&self, spot: Spot) -> Result<Spot, KidSpotsError> {
        let mut catalog = self.pool.write().await;
        if catalog.spots.iter().any(|s| s.id == spot.id) {
            return Err(KidSpotsError::InvalidInput(format!("Duplicate spot id: {}", spot.id)));
        }
        catalog.spots.push(spot.clone());
        Ok(spot)
    }

    /// Set the moderation flag
    pub async fn set_visibility(&self, id: &str, is_visible: bool) -> Result<Spot, KidSpotsError> {
        let mut catalog = self.pool.write().await;
        let spot = catalog
            .spots
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| KidSpotsError::SpotNotFound { spot_id: id.to_string() })?;

        spot.is_visible = is_visible;
        spot.updated_at = Utc::now();
        Ok(spot.clone())
    }

    /// Delete a spot together with its reviews and images
    pub async fn delete(&self, id: &str) -> Result<(), KidSpotsError> {
        let mut catalog = self.pool.write().await;
        let before = catalog.spots.len();
        catalog.spots.retain(|s| s.id != id);
        if catalog.spots.len() == before {
            return Err(KidSpotsError::SpotNotFound { spot_id: id.to_string() });
        }

        catalog.reviews.retain(|r| r.spot_id != id);
        catalog.images.retain(|i| i.spot_id != id);
        Ok(())
    }

    /// Count spots
    pub async fn count(&self) -> Result<usize, KidSpotsError> {
        Ok(self.pool.read().await.spots.len())
    }
}

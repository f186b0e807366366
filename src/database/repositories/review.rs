//! Review repository implementation

use crate::database::connection::CatalogPool;
use crate::models::Review;
use crate::utils::errors::KidSpotsError;

#[derive(Clone)]
pub struct ReviewRepository {
    pool: CatalogPool,
}

impl ReviewRepository {
    pub fn new(pool: CatalogPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Review>, KidSpotsError> {
        Ok(self.pool.read().await.reviews.clone())
    }

    /// Reviews attached to one spot, optionally only the published ones
    pub async fn list_for_spot(&self, spot_id: &str, visible_only: bool) -> Result<Vec<Review>, KidSpotsError> {
        let catalog = self.pool.read().await;
        Ok(catalog
            .reviews
            .iter()
            .filter(|r| r.spot_id == spot_id && (!visible_only || r.is_visible))
            .cloned()
            .collect())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Review>, KidSpotsError> {
        let catalog = self.pool.read().await;
        Ok(catalog.reviews.iter().find(|r| r.id == id).cloned())
    }

    /// Append a review; the owning spot must exist
    pub async fn insert(&self, review: Review) -> Result<Review, KidSpotsError> {
        let mut catalog = self.pool.write().await;
        if !catalog.spots.iter().any(|s| s.id == review.spot_id) {
            return Err(KidSpotsError::SpotNotFound { spot_id: review.spot_id.clone() });
        }
        catalog.reviews.push(review.clone());
        Ok(review)
    }

    pub async fn set_visibility(&self, id: &str, is_visible: bool) -> Result<Review, KidSpotsError> {
        let mut catalog = self.pool.write().await;
        let review = catalog
            .reviews
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| KidSpotsError::ReviewNotFound { review_id: id.to_string() })?;

        review.is_visible = is_visible;
        Ok(review.clone())
    }

    pub async fn delete(&self, id: &str) -> Result<(), KidSpotsError> {
        let mut catalog = self.pool.write().await;
        let before = catalog.reviews.len();
        catalog.reviews.retain(|r| r.id != id);
        if catalog.reviews.len() == before {
            return Err(KidSpotsError::ReviewNotFound { review_id: id.to_string() });
        }
        Ok(())
    }
}

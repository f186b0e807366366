//! Catalog backend
//!
//! `CatalogBackend` is the seam between the mutation layer and whatever
//! actually stores the catalog. `SimulatedBackend` writes straight to the
//! in-memory repositories after a fixed artificial delay and never fails for
//! known ids.

use std::time::Duration;
use async_trait::async_trait;
use crate::config::CatalogConfig;
use crate::database::DatabaseService;
use crate::models::{ContactMessage, Review, Spot, SpotImage};
use crate::utils::errors::{KidSpotsError, Result};
use crate::utils::logging::{log_contact_message, log_simulated_latency};
use super::cache::AdminData;

/// A spot with everything the detail view shows
#[derive(Debug, Clone, PartialEq)]
pub struct SpotDetail {
    pub spot: Spot,
    /// Published reviews only
    pub reviews: Vec<Review>,
    pub images: Vec<SpotImage>,
    pub image_urls: Vec<String>,
}

#[async_trait]
pub trait CatalogBackend: Send + Sync {
    /// Every spot and review, hidden ones included
    async fn fetch_admin_data(&self) -> Result<AdminData>;

    async fn fetch_visible_spots(&self) -> Result<Vec<Spot>>;

    async fn fetch_spot_detail(&self, spot_id: &str) -> Result<SpotDetail>;

    async fn create_spot(&self, spot: Spot) -> Result<Spot>;

    async fn set_spot_visibility(&self, spot_id: &str, is_visible: bool) -> Result<Spot>;

    async fn delete_spot(&self, spot_id: &str) -> Result<()>;

    async fn create_review(&self, review: Review) -> Result<Review>;

    async fn set_review_visibility(&self, review_id: &str, is_visible: bool) -> Result<Review>;

    async fn delete_review(&self, review_id: &str) -> Result<()>;

    /// Persist admin settings; the simulated store only waits
    async fn save_settings(&self) -> Result<()>;

    /// Deliver a contact form message to the operators
    async fn send_contact(&self, message: &ContactMessage) -> Result<()>;
}

#[derive(Clone)]
pub struct SimulatedBackend {
    database: DatabaseService,
    latency: CatalogConfig,
}

impl SimulatedBackend {
    pub fn new(database: DatabaseService, latency: CatalogConfig) -> Self {
        Self { database, latency }
    }

    async fn delay(&self, operation: &str, delay_ms: u64) {
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
        log_simulated_latency(operation, delay_ms);
    }
}

#[async_trait]
impl CatalogBackend for SimulatedBackend {
    async fn fetch_admin_data(&self) -> Result<AdminData> {
        self.delay("fetch_admin_data", self.latency.admin_fetch_delay_ms).await;
        Ok(AdminData {
            spots: self.database.spots.list_all().await?,
            reviews: self.database.reviews.list_all().await?,
        })
    }

    async fn fetch_visible_spots(&self) -> Result<Vec<Spot>> {
        self.delay("fetch_visible_spots", self.latency.fetch_delay_ms).await;
        self.database.spots.list_visible().await
    }

    async fn fetch_spot_detail(&self, spot_id: &str) -> Result<SpotDetail> {
        let spot = self
            .database
            .spots
            .find_by_id(spot_id)
            .await?
            .filter(|s| s.is_visible)
            .ok_or_else(|| KidSpotsError::SpotNotFound { spot_id: spot_id.to_string() })?;

        Ok(SpotDetail {
            reviews: self.database.reviews.list_for_spot(spot_id, true).await?,
            images: self.database.images.list_for_spot(spot_id).await?,
            image_urls: self.database.images.image_urls_for_spot(spot_id).await?,
            spot,
        })
    }

    async fn create_spot(&self, spot: Spot) -> Result<Spot> {
        self.delay("create_spot", self.latency.create_delay_ms).await;
        self.database.spots.insert(spot).await
    }

    async fn set_spot_visibility(&self, spot_id: &str, is_visible: bool) -> Result<Spot> {
        self.delay("set_spot_visibility", self.latency.visibility_delay_ms).await;
        self.database.spots.set_visibility(spot_id, is_visible).await
    }

    async fn delete_spot(&self, spot_id: &str) -> Result<()> {
        self.delay("delete_spot", self.latency.delete_delay_ms).await;
        self.database.spots.delete(spot_id).await
    }

    async fn create_review(&self, mut review: Review) -> Result<Review> {
        self.delay("create_review", self.latency.review_delay_ms).await;
        if review.spot_name.is_none() {
            review.spot_name = self
                .database
                .spots
                .find_by_id(&review.spot_id)
                .await?
                .map(|s| s.name);
        }
        self.database.reviews.insert(review).await
    }

    async fn set_review_visibility(&self, review_id: &str, is_visible: bool) -> Result<Review> {
        self.delay("set_review_visibility", self.latency.visibility_delay_ms).await;
        self.database.reviews.set_visibility(review_id, is_visible).await
    }

    async fn delete_review(&self, review_id: &str) -> Result<()> {
        self.delay("delete_review", self.latency.delete_delay_ms).await;
        self.database.reviews.delete(review_id).await
    }

    async fn save_settings(&self) -> Result<()> {
        self.delay("save_settings", self.latency.settings_delay_ms).await;
        Ok(())
    }

    async fn send_contact(&self, message: &ContactMessage) -> Result<()> {
        self.delay("send_contact", self.latency.contact_delay_ms).await;
        log_contact_message(message.category.as_str(), &message.subject);
        Ok(())
    }
}

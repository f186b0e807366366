//! Catalog backend whose writes can be switched to fail

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use async_trait::async_trait;
use KidSpots::{
    config::CatalogConfig,
    database::DatabaseService,
    models::{ContactMessage, Review, Spot},
    services::{AdminData, CatalogBackend, SimulatedBackend, SpotDetail},
    KidSpotsError, Result,
};

/// Wraps the simulated backend; reads always pass through
pub struct ControlledBackend {
    inner: SimulatedBackend,
    fail_writes: AtomicBool,
    write_delay: Duration,
    writes: AtomicUsize,
}

impl ControlledBackend {
    pub fn new(database: DatabaseService, latency: CatalogConfig) -> Self {
        Self {
            inner: SimulatedBackend::new(database, latency),
            fail_writes: AtomicBool::new(false),
            write_delay: Duration::from_millis(100),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn seeded() -> Self {
        Self::new(DatabaseService::seeded(), KidSpots::Settings::without_latency().catalog)
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of write requests that reached the backend
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    async fn gate(&self) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.write_delay).await;
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(KidSpotsError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "connection reset by peer",
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogBackend for ControlledBackend {
    async fn fetch_admin_data(&self) -> Result<AdminData> {
        self.inner.fetch_admin_data().await
    }

    async fn fetch_visible_spots(&self) -> Result<Vec<Spot>> {
        self.inner.fetch_visible_spots().await
    }

    async fn fetch_spot_detail(&self, spot_id: &str) -> Result<SpotDetail> {
        self.inner.fetch_spot_detail(spot_id).await
    }

    async fn create_spot(&self, spot: Spot) -> Result<Spot> {
        self.gate().await?;
        self.inner.create_spot(spot).await
    }

    async fn set_spot_visibility(&self, spot_id: &str, is_visible: bool) -> Result<Spot> {
        self.gate().await?;
        self.inner.set_spot_visibility(spot_id, is_visible).await
    }

    async fn delete_spot(&self, spot_id: &str) -> Result<()> {
        self.gate().await?;
        self.inner.delete_spot(spot_id).await
    }

    async fn create_review(&self, review: Review) -> Result<Review> {
        self.gate().await?;
        self.inner.create_review(review).await
    }

    async fn set_review_visibility(&self, review_id: &str, is_visible: bool) -> Result<Review> {
        self.gate().await?;
        self.inner.set_review_visibility(review_id, is_visible).await
    }

    async fn delete_review(&self, review_id: &str) -> Result<()> {
        self.gate().await?;
        self.inner.delete_review(review_id).await
    }

    async fn save_settings(&self) -> Result<()> {
        self.gate().await?;
        self.inner.save_settings().await
    }

    async fn send_contact(&self, message: &ContactMessage) -> Result<()> {
        self.gate().await?;
        self.inner.send_contact(message).await
    }
}

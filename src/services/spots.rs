//! Visitor-facing spot reads

use std::sync::Arc;
use tracing::debug;
use crate::models::Spot;
use crate::search::{SpotFilters, filter_spots};
use crate::utils::errors::Result;
use crate::utils::logging::log_spot_action;
use super::backend::{CatalogBackend, SpotDetail};

#[derive(Clone)]
pub struct SpotService {
    backend: Arc<dyn CatalogBackend>,
}

impl SpotService {
    pub fn new(backend: Arc<dyn CatalogBackend>) -> Self {
        Self { backend }
    }

    /// Published spots matching the criteria, in catalog order
    pub async fn fetch(&self, filters: &SpotFilters) -> Result<Vec<Spot>> {
        let spots = self.backend.fetch_visible_spots().await?;
        let matched = filter_spots(&spots, filters);
        debug!(
            total = spots.len(),
            matched = matched.len(),
            active_filters = filters.active_filter_count(),
            "Spots filtered"
        );
        Ok(matched)
    }

    pub async fn detail(&self, spot_id: &str) -> Result<SpotDetail> {
        let detail = self.backend.fetch_spot_detail(spot_id).await?;
        log_spot_action(spot_id, "viewed", None);
        Ok(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::database::DatabaseService;
    use crate::models::Category;
    use crate::services::backend::SimulatedBackend;

    fn service() -> SpotService {
        let backend = SimulatedBackend::new(DatabaseService::seeded(), Settings::without_latency().catalog);
        SpotService::new(Arc::new(backend))
    }

    #[tokio::test]
    async fn test_fetch_applies_filters() {
        let filters = SpotFilters {
            categories: [Category::Library].into_iter().collect(),
            ..Default::default()
        };
        let spots = service().fetch(&filters).await.unwrap();
        assert_eq!(spots.len(), 1);
        assert_eq!(spots[0].name, "市立図書館");
    }

    #[tokio::test]
    async fn test_detail_includes_reviews() {
        let detail = service().detail("1").await.unwrap();
        assert_eq!(detail.spot.name, "中央公園");
        assert_eq!(detail.reviews.len(), 2);
    }
}

//! Image repository implementation

use crate::database::connection::CatalogPool;
use crate::models::SpotImage;
use crate::utils::errors::KidSpotsError;

#[derive(Clone)]
pub struct ImageRepository {
    pool: CatalogPool,
}

impl ImageRepository {
    pub fn new(pool: CatalogPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_spot(&self, spot_id: &str) -> Result<Vec<SpotImage>, KidSpotsError> {
        let catalog = self.pool.read().await;
        Ok(catalog.images.iter().filter(|i| i.spot_id == spot_id).cloned().collect())
    }

    /// Gallery references for a spot: the cover image first, then stored files
    pub async fn image_urls_for_spot(&self, spot_id: &str) -> Result<Vec<String>, KidSpotsError> {
        let catalog = self.pool.read().await;
        let mut urls: Vec<String> = catalog
            .spots
            .iter()
            .find(|s| s.id == spot_id)
            .and_then(|s| s.first_image_url.clone())
            .into_iter()
            .collect();

        urls.extend(
            catalog
                .images
                .iter()
                .filter(|i| i.spot_id == spot_id)
                .map(|i| i.file_path.clone()),
        );
        Ok(urls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::create_pool;

    #[tokio::test]
    async fn test_cover_image_comes_first() {
        let repo = ImageRepository::new(create_pool(true));
        let urls = repo.image_urls_for_spot("1").await.unwrap();
        assert_eq!(urls.len(), 2);
        assert!(urls[0].starts_with("https://images.pexels.com/"));
        assert_eq!(urls[1], "mock/park1.jpg");
    }

    #[tokio::test]
    async fn test_spot_without_stored_images() {
        let repo = ImageRepository::new(create_pool(true));
        assert!(repo.list_for_spot("6").await.unwrap().is_empty());
        assert_eq!(repo.image_urls_for_spot("6").await.unwrap().len(), 1);
    }
}

//! Contact form delivery

use std::sync::Arc;
use tracing::warn;
use crate::models::ContactMessage;
use crate::utils::errors::{KidSpotsError, MutationKind, Result};
use super::backend::CatalogBackend;

#[derive(Clone)]
pub struct ContactService {
    backend: Arc<dyn CatalogBackend>,
}

impl ContactService {
    pub fn new(backend: Arc<dyn CatalogBackend>) -> Self {
        Self { backend }
    }

    pub async fn send(&self, message: &ContactMessage) -> Result<()> {
        self.backend.send_contact(message).await.map_err(|e| {
            warn!(category = %message.category, error = %e, "Contact message not delivered");
            KidSpotsError::MutationFailed {
                operation: MutationKind::SendContact,
                reason: e.to_string(),
            }
        })
    }
}

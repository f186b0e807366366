//! Services module
//!
//! This module contains the catalog business logic services

pub mod backend;
pub mod cache;
pub mod contact;
pub mod moderation;
pub mod mutation;
pub mod spots;

// Re-export commonly used services
pub use backend::{CatalogBackend, SimulatedBackend, SpotDetail};
pub use cache::{AdminData, EntityKey, PendingChange, QueryCache};
pub use contact::ContactService;
pub use moderation::{
    AdminSettings, AdminStats, ModerationPanel, ModerationService, Page, ReviewRow, Searchable,
    SharedAdminSettings, SpotRow,
};
pub use mutation::{EntityLocks, MutationService};
pub use spots::SpotService;

use std::sync::Arc;
use tokio::sync::RwLock;
use crate::config::settings::Settings;
use crate::database::DatabaseService;

/// Service factory for creating and wiring all services
///
/// Every service shares one backend, one query cache and one copy of the
/// admin settings.
#[derive(Clone)]
pub struct ServiceFactory {
    pub spot_service: SpotService,
    pub mutation_service: MutationService,
    pub moderation_service: ModerationService,
    pub contact_service: ContactService,
    pub backend: Arc<dyn CatalogBackend>,
}

impl ServiceFactory {
    /// Services backed by the simulated in-memory backend
    pub fn new(settings: &Settings, database: DatabaseService) -> Self {
        let backend: Arc<dyn CatalogBackend> =
            Arc::new(SimulatedBackend::new(database, settings.catalog.clone()));
        Self::with_backend(settings, backend)
    }

    /// Services backed by any catalog backend
    pub fn with_backend(settings: &Settings, backend: Arc<dyn CatalogBackend>) -> Self {
        let cache = Arc::new(RwLock::new(QueryCache::new()));
        let admin_settings: SharedAdminSettings =
            Arc::new(RwLock::new(AdminSettings::from_settings(settings)));

        Self {
            spot_service: SpotService::new(backend.clone()),
            mutation_service: MutationService::new(backend.clone(), cache.clone(), admin_settings.clone()),
            moderation_service: ModerationService::new(backend.clone(), cache, admin_settings),
            contact_service: ContactService::new(backend.clone()),
            backend,
        }
    }
}

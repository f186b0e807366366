//! Mutation service
//!
//! Every catalog write goes through here. A mutation records its expected
//! effect in the query cache, awaits the backend, then either folds the
//! change into the confirmed snapshot or drops it again. Mutations on the
//! same entity are serialized; different entities run independently.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use chrono::Utc;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard, RwLock};
use tracing::{debug, info, warn};
use crate::models::{NewReview, Review, Spot, SpotDraft};
use crate::utils::errors::{KidSpotsError, MutationKind, Result};
use crate::utils::helpers::generate_uuid;
use crate::utils::logging::{log_admin_action, log_review_action, log_spot_action, log_validation_failure};
use super::backend::CatalogBackend;
use super::cache::{AdminData, EntityKey, PendingChange, QueryCache};
use super::moderation::SharedAdminSettings;

/// One async lock per entity with a mutation in flight
#[derive(Clone, Default)]
pub struct EntityLocks {
    locks: Arc<Mutex<HashMap<EntityKey, Arc<AsyncMutex<()>>>>>,
}

impl EntityLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until no other mutation holds this entity
    pub async fn acquire(&self, key: &EntityKey) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
            // Locks nobody holds or waits on can go
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks.entry(key.clone()).or_default().clone()
        };
        lock.lock_owned().await
    }

    pub fn len(&self) -> usize {
        self.locks.lock().map(|l| l.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone)]
pub struct MutationService {
    backend: Arc<dyn CatalogBackend>,
    cache: Arc<RwLock<QueryCache>>,
    locks: EntityLocks,
    admin_settings: SharedAdminSettings,
}

impl MutationService {
    pub fn new(
        backend: Arc<dyn CatalogBackend>,
        cache: Arc<RwLock<QueryCache>>,
        admin_settings: SharedAdminSettings,
    ) -> Self {
        Self {
            backend,
            cache,
            locks: EntityLocks::new(),
            admin_settings,
        }
    }

    /// Admin data as readers should see it, optimistic changes included
    pub async fn view(&self) -> Option<AdminData> {
        self.cache.read().await.view()
    }

    /// Whether a mutation on this entity has not settled yet
    pub async fn in_flight(&self, key: &EntityKey) -> bool {
        self.cache.read().await.is_pending(key)
    }

    /// Refetch the confirmed snapshot from the backend
    pub async fn refresh(&self) -> Result<AdminData> {
        let data = self.backend.fetch_admin_data().await?;
        let mut cache = self.cache.write().await;
        cache.set_confirmed(data);
        debug!("Admin data refreshed");
        Ok(cache.view().unwrap_or_default())
    }

    pub async fn set_visibility(&self, key: EntityKey, is_visible: bool) -> Result<()> {
        match &key {
            EntityKey::Spot(id) => {
                let request = self.backend.set_spot_visibility(id, is_visible);
                self.run(key.clone(), PendingChange::Visibility(is_visible), MutationKind::SpotVisibility, request)
                    .await?;
                log_admin_action("set_spot_visibility", Some(id), Some(visibility_label(is_visible)));
            }
            EntityKey::Review(id) => {
                let request = self.backend.set_review_visibility(id, is_visible);
                self.run(key.clone(), PendingChange::Visibility(is_visible), MutationKind::ReviewVisibility, request)
                    .await?;
                log_admin_action("set_review_visibility", Some(id), Some(visibility_label(is_visible)));
            }
        }
        Ok(())
    }

    pub async fn delete(&self, key: EntityKey) -> Result<()> {
        match &key {
            EntityKey::Spot(id) => {
                let request = self.backend.delete_spot(id);
                self.run(key.clone(), PendingChange::Delete, MutationKind::DeleteSpot, request).await?;
                log_admin_action("delete_spot", Some(id), None);
            }
            EntityKey::Review(id) => {
                let request = self.backend.delete_review(id);
                self.run(key.clone(), PendingChange::Delete, MutationKind::DeleteReview, request).await?;
                log_admin_action("delete_review", Some(id), None);
            }
        }
        Ok(())
    }

    pub async fn set_spot_visibility(&self, spot_id: &str, is_visible: bool) -> Result<()> {
        self.set_visibility(EntityKey::Spot(spot_id.to_string()), is_visible).await
    }

    pub async fn set_review_visibility(&self, review_id: &str, is_visible: bool) -> Result<()> {
        self.set_visibility(EntityKey::Review(review_id.to_string()), is_visible).await
    }

    pub async fn delete_spot(&self, spot_id: &str) -> Result<()> {
        self.delete(EntityKey::Spot(spot_id.to_string())).await
    }

    pub async fn delete_review(&self, review_id: &str) -> Result<()> {
        self.delete(EntityKey::Review(review_id.to_string())).await
    }

    /// Validate a wizard draft and create the spot
    ///
    /// Invalid drafts fail before anything is locked or sent.
    pub async fn create_spot(&self, draft: &SpotDraft) -> Result<Spot> {
        let new_spot = draft.validate().map_err(|e| {
            log_validation_failure("spot", e.field, &e.message);
            KidSpotsError::from(e)
        })?;

        let is_visible = self.initial_visibility("spot").await;
        let spot = Spot::from_new(generate_uuid(), new_spot, is_visible, Utc::now());
        let key = EntityKey::Spot(spot.id.clone());

        let request = self.backend.create_spot(spot.clone());
        let created = self
            .run(key, PendingChange::InsertSpot(Box::new(spot)), MutationKind::CreateSpot, request)
            .await?;

        log_spot_action(&created.id, "created", Some(visibility_label(created.is_visible)));
        Ok(created)
    }

    pub async fn create_review(&self, new_review: NewReview) -> Result<Review> {
        let spot_name = self.view().await.and_then(|data| {
            data.spots
                .into_iter()
                .find(|s| s.id == new_review.spot_id)
                .map(|s| s.name)
        });

        let is_visible = self.initial_visibility("review").await;
        let review = Review::from_new(generate_uuid(), new_review, spot_name, is_visible, Utc::now());
        let key = EntityKey::Review(review.id.clone());

        let request = self.backend.create_review(review.clone());
        let created = self
            .run(key, PendingChange::InsertReview(Box::new(review)), MutationKind::CreateReview, request)
            .await?;

        log_review_action(&created.id, &created.spot_id, "created");
        Ok(created)
    }

    async fn initial_visibility(&self, entity: &str) -> bool {
        let auto_approval = self.admin_settings.read().await.auto_approval;
        if auto_approval {
            warn!(
                entity = entity,
                "Auto-approval is on: new entries are published without moderation"
            );
        }
        auto_approval
    }

    async fn run<T, F>(&self, key: EntityKey, change: PendingChange, kind: MutationKind, request: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let _guard = self.locks.acquire(&key).await;
        self.cache.write().await.begin(key.clone(), change.clone());
        debug!(key = %key, operation = %kind, "Mutation started");

        match request.await {
            Ok(value) => {
                self.cache.write().await.commit(&key, &change);
                info!(key = %key, operation = %kind, "Mutation committed");
                Ok(value)
            }
            Err(e) => {
                self.cache.write().await.rollback(&key);
                warn!(key = %key, operation = %kind, error = %e, "Mutation rolled back");
                Err(match e {
                    e @ (KidSpotsError::SpotNotFound { .. } | KidSpotsError::ReviewNotFound { .. }) => e,
                    other => KidSpotsError::MutationFailed {
                        operation: kind,
                        reason: other.to_string(),
                    },
                })
            }
        }
    }
}

fn visibility_label(is_visible: bool) -> &'static str {
    if is_visible {
        "visible"
    } else {
        "hidden"
    }
}

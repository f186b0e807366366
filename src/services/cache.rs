//! Admin query cache
//!
//! Holds the last server-confirmed snapshot of the admin data plus the
//! optimistic changes of mutations still in flight. Readers see the snapshot
//! with pending changes applied; a failed mutation drops its pending change,
//! which restores the confirmed state.

use std::fmt;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::models::{Review, Spot};

/// Everything the moderation dashboard works on
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminData {
    pub spots: Vec<Spot>,
    pub reviews: Vec<Review>,
}

/// Identity of a mutable catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityKey {
    Spot(String),
    Review(String),
}

impl EntityKey {
    pub fn id(&self) -> &str {
        match self {
            EntityKey::Spot(id) | EntityKey::Review(id) => id,
        }
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKey::Spot(id) => write!(f, "spot:{}", id),
            EntityKey::Review(id) => write!(f, "review:{}", id),
        }
    }
}

/// Expected effect of an in-flight mutation
#[derive(Debug, Clone, PartialEq)]
pub enum PendingChange {
    Visibility(bool),
    Delete,
    InsertSpot(Box<Spot>),
    InsertReview(Box<Review>),
}

impl AdminData {
    /// Apply a change in place; unknown ids are left untouched
    pub fn apply(&mut self, key: &EntityKey, change: &PendingChange) {
        match (key, change) {
            (EntityKey::Spot(id), PendingChange::Visibility(visible)) => {
                for spot in self.spots.iter_mut().filter(|s| &s.id == id) {
                    spot.is_visible = *visible;
                }
            }
            (EntityKey::Spot(id), PendingChange::Delete) => {
                self.spots.retain(|s| &s.id != id);
                self.reviews.retain(|r| &r.spot_id != id);
            }
            (EntityKey::Spot(id), PendingChange::InsertSpot(spot)) => {
                if !self.spots.iter().any(|s| &s.id == id) {
                    self.spots.push(spot.as_ref().clone());
                }
            }
            (EntityKey::Review(id), PendingChange::Visibility(visible)) => {
                for review in self.reviews.iter_mut().filter(|r| &r.id == id) {
                    review.is_visible = *visible;
                }
            }
            (EntityKey::Review(id), PendingChange::Delete) => {
                self.reviews.retain(|r| &r.id != id);
            }
            (EntityKey::Review(id), PendingChange::InsertReview(review)) => {
                if !self.reviews.iter().any(|r| &r.id == id) {
                    self.reviews.push(review.as_ref().clone());
                }
            }
            (key, change) => {
                debug!(key = %key, change = ?change, "Ignoring change that does not fit the entity kind");
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct QueryCache {
    confirmed: Option<AdminData>,
    /// In arrival order so optimistic inserts keep a stable position
    pending: Vec<(EntityKey, PendingChange)>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.confirmed.is_some()
    }

    /// Replace the confirmed snapshot with freshly fetched data
    pub fn set_confirmed(&mut self, data: AdminData) {
        self.confirmed = Some(data);
    }

    /// Drop the snapshot so the next read refetches
    pub fn invalidate(&mut self) {
        self.confirmed = None;
    }

    pub fn confirmed(&self) -> Option<&AdminData> {
        self.confirmed.as_ref()
    }

    /// Confirmed snapshot with every pending change applied
    pub fn view(&self) -> Option<AdminData> {
        let mut data = self.confirmed.clone()?;
        for (key, change) in &self.pending {
            data.apply(key, change);
        }
        Some(data)
    }

    pub fn is_pending(&self, key: &EntityKey) -> bool {
        self.pending.iter().any(|(k, _)| k == key)
    }

    /// Record the expected outcome of a mutation that is about to start
    pub fn begin(&mut self, key: EntityKey, change: PendingChange) {
        self.pending.retain(|(k, _)| k != &key);
        self.pending.push((key, change));
    }

    /// Fold a confirmed change into the snapshot
    pub fn commit(&mut self, key: &EntityKey, change: &PendingChange) {
        self.pending.retain(|(k, _)| k != key);
        if let Some(data) = self.confirmed.as_mut() {
            data.apply(key, change);
        }
    }

    /// Forget a failed change
    pub fn rollback(&mut self, key: &EntityKey) {
        self.pending.retain(|(k, _)| k != key);
    }
}

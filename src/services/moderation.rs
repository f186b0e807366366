//! Moderation service
//!
//! Admin-side reads over the whole catalog (hidden entries included),
//! table search and pagination, dashboard statistics and admin settings.

use std::marker::PhantomData;
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;
use crate::config::{AdminConfig, Settings, UploadConfig};
use crate::i18n::{I18n, params};
use crate::models::{Category, Review, Spot};
use crate::search::{review_matches_query, spot_matches_query};
use crate::utils::errors::{KidSpotsError, MutationKind, Result, ValidationError};
use crate::utils::helpers::format_date_ja;
use crate::utils::logging::{log_admin_action, log_validation_failure};
use super::backend::CatalogBackend;
use super::cache::{AdminData, QueryCache};

/// Settings edited from the admin settings tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSettings {
    pub auto_approval: bool,
    pub email_notifications: bool,
    pub maintenance_mode: bool,
    pub backup_enabled: bool,
    pub max_file_size_mb: u32,
    pub admin_email: String,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            auto_approval: false,
            email_notifications: true,
            maintenance_mode: false,
            backup_enabled: true,
            max_file_size_mb: 10,
            admin_email: "admin@childcare-spots.jp".to_string(),
        }
    }
}

impl AdminSettings {
    /// Initial values taken from the loaded configuration
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            auto_approval: settings.moderation.auto_approval,
            max_file_size_mb: u32::try_from(settings.uploads.max_file_size_bytes / (1024 * 1024)).unwrap_or(u32::MAX),
            admin_email: settings.app.contact_email.clone(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.max_file_size_mb == 0 {
            return Err(ValidationError::new("max_file_size_mb", "ファイルサイズ上限は1MB以上にしてください"));
        }
        if !self.admin_email.contains('@') {
            return Err(ValidationError::new("admin_email", "メールアドレスの形式が正しくありません"));
        }
        Ok(())
    }

    /// Wizard staging limits with the per-file cap set from these settings
    pub fn upload_limits(&self, base: &UploadConfig) -> UploadConfig {
        UploadConfig {
            max_file_size_bytes: u64::from(self.max_file_size_mb) * 1024 * 1024,
            ..base.clone()
        }
    }
}

pub type SharedAdminSettings = Arc<RwLock<AdminSettings>>;

/// Dashboard figures
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminStats {
    pub total_spots: usize,
    pub visible_spots: usize,
    /// Rounded percentage, 0 for an empty catalog
    pub publish_rate: u32,
    pub total_reviews: usize,
    /// Hidden spots plus hidden reviews
    pub pending: usize,
    pub by_category: Vec<(Category, usize)>,
}

impl AdminStats {
    pub fn compute(data: &AdminData) -> Self {
        let total_spots = data.spots.len();
        let visible_spots = data.spots.iter().filter(|s| s.is_visible).count();
        let hidden_reviews = data.reviews.iter().filter(|r| !r.is_visible).count();
        let publish_rate = if total_spots == 0 {
            0
        } else {
            ((visible_spots as f64 / total_spots as f64) * 100.0).round() as u32
        };

        Self {
            total_spots,
            visible_spots,
            publish_rate,
            total_reviews: data.reviews.len(),
            pending: (total_spots - visible_spots) + hidden_reviews,
            by_category: Category::ALL
                .iter()
                .map(|c| (*c, data.spots.iter().filter(|s| s.category == *c).count()))
                .collect(),
        }
    }
}

/// Rows that can be searched from an admin table
pub trait Searchable {
    fn matches_search(&self, query: &str) -> bool;
}

impl Searchable for Spot {
    fn matches_search(&self, query: &str) -> bool {
        spot_matches_query(self, query)
    }
}

impl Searchable for Review {
    fn matches_search(&self, query: &str) -> bool {
        review_matches_query(self, query)
    }
}

/// One page of a filtered admin table
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Rows matching the search, across all pages
    pub count: usize,
    pub page: usize,
    pub rows_per_page: usize,
    /// 1-based index of the first row shown, 0 when empty
    pub from: usize,
    pub to: usize,
}

impl<T> Page<T> {
    /// Displayed-rows caption, e.g. 「1-10 / 25件」
    pub fn label(&self, i18n: &I18n) -> String {
        i18n.t_default(
            "Admin.displayedRows",
            Some(&params([("from", self.from), ("to", self.to), ("count", self.count)])),
        )
    }

    pub fn page_count(&self) -> usize {
        self.count.div_ceil(self.rows_per_page.max(1))
    }
}

/// Search and pagination state of one admin table
#[derive(Debug, Clone)]
pub struct ModerationPanel<T> {
    search_query: String,
    page: usize,
    rows_per_page: usize,
    page_size_options: Vec<usize>,
    _rows: PhantomData<T>,
}

impl<T: Searchable + Clone> ModerationPanel<T> {
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            search_query: String::new(),
            page: 0,
            rows_per_page: config.default_page_size,
            page_size_options: config.page_size_options.clone(),
            _rows: PhantomData,
        }
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.page = 0;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn set_rows_per_page(&mut self, rows: usize) -> Result<()> {
        if !self.page_size_options.contains(&rows) {
            return Err(KidSpotsError::InvalidInput(format!(
                "rows per page must be one of {:?}",
                self.page_size_options
            )));
        }
        self.rows_per_page = rows;
        self.page = 0;
        Ok(())
    }

    /// Rows matching the current search
    pub fn filtered(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .filter(|item| item.matches_search(&self.search_query))
            .cloned()
            .collect()
    }

    /// Current page of the filtered rows
    ///
    /// A page index past the end (after deletions) shows the last page.
    pub fn page_of(&self, items: &[T]) -> Page<T> {
        let filtered = self.filtered(items);
        let count = filtered.len();
        let rows_per_page = self.rows_per_page.max(1);
        let last_page = count.saturating_sub(1) / rows_per_page;
        let page = self.page.min(last_page);

        let start = page * rows_per_page;
        let items: Vec<T> = filtered.into_iter().skip(start).take(rows_per_page).collect();
        let (from, to) = if count == 0 {
            (0, 0)
        } else {
            (start + 1, start + items.len())
        };

        Page {
            items,
            count,
            page,
            rows_per_page,
            from,
            to,
        }
    }
}

/// Display form of a spot in the admin table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpotRow {
    pub id: String,
    pub name: String,
    pub address: String,
    pub category_label: &'static str,
    pub visibility_label: String,
    pub is_visible: bool,
    pub created: String,
}

impl SpotRow {
    pub fn new(spot: &Spot, i18n: &I18n) -> Self {
        Self {
            id: spot.id.clone(),
            name: spot.name.clone(),
            address: spot.address.clone(),
            category_label: spot.category.label(),
            visibility_label: visibility_label(spot.is_visible, i18n),
            is_visible: spot.is_visible,
            created: format_date_ja(spot.created_at),
        }
    }
}

/// Display form of a review in the admin table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRow {
    pub id: String,
    pub spot_name: String,
    pub comment: String,
    pub visibility_label: String,
    pub is_visible: bool,
    pub created: String,
}

impl ReviewRow {
    pub fn new(review: &Review, i18n: &I18n) -> Self {
        Self {
            id: review.id.clone(),
            spot_name: review
                .spot_name
                .clone()
                .unwrap_or_else(|| i18n.t_default("Admin.unknownSpot", None)),
            comment: review.comment.clone(),
            visibility_label: visibility_label(review.is_visible, i18n),
            is_visible: review.is_visible,
            created: format_date_ja(review.created_at),
        }
    }
}

fn visibility_label(is_visible: bool, i18n: &I18n) -> String {
    let key = if is_visible { "Admin.visible" } else { "Admin.hidden" };
    i18n.t_default(key, None)
}

#[derive(Clone)]
pub struct ModerationService {
    backend: Arc<dyn CatalogBackend>,
    cache: Arc<RwLock<QueryCache>>,
    admin_settings: SharedAdminSettings,
}

impl ModerationService {
    pub fn new(
        backend: Arc<dyn CatalogBackend>,
        cache: Arc<RwLock<QueryCache>>,
        admin_settings: SharedAdminSettings,
    ) -> Self {
        Self {
            backend,
            cache,
            admin_settings,
        }
    }

    /// Admin data, fetched on first use and served from the cache after
    pub async fn load(&self) -> Result<AdminData> {
        if let Some(data) = self.cache.read().await.view() {
            return Ok(data);
        }

        let data = self.backend.fetch_admin_data().await?;
        info!(
            spots = data.spots.len(),
            reviews = data.reviews.len(),
            "Admin data loaded"
        );

        let mut cache = self.cache.write().await;
        cache.set_confirmed(data);
        Ok(cache.view().unwrap_or_default())
    }

    /// Drop cached admin data so the next load refetches
    pub async fn invalidate(&self) {
        self.cache.write().await.invalidate();
    }

    pub async fn stats(&self) -> Result<AdminStats> {
        Ok(AdminStats::compute(&self.load().await?))
    }

    pub async fn settings(&self) -> AdminSettings {
        self.admin_settings.read().await.clone()
    }

    pub async fn save_settings(&self, settings: AdminSettings) -> Result<AdminSettings> {
        settings.validate().map_err(|e| {
            log_validation_failure("admin_settings", e.field, &e.message);
            KidSpotsError::from(e)
        })?;

        self.backend
            .save_settings()
            .await
            .map_err(|e| KidSpotsError::MutationFailed {
                operation: MutationKind::SaveSettings,
                reason: e.to_string(),
            })?;

        *self.admin_settings.write().await = settings.clone();
        log_admin_action(
            "save_settings",
            None,
            Some(if settings.auto_approval { "auto_approval=on" } else { "auto_approval=off" }),
        );
        Ok(settings)
    }
}

//! Browsing state
//!
//! `AppStore` holds the criteria and UI flags shared by the browsing views.
//! It is created once per session and handed to whatever needs it.

use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::models::{AgeRange, Amenity, Category};
use crate::search::{AmenityRequirement, SpotFilters};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppStore {
    filters: SpotFilters,
    search_query: String,
    filter_drawer_open: bool,
    liked_reviews: HashSet<String>,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drawer criteria, without the search box text
    pub fn filters(&self) -> &SpotFilters {
        &self.filters
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Everything the filter engine needs: drawer criteria plus search text
    pub fn criteria(&self) -> SpotFilters {
        SpotFilters {
            query: self.search_query.clone(),
            ..self.filters.clone()
        }
    }

    pub fn set_filters(&mut self, filters: SpotFilters) {
        self.filters = SpotFilters {
            query: String::new(),
            ..filters
        };
    }

    pub fn toggle_category(&mut self, category: Category) {
        if !self.filters.categories.remove(&category) {
            self.filters.categories.insert(category);
        }
    }

    pub fn set_amenity(&mut self, amenity: Amenity, requirement: AmenityRequirement) {
        self.filters.set_amenity(amenity, requirement);
    }

    pub fn set_indoor(&mut self, indoor: Option<bool>) {
        self.filters.indoor = indoor;
    }

    pub fn set_age_range(&mut self, age_range: AgeRange) {
        self.filters.age_range = age_range;
    }

    pub fn clear_filters(&mut self) {
        self.filters = SpotFilters::default();
        debug!("Filters cleared");
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.active_filter_count()
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn is_filter_drawer_open(&self) -> bool {
        self.filter_drawer_open
    }

    pub fn open_filter_drawer(&mut self) {
        self.filter_drawer_open = true;
    }

    pub fn close_filter_drawer(&mut self) {
        self.filter_drawer_open = false;
    }

    /// Flip the like on a review; returns the new state
    pub fn toggle_review_like(&mut self, review_id: &str) -> bool {
        if self.liked_reviews.remove(review_id) {
            false
        } else {
            self.liked_reviews.insert(review_id.to_string());
            true
        }
    }

    pub fn is_review_liked(&self, review_id: &str) -> bool {
        self.liked_reviews.contains(review_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criteria_combines_filters_and_query() {
        let mut store = AppStore::new();
        store.toggle_category(Category::Park);
        store.set_search_query("渋谷");

        let criteria = store.criteria();
        assert!(criteria.categories.contains(&Category::Park));
        assert_eq!(criteria.query, "渋谷");
        assert!(store.filters().query.is_empty());
    }

    #[test]
    fn test_toggle_category_twice_clears_it() {
        let mut store = AppStore::new();
        store.toggle_category(Category::Cafe);
        store.toggle_category(Category::Cafe);
        assert!(store.filters().categories.is_empty());
    }

    #[test]
    fn test_clear_filters_keeps_search_text() {
        let mut store = AppStore::new();
        store.set_indoor(Some(true));
        store.set_search_query("公園");
        store.clear_filters();
        assert_eq!(store.active_filter_count(), 0);
        assert_eq!(store.search_query(), "公園");
    }

    #[test]
    fn test_review_like_toggle() {
        let mut store = AppStore::new();
        assert!(store.toggle_review_like("1"));
        assert!(store.is_review_liked("1"));
        assert!(!store.toggle_review_like("1"));
        assert!(!store.is_review_liked("1"));
    }

    #[test]
    fn test_drawer_flags() {
        let mut store = AppStore::new();
        store.open_filter_drawer();
        assert!(store.is_filter_drawer_open());
        store.close_filter_drawer();
        assert!(!store.is_filter_drawer_open());
    }
}

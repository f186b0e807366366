//! Venue filter engine
//!
//! Pure predicate filtering over the catalog. Results keep the order of the
//! input collection.

use std::collections::{BTreeMap, BTreeSet};
use serde::{Deserialize, Serialize};
use crate::models::{AgeRange, Amenity, Category, Review, Spot};
use crate::utils::helpers::contains_ignore_case;

/// Per-amenity criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmenityRequirement {
    Require,
    Forbid,
    #[default]
    Ignore,
}

impl AmenityRequirement {
    fn accepts(&self, present: bool) -> bool {
        match self {
            AmenityRequirement::Require => present,
            AmenityRequirement::Forbid => !present,
            AmenityRequirement::Ignore => true,
        }
    }
}

/// Browsing criteria applied to the visible catalog
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpotFilters {
    /// Empty selection means every category
    pub categories: BTreeSet<Category>,
    /// Amenities missing from the map are ignored
    pub amenities: BTreeMap<Amenity, AmenityRequirement>,
    pub indoor: Option<bool>,
    pub age_range: AgeRange,
    pub query: String,
}

impl SpotFilters {
    pub fn amenity(&self, amenity: Amenity) -> AmenityRequirement {
        self.amenities.get(&amenity).copied().unwrap_or_default()
    }

    pub fn set_amenity(&mut self, amenity: Amenity, requirement: AmenityRequirement) {
        match requirement {
            AmenityRequirement::Ignore => {
                self.amenities.remove(&amenity);
            }
            other => {
                self.amenities.insert(amenity, other);
            }
        }
    }

    pub fn is_default(&self) -> bool {
        self.active_filter_count() == 0 && self.query.trim().is_empty()
    }

    /// Number of active drawer criteria, search text excluded
    pub fn active_filter_count(&self) -> usize {
        let amenity_count = self
            .amenities
            .values()
            .filter(|r| **r != AmenityRequirement::Ignore)
            .count();
        let indoor = usize::from(self.indoor.is_some());
        let age = usize::from(self.age_range != AgeRange::FULL);

        self.categories.len() + amenity_count + indoor + age
    }

    /// Whether a single spot satisfies every active criterion
    pub fn matches(&self, spot: &Spot) -> bool {
        if !spot.is_visible {
            return false;
        }

        if !self.categories.is_empty() && !self.categories.contains(&spot.category) {
            return false;
        }

        let amenities_ok = self
            .amenities
            .iter()
            .all(|(amenity, requirement)| requirement.accepts(spot.amenities.has(*amenity)));
        if !amenities_ok {
            return false;
        }

        if let Some(indoor) = self.indoor {
            if spot.indoor != indoor {
                return false;
            }
        }

        if !spot.age_range.overlaps(&self.age_range) {
            return false;
        }

        spot_matches_query(spot, &self.query)
    }
}

/// Apply criteria to a collection, preserving input order
pub fn filter_spots(spots: &[Spot], filters: &SpotFilters) -> Vec<Spot> {
    spots.iter().filter(|s| filters.matches(s)).cloned().collect()
}

/// Case-insensitive match on name OR address; blank query matches everything
pub fn spot_matches_query(spot: &Spot, query: &str) -> bool {
    matches_query(&[spot.name.as_str(), spot.address.as_str()], query)
}

/// Case-insensitive match on comment OR owning spot name
pub fn review_matches_query(review: &Review, query: &str) -> bool {
    matches_query(
        &[review.comment.as_str(), review.spot_name.as_deref().unwrap_or("")],
        query,
    )
}

/// True when the query is blank or any field contains it
pub fn matches_query(fields: &[&str], query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || fields.iter().any(|field| contains_ignore_case(field, query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed::mock_spots;

    fn ids(spots: &[Spot]) -> Vec<&str> {
        spots.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_default_filters_return_every_visible_spot() {
        let mut spots = mock_spots();
        spots[3].is_visible = false;

        let result = filter_spots(&spots, &SpotFilters::default());
        assert_eq!(ids(&result), vec!["1", "2", "3", "5", "6"]);
    }

    #[test]
    fn test_category_filter_keeps_insertion_order() {
        let filters = SpotFilters {
            categories: [Category::Park].into_iter().collect(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_spots(&mock_spots(), &filters)), vec!["1", "6"]);
    }

    #[test]
    fn test_age_overlap() {
        let spots = mock_spots();
        let mut filters = SpotFilters {
            age_range: AgeRange::new(8, 12).unwrap(),
            ..Default::default()
        };
        assert!(ids(&filter_spots(&spots, &filters)).contains(&"6"));

        filters.age_range = AgeRange::new(11, 18).unwrap();
        let result = filter_spots(&spots, &filters);
        assert!(!ids(&result).contains(&"6"));
        assert!(!ids(&result).contains(&"2"));
    }

    #[test]
    fn test_query_matches_address_independently() {
        let filters = SpotFilters {
            query: "渋谷".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_spots(&mock_spots(), &filters)), vec!["1"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let mut spots = mock_spots();
        spots[0].name = "Central PARK".to_string();
        let filters = SpotFilters {
            query: "park".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_spots(&spots, &filters)), vec!["1"]);
    }

    #[test]
    fn test_required_and_forbidden_amenities() {
        let mut filters = SpotFilters::default();
        filters.set_amenity(Amenity::NursingRoom, AmenityRequirement::Require);
        assert_eq!(ids(&filter_spots(&mock_spots(), &filters)), vec!["2", "3", "4"]);

        filters.set_amenity(Amenity::NursingRoom, AmenityRequirement::Forbid);
        assert_eq!(ids(&filter_spots(&mock_spots(), &filters)), vec!["1", "5", "6"]);

        filters.set_amenity(Amenity::NursingRoom, AmenityRequirement::Ignore);
        assert!(filters.amenities.is_empty());
    }

    #[test]
    fn test_indoor_filter() {
        let filters = SpotFilters {
            indoor: Some(false),
            ..Default::default()
        };
        assert_eq!(ids(&filter_spots(&mock_spots(), &filters)), vec!["1", "6"]);
    }

    #[test]
    fn test_active_filter_count() {
        let mut filters = SpotFilters::default();
        assert_eq!(filters.active_filter_count(), 0);
        assert!(filters.is_default());

        filters.categories.insert(Category::Cafe);
        filters.indoor = Some(true);
        filters.set_amenity(Amenity::Sink, AmenityRequirement::Require);
        filters.age_range = AgeRange::new(0, 6).unwrap();
        assert_eq!(filters.active_filter_count(), 4);
    }

    #[test]
    fn test_review_query_matches_spot_name() {
        let review = Review {
            id: "1".to_string(),
            spot_id: "1".to_string(),
            comment: "遊具が新しい".to_string(),
            is_visible: true,
            created_at: chrono::Utc::now(),
            spot_name: Some("中央公園".to_string()),
        };
        assert!(review_matches_query(&review, "中央"));
        assert!(review_matches_query(&review, "遊具"));
        assert!(!review_matches_query(&review, "図書館"));
    }
}

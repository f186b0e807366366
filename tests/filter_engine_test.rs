//! Filter engine properties and browsing scenarios

mod helpers;

use helpers::*;
use proptest::prelude::*;
use KidSpots::{
    database::seed::mock_spots,
    models::{Amenity, AmenitySet, Category, Spot},
    search::{AmenityRequirement, SpotFilters, filter_spots},
};

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn age_strategy() -> impl Strategy<Value = (u8, u8)> {
    (0u8..=18, 0u8..=18).prop_map(|(a, b)| (a.min(b), a.max(b)))
}

fn amenity_set_strategy() -> impl Strategy<Value = AmenitySet> {
    prop::collection::vec(any::<bool>(), 6).prop_map(|flags| {
        let mut set = AmenitySet::default();
        for (amenity, flag) in Amenity::ALL.iter().zip(flags) {
            set.set(*amenity, flag);
        }
        set
    })
}

prop_compose! {
    fn spot_strategy()(
        id in 0u32..10_000,
        category in category_strategy(),
        ages in age_strategy(),
        indoor in any::<bool>(),
        amenities in amenity_set_strategy(),
        is_visible in any::<bool>(),
        name in prop::sample::select(vec!["中央公園", "Kids Cafe", "図書館", "Family MALL"]),
    ) -> Spot {
        let mut spot = create_test_spot(&id.to_string(), name, category, ages, indoor);
        spot.amenities = amenities;
        spot.is_visible = is_visible;
        spot
    }
}

fn requirement_strategy() -> impl Strategy<Value = AmenityRequirement> {
    prop_oneof![
        Just(AmenityRequirement::Require),
        Just(AmenityRequirement::Forbid),
        Just(AmenityRequirement::Ignore),
    ]
}

prop_compose! {
    fn filters_strategy()(
        categories in prop::collection::btree_set(category_strategy(), 0..3),
        requirements in prop::collection::vec(requirement_strategy(), 6),
        indoor in prop::option::of(any::<bool>()),
        ages in age_strategy(),
        query in prop::sample::select(vec!["", "公園", "cafe", "mall", "テスト区1"]),
    ) -> SpotFilters {
        let mut filters = SpotFilters {
            categories,
            indoor,
            age_range: age(ages.0, ages.1),
            query: query.to_string(),
            ..Default::default()
        };
        for (amenity, requirement) in Amenity::ALL.iter().zip(requirements) {
            filters.set_amenity(*amenity, requirement);
        }
        filters
    }
}

fn satisfies(spot: &Spot, filters: &SpotFilters) -> bool {
    let query = filters.query.to_lowercase();
    spot.is_visible
        && (filters.categories.is_empty() || filters.categories.contains(&spot.category))
        && Amenity::ALL.iter().all(|a| match filters.amenity(*a) {
            AmenityRequirement::Require => spot.amenities.has(*a),
            AmenityRequirement::Forbid => !spot.amenities.has(*a),
            AmenityRequirement::Ignore => true,
        })
        && filters.indoor.map_or(true, |indoor| spot.indoor == indoor)
        && spot.age_range.min() <= filters.age_range.max()
        && spot.age_range.max() >= filters.age_range.min()
        && (query.is_empty()
            || spot.name.to_lowercase().contains(&query)
            || spot.address.to_lowercase().contains(&query))
}

proptest! {
    #[test]
    fn prop_result_is_exactly_the_matching_subsequence(
        spots in prop::collection::vec(spot_strategy(), 0..30),
        filters in filters_strategy(),
    ) {
        let expected: Vec<Spot> = spots.iter().filter(|s| satisfies(s, &filters)).cloned().collect();
        prop_assert_eq!(filter_spots(&spots, &filters), expected);
    }

    #[test]
    fn prop_default_filters_return_every_visible_spot(
        spots in prop::collection::vec(spot_strategy(), 0..30),
    ) {
        let visible: Vec<Spot> = spots.iter().filter(|s| s.is_visible).cloned().collect();
        prop_assert_eq!(filter_spots(&spots, &SpotFilters::default()), visible);
    }

    #[test]
    fn prop_filtering_is_idempotent(
        spots in prop::collection::vec(spot_strategy(), 0..30),
        filters in filters_strategy(),
    ) {
        let once = filter_spots(&spots, &filters);
        prop_assert_eq!(filter_spots(&once, &filters), once.clone());
    }
}

#[test]
fn test_park_filter_on_mock_catalog() {
    let filters = SpotFilters {
        categories: [Category::Park].into_iter().collect(),
        ..Default::default()
    };
    let names: Vec<String> = filter_spots(&mock_spots(), &filters).into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["中央公園", "みどりの広場"]);
}

#[test]
fn test_age_interval_is_overlap_not_containment() {
    let spot = create_test_spot("1", "広場", Category::Park, (2, 10), false);
    let spots = vec![spot];

    let overlapping = SpotFilters {
        age_range: age(8, 12),
        ..Default::default()
    };
    assert_eq!(filter_spots(&spots, &overlapping).len(), 1);

    let disjoint = SpotFilters {
        age_range: age(11, 18),
        ..Default::default()
    };
    assert!(filter_spots(&spots, &disjoint).is_empty());

    let touching = SpotFilters {
        age_range: age(10, 10),
        ..Default::default()
    };
    assert_eq!(filter_spots(&spots, &touching).len(), 1);
}

#[test]
fn test_query_matches_address_when_name_does_not() {
    let filters = SpotFilters {
        query: "渋谷".to_string(),
        ..Default::default()
    };
    let result = filter_spots(&mock_spots(), &filters);
    assert_eq!(result.len(), 1);
    assert!(!result[0].name.contains("渋谷"));
    assert!(result[0].address.contains("渋谷"));
}

#[tokio::test]
async fn test_store_criteria_drive_the_spot_service() {
    let ctx = TestContext::new();
    {
        let mut store = ctx.context.store.write().await;
        store.toggle_category(Category::Park);
        store.set_search_query("杉並");
    }

    let criteria = ctx.context.store.read().await.criteria();
    let spots = ctx.services().spot_service.fetch(&criteria).await.unwrap();
    assert_eq!(spots.len(), 1);
    assert_eq!(spots[0].id, "6");
}

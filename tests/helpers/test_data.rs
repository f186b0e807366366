//! Fixture builders for spots, drafts and attachments

use chrono::{TimeZone, Utc};
use KidSpots::{
    models::{AgeRange, AmenitySet, Category, Spot, SpotDraft},
    state::StagedFile,
};

/// A visible spot with only the fields the filter engine looks at set
pub fn create_test_spot(id: &str, name: &str, category: Category, ages: (u8, u8), indoor: bool) -> Spot {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Spot {
        id: id.to_string(),
        name: name.to_string(),
        category,
        address: format!("東京都テスト区{}", id),
        google_map_url: None,
        age_range: age(ages.0, ages.1),
        indoor,
        amenities: AmenitySet::default(),
        opening_hours: None,
        is_visible: true,
        created_at: created,
        updated_at: created,
        first_image_url: None,
    }
}

/// A draft that passes every wizard step
pub fn valid_draft(name: &str) -> SpotDraft {
    SpotDraft {
        name: name.to_string(),
        category: Category::Center,
        address: "東京都目黒区中目黒1-2-3".to_string(),
        google_map_url: "https://maps.google.com/?q=nakameguro".to_string(),
        target_age_min: 0,
        target_age_max: 12,
        indoor: true,
        opening_hours: "9:00-17:00".to_string(),
        ..Default::default()
    }
}

pub fn photo(name: &str) -> StagedFile {
    StagedFile::new(name, "image/jpeg", 512 * 1024)
}

pub fn pdf(name: &str) -> StagedFile {
    StagedFile::new(name, "application/pdf", 64 * 1024)
}

pub fn age(min: u8, max: u8) -> AgeRange {
    AgeRange::new(min, max).expect("fixture age range must be valid")
}

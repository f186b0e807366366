//! Bundled sample dataset
//!
//! Six Tokyo venues with four reviews and two stored images.

use chrono::{DateTime, TimeZone, Utc};
use crate::models::{AgeRange, AmenitySet, Category, Review, Spot, SpotImage};
use super::connection::Catalog;

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

fn pexels(path: &str) -> Option<String> {
    Some(format!(
        "https://images.pexels.com/photos/{}?auto=compress&cs=tinysrgb&w=800",
        path
    ))
}

/// Evaluated in const blocks, so a bad literal fails the build
const fn ages(min: u8, max: u8) -> AgeRange {
    match AgeRange::checked(min, max) {
        Some(range) => range,
        None => panic!("seed age range out of bounds"),
    }
}

#[allow(clippy::too_many_arguments)]
fn spot(
    id: &str,
    name: &str,
    category: Category,
    address: &str,
    age_range: AgeRange,
    indoor: bool,
    amenities: AmenitySet,
    opening_hours: &str,
    created: u32,
    image: &str,
) -> Spot {
    Spot {
        id: id.to_string(),
        name: name.to_string(),
        category,
        address: address.to_string(),
        google_map_url: Some(format!("https://maps.google.com/?q={}", name.replace(' ', ""))),
        age_range,
        indoor,
        amenities,
        opening_hours: Some(opening_hours.to_string()),
        is_visible: true,
        created_at: day(created),
        updated_at: day(created),
        first_image_url: pexels(image),
    }
}

const ALL_AMENITIES: AmenitySet = AmenitySet {
    has_nursing_room: true,
    has_diaper_space: true,
    has_stroller_space: true,
    has_kids_space: true,
    has_sink: true,
    has_diaper_trash: true,
};

pub fn mock_spots() -> Vec<Spot> {
    vec![
        spot(
            "1",
            "中央公園",
            Category::Park,
            "東京都渋谷区神南1-1-1",
            const { ages(0, 12) },
            false,
            AmenitySet { has_nursing_room: false, ..ALL_AMENITIES },
            "6:00-22:00",
            1,
            "1108099/pexels-photo-1108099.jpeg",
        ),
        spot(
            "2",
            "ママカフェ ひなた",
            Category::Cafe,
            "東京都新宿区西新宿2-2-2",
            const { ages(0, 6) },
            true,
            ALL_AMENITIES,
            "10:00-18:00",
            2,
            "302899/pexels-photo-302899.jpeg",
        ),
        spot(
            "3",
            "区立児童館",
            Category::Center,
            "東京都世田谷区三軒茶屋3-3-3",
            const { ages(0, 18) },
            true,
            ALL_AMENITIES,
            "9:00-17:00",
            3,
            "8613089/pexels-photo-8613089.jpeg",
        ),
        spot(
            "4",
            "ファミリーモール",
            Category::Mall,
            "東京都港区六本木4-4-4",
            const { ages(0, 15) },
            true,
            ALL_AMENITIES,
            "10:00-21:00",
            4,
            "264507/pexels-photo-264507.jpeg",
        ),
        spot(
            "5",
            "市立図書館",
            Category::Library,
            "東京都品川区大崎5-5-5",
            const { ages(0, 18) },
            true,
            AmenitySet {
                has_nursing_room: false,
                has_sink: false,
                has_diaper_trash: false,
                ..ALL_AMENITIES
            },
            "9:00-20:00",
            5,
            "159711/books-bookstore-book-reading-159711.jpeg",
        ),
        spot(
            "6",
            "みどりの広場",
            Category::Park,
            "東京都杉並区荻窪6-6-6",
            const { ages(2, 10) },
            false,
            AmenitySet {
                has_kids_space: true,
                ..AmenitySet::default()
            },
            "24時間",
            6,
            "163064/play-stone-network-networked-interactive-163064.jpeg",
        ),
    ]
}

pub fn mock_reviews() -> Vec<Review> {
    let review = |id: &str, spot_id: &str, spot_name: &str, comment: &str, created: u32| Review {
        id: id.to_string(),
        spot_id: spot_id.to_string(),
        comment: comment.to_string(),
        is_visible: true,
        created_at: day(created),
        spot_name: Some(spot_name.to_string()),
    };

    vec![
        review("1", "1", "中央公園", "子供が楽しく遊べる素晴らしい公園です。設備も充実していて安心です。", 10),
        review("2", "2", "ママカフェ ひなた", "ママ友とのランチに最適！授乳室もあって助かります。", 11),
        review("3", "1", "中央公園", "遊具が新しくて安全性も高いです。おすすめです！", 12),
        review("4", "3", "区立児童館", "スタッフの方が親切で、子供も楽しそうでした。", 13),
    ]
}

pub fn mock_images() -> Vec<SpotImage> {
    vec![
        SpotImage {
            id: "1".to_string(),
            spot_id: "1".to_string(),
            file_path: "mock/park1.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            file_size: Some(1_024_000),
            created_at: day(1),
        },
        SpotImage {
            id: "2".to_string(),
            spot_id: "2".to_string(),
            file_path: "mock/cafe1.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            file_size: Some(2_048_000),
            created_at: day(2),
        },
    ]
}

pub fn mock_catalog() -> Catalog {
    Catalog {
        spots: mock_spots(),
        reviews: mock_reviews(),
        images: mock_images(),
    }
}

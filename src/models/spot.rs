//! Spot (venue) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::utils::errors::ValidationError;
use crate::utils::helpers::normalize_whitespace;
use super::amenity::AmenitySet;
use super::category::Category;

/// Oldest target age a venue can declare
pub const MAX_AGE: u8 = 18;

/// Inclusive target age interval, always `min <= max <= MAX_AGE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct AgeRange {
    min: u8,
    max: u8,
}

impl AgeRange {
    pub const FULL: AgeRange = AgeRange { min: 0, max: MAX_AGE };

    pub fn new(min: u8, max: u8) -> Result<Self, ValidationError> {
        if max > MAX_AGE {
            return Err(ValidationError::new(
                "target_age_max",
                format!("対象年齢は{}歳以下で指定してください", MAX_AGE),
            ));
        }
        if min > max {
            return Err(ValidationError::new(
                "target_age_min",
                "対象年齢の下限は上限以下にしてください",
            ));
        }
        Ok(Self { min, max })
    }

    /// `new` for constant contexts, where the error detail is not needed
    pub const fn checked(min: u8, max: u8) -> Option<Self> {
        if max > MAX_AGE || min > max {
            None
        } else {
            Some(Self { min, max })
        }
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    /// True interval intersection
    pub fn overlaps(&self, other: &AgeRange) -> bool {
        self.min <= other.max && self.max >= other.min
    }
}

impl Default for AgeRange {
    fn default() -> Self {
        AgeRange::FULL
    }
}

impl TryFrom<(u8, u8)> for AgeRange {
    type Error = ValidationError;

    fn try_from((min, max): (u8, u8)) -> Result<Self, Self::Error> {
        AgeRange::new(min, max)
    }
}

impl From<AgeRange> for (u8, u8) {
    fn from(range: AgeRange) -> Self {
        (range.min, range.max)
    }
}

/// A childcare-friendly venue
///
/// The stored form keeps the flat `target_age_min` / `target_age_max` keys;
/// a record with an invalid interval does not deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SpotRecord", into = "SpotRecord")]
pub struct Spot {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub address: String,
    pub google_map_url: Option<String>,
    pub age_range: AgeRange,
    pub indoor: bool,
    pub amenities: AmenitySet,
    pub opening_hours: Option<String>,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub first_image_url: Option<String>,
}

impl Spot {
    /// Build a stored spot from a validated submission
    pub fn from_new(id: String, new: NewSpot, is_visible: bool, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            category: new.category,
            address: new.address,
            google_map_url: new.google_map_url,
            age_range: new.age_range,
            indoor: new.indoor,
            amenities: new.amenities,
            opening_hours: new.opening_hours,
            is_visible,
            created_at: now,
            updated_at: now,
            first_image_url: None,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct SpotRecord {
    id: String,
    name: String,
    category: Category,
    address: String,
    google_map_url: Option<String>,
    target_age_min: u8,
    target_age_max: u8,
    indoor: bool,
    #[serde(flatten)]
    amenities: AmenitySet,
    opening_hours: Option<String>,
    is_visible: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    first_image_url: Option<String>,
}

impl TryFrom<SpotRecord> for Spot {
    type Error = ValidationError;

    fn try_from(record: SpotRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            age_range: AgeRange::new(record.target_age_min, record.target_age_max)?,
            id: record.id,
            name: record.name,
            category: record.category,
            address: record.address,
            google_map_url: record.google_map_url,
            indoor: record.indoor,
            amenities: record.amenities,
            opening_hours: record.opening_hours,
            is_visible: record.is_visible,
            created_at: record.created_at,
            updated_at: record.updated_at,
            first_image_url: record.first_image_url,
        })
    }
}

impl From<Spot> for SpotRecord {
    fn from(spot: Spot) -> Self {
        Self {
            id: spot.id,
            name: spot.name,
            category: spot.category,
            address: spot.address,
            google_map_url: spot.google_map_url,
            target_age_min: spot.age_range.min(),
            target_age_max: spot.age_range.max(),
            indoor: spot.indoor,
            amenities: spot.amenities,
            opening_hours: spot.opening_hours,
            is_visible: spot.is_visible,
            created_at: spot.created_at,
            updated_at: spot.updated_at,
            first_image_url: spot.first_image_url,
        }
    }
}

/// Raw form data collected by the submission wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotDraft {
    pub name: String,
    pub category: Category,
    pub address: String,
    pub google_map_url: String,
    pub target_age_min: u8,
    pub target_age_max: u8,
    pub indoor: bool,
    pub amenities: AmenitySet,
    pub opening_hours: String,
}

impl Default for SpotDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: Category::Park,
            address: String::new(),
            google_map_url: String::new(),
            target_age_min: 0,
            target_age_max: 6,
            indoor: false,
            amenities: AmenitySet::default(),
            opening_hours: String::new(),
        }
    }
}

impl SpotDraft {
    pub fn check_name(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("name", "施設名は必須です"));
        }
        Ok(())
    }

    pub fn check_address(&self) -> Result<(), ValidationError> {
        if self.address.trim().is_empty() {
            return Err(ValidationError::new("address", "住所は必須です"));
        }
        Ok(())
    }

    /// Check the draft against the submission schema
    pub fn validate(&self) -> Result<NewSpot, ValidationError> {
        self.check_name()?;
        self.check_address()?;
        let name = normalize_whitespace(&self.name);
        let address = self.address.trim();

        let age_range = AgeRange::new(self.target_age_min, self.target_age_max)?;

        let google_map_url = match self.google_map_url.trim() {
            "" => None,
            raw => {
                url::Url::parse(raw).map_err(|_| {
                    ValidationError::new("google_map_url", "地図URLの形式が正しくありません")
                })?;
                Some(raw.to_string())
            }
        };

        let opening_hours = match self.opening_hours.trim() {
            "" => None,
            hours => Some(hours.to_string()),
        };

        Ok(NewSpot {
            name,
            category: self.category,
            address: address.to_string(),
            google_map_url,
            age_range,
            indoor: self.indoor,
            amenities: self.amenities,
            opening_hours,
        })
    }
}

/// A validated submission ready to be written to the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSpot {
    pub name: String,
    pub category: Category,
    pub address: String,
    pub google_map_url: Option<String>,
    pub age_range: AgeRange,
    pub indoor: bool,
    pub amenities: AmenitySet,
    pub opening_hours: Option<String>,
}

//! Venue category model

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::utils::errors::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Park,
    Cafe,
    Center,
    Mall,
    Library,
    Other,
}

impl Category {
    /// Display order used by filters, forms and statistics
    pub const ALL: [Category; 6] = [
        Category::Park,
        Category::Cafe,
        Category::Center,
        Category::Mall,
        Category::Library,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Park => "park",
            Category::Cafe => "cafe",
            Category::Center => "center",
            Category::Mall => "mall",
            Category::Library => "library",
            Category::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Park => "公園",
            Category::Cafe => "カフェ",
            Category::Center => "児童館",
            Category::Mall => "ショッピングモール",
            Category::Library => "図書館",
            Category::Other => "その他",
        }
    }

    /// Compact label for chart legends
    pub fn short_label(&self) -> &'static str {
        match self {
            Category::Mall => "モール",
            other => other.label(),
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Category::Park => "#43e97b",
            Category::Cafe => "#fa709a",
            Category::Center => "#667eea",
            Category::Mall => "#f093fb",
            Category::Library => "#4facfe",
            Category::Other => "#a8edea",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Park => "🌳",
            Category::Cafe => "☕",
            Category::Center => "🏢",
            Category::Mall => "🛍️",
            Category::Library => "📚",
            Category::Other => "📍",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::Park => "屋外の遊び場や自然スペース",
            Category::Cafe => "親子で楽しめる飲食店",
            Category::Center => "子供向けの公共施設",
            Category::Mall => "商業施設・ショッピングセンター",
            Category::Library => "本や学習スペースがある施設",
            Category::Other => "その他の子育て関連施設",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Park
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ValidationError::new("category", format!("不明なカテゴリです: {}", s)))
    }
}

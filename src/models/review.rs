//! Review model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::utils::errors::ValidationError;

/// Longest comment a visitor can post, in characters
pub const REVIEW_MAX_CHARS: usize = 126;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub spot_id: String,
    pub comment: String,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    /// Denormalized name of the owning spot, for moderation tables
    pub spot_name: Option<String>,
}

impl Review {
    pub fn from_new(id: String, new: NewReview, spot_name: Option<String>, is_visible: bool, now: DateTime<Utc>) -> Self {
        Self {
            id,
            spot_id: new.spot_id,
            comment: new.comment,
            is_visible,
            created_at: now,
            spot_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub spot_id: String,
    pub comment: String,
}

impl NewReview {
    pub fn new(spot_id: impl Into<String>, comment: &str) -> Result<Self, ValidationError> {
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(ValidationError::new("comment", "コメントを入力してください"));
        }
        if comment.chars().count() > REVIEW_MAX_CHARS {
            return Err(ValidationError::new(
                "comment",
                format!("コメントは{}文字以内で入力してください", REVIEW_MAX_CHARS),
            ));
        }
        Ok(Self {
            spot_id: spot_id.into(),
            comment: comment.to_string(),
        })
    }
}

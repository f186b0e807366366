//! Spot image model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotImage {
    pub id: String,
    pub spot_id: String,
    pub file_path: String,
    pub content_type: String,
    pub file_size: Option<u64>,
    pub created_at: DateTime<Utc>,
}

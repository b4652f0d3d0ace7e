use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Channel, Field};

/// A VOD record from the videos search endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub video_no: Field<u64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub video_title: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub video_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub video_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub publish_date: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub thumbnail_image_url: Field<String>,
    /// Length in seconds
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub duration: Field<u64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub read_count: Field<u64>,
    /// Publish time in epoch milliseconds
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub publish_date_at: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub category_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub video_category: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub video_category_value: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub adult: Field<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A video search hit: the video's own fields with its channel alongside
///
/// Serializes flat, e.g. `{"videoNo": 1, "videoTitle": "...", "channel": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResultVideo {
    #[serde(flatten)]
    pub video: Video,
    pub channel: Channel,
}

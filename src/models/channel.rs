use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Field;

/// A CHZZK channel as it appears in search responses
///
/// Keys without a typed field are kept in `extra`, so the record serializes back
/// unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub channel_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub channel_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub channel_image_url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub verified_mark: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub channel_description: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub follower_count: Field<u64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub open_live: Field<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Channel, Field};
use crate::error::{AppError, AppResult};

/// A live broadcast from the lives search endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Live {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub live_title: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub live_id: Field<u64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub live_image_url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub default_thumbnail_image_url: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub concurrent_user_count: Field<u64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub accumulate_count: Field<u64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub open_date: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub adult: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub chat_channel_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub category_type: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub live_category: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub live_category_value: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub tags: Field<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Live {
    /// Short label used in logs and errors
    pub fn label(&self) -> String {
        match (self.live_id.get(), self.live_title.get()) {
            (Some(id), _) => format!("live {}", id),
            (None, Some(title)) => format!("live \"{}\"", title),
            (None, None) => "untitled live".to_string(),
        }
    }
}

/// Live record exactly as the API sends it, playback still JSON-encoded
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLive {
    #[serde(default)]
    pub live_playback_json: Option<String>,
    #[serde(flatten)]
    pub live: Live,
}

impl ApiLive {
    /// Decodes the embedded playback document
    ///
    /// An absent or empty string yields `None` without a parse attempt.
    pub fn parse_playback(&self) -> AppResult<Option<Value>> {
        match self.live_playback_json.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|source| AppError::LivePlayback {
                    live: self.live.label(),
                    source,
                }),
        }
    }
}

/// A live search hit
///
/// `livePlaybackJson` is not retained; its parsed form sits in `livePlayback`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultLive {
    #[serde(flatten)]
    pub live: Live,
    pub live_playback: Option<Value>,
    pub channel: Channel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn api_live(playback: Value) -> ApiLive {
        serde_json::from_value(json!({
            "liveId": 77,
            "liveTitle": "late night rust",
            "concurrentUserCount": 42,
            "livePlaybackJson": playback,
        }))
        .unwrap()
    }

    #[test]
    fn test_playback_parsed() {
        let live = api_live(json!("{\"a\":1}"));
        assert_eq!(live.parse_playback().unwrap(), Some(json!({ "a": 1 })));
        assert_eq!(live.live.live_id, Field::Value(77));
    }

    #[test]
    fn test_empty_and_null_playback_skip_parsing() {
        assert_eq!(api_live(json!("")).parse_playback().unwrap(), None);
        assert_eq!(api_live(Value::Null).parse_playback().unwrap(), None);
    }

    #[test]
    fn test_invalid_playback_names_the_live() {
        let err = api_live(json!("{not json")).parse_playback().unwrap_err();
        match err {
            AppError::LivePlayback { live, .. } => assert_eq!(live, "live 77"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_null_title_is_kept() {
        let live: ApiLive = serde_json::from_value(json!({
            "liveId": 1,
            "liveTitle": null,
            "livePlaybackJson": "{\"a\":1}",
            "watchPartyTag": null,
            "blindType": "NONE"
        }))
        .unwrap();

        assert_eq!(live.live.live_title, Field::Null);
        assert_eq!(live.parse_playback().unwrap(), Some(json!({ "a": 1 })));
        assert_eq!(
            serde_json::to_value(&live.live).unwrap(),
            json!({
                "liveId": 1,
                "liveTitle": null,
                "watchPartyTag": null,
                "blindType": "NONE"
            })
        );
    }
}

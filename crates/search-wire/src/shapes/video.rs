//! Video search results, also embedded in web results.

use serde::{Deserialize, Serialize};

use super::common::{MetaUrl, Query, SearchResultBase, Thumbnail};
use crate::scalar::{null_default, Duration, Timestamp, ViewCount};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoSearchResponse {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub results: Vec<VideoResult>,
    #[serde(deserialize_with = "null_default")]
    pub mutated_by_goggles: bool,
    pub query: Option<Query>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoResult {
    #[serde(flatten)]
    pub base: SearchResultBase,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(rename = "video")]
    pub data: Option<VideoData>,
    #[serde(deserialize_with = "null_default")]
    pub meta_url: MetaUrl,
    pub thumbnail: Option<Thumbnail>,
    pub age: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoData {
    /// Running time, sent as `"MM:SS"` or `"HH:MM:SS"`.
    pub duration: Duration,
    /// View count, sent as a number or as `"12k"`-style text.
    pub views: ViewCount,
    #[serde(deserialize_with = "null_default")]
    pub creator: String,
    #[serde(deserialize_with = "null_default")]
    pub publisher: String,
    pub thumbnail: Option<Thumbnail>,
}

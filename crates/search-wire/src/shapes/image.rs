use serde::{Deserialize, Serialize};

use super::common::{ImageProperties, MetaUrl, Query, Thumbnail};
use crate::scalar::{null_default, Timestamp};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSearchResponse {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub results: Vec<ImageResult>,
    #[serde(deserialize_with = "null_default")]
    pub mutated_by_goggles: bool,
    pub query: Option<Query>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageResult {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub source: String,
    pub page_fetched: Timestamp,
    pub thumbnail: Option<Thumbnail>,
    pub properties: Option<ImageProperties>,
    pub meta_url: Option<MetaUrl>,
}

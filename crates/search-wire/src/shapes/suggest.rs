use serde::{Deserialize, Serialize};

use super::common::Query;
use crate::scalar::null_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestSearchResponse {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    pub query: Option<Query>,
    #[serde(deserialize_with = "null_default")]
    pub results: Vec<SuggestResult>,
}

/// One suggested query. `title`, `description` and `image` are only filled
/// for rich suggestions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestResult {
    #[serde(rename = "string", deserialize_with = "null_default")]
    pub query: String,
    #[serde(deserialize_with = "null_default")]
    pub is_entity: bool,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(rename = "img", deserialize_with = "null_default")]
    pub image: String,
}

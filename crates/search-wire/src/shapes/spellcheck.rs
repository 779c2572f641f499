use serde::{Deserialize, Serialize};

use super::common::Query;
use crate::scalar::null_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellcheckResponse {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    pub query: Option<Query>,
    #[serde(deserialize_with = "null_default")]
    pub results: Vec<SpellcheckResultItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellcheckResultItem {
    #[serde(deserialize_with = "null_default")]
    pub query: String,
}

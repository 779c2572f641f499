//! Summarizer results, fetched with the key a web search hands back.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{Image, MetaUrl};
use crate::scalar::{null_default, FlexibleNumber};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerResponse {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub summary: Vec<SummaryMessage>,
    pub enrichments: Option<SummaryEnrichments>,
    #[serde(deserialize_with = "null_default")]
    pub followups: Vec<String>,
    pub entities_info: Map<String, Value>,
}

/// The summarizer key attached to a web search response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Summarizer {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryMessage {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub data: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryEnrichments {
    #[serde(deserialize_with = "null_default")]
    pub raw: String,
    #[serde(deserialize_with = "null_default")]
    pub images: Vec<Image>,
    #[serde(deserialize_with = "null_default")]
    pub qa: Vec<SummaryAnswer>,
    #[serde(deserialize_with = "null_default")]
    pub entities: Vec<SummaryEntity>,
    #[serde(deserialize_with = "null_default")]
    pub context: Vec<SummaryContext>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryAnswer {
    #[serde(deserialize_with = "null_default")]
    pub answer: String,
    #[serde(deserialize_with = "null_default")]
    pub score: f32,
    pub highlight: Option<TextLocation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryEntity {
    #[serde(deserialize_with = "null_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub text: String,
    #[serde(deserialize_with = "null_default")]
    pub images: Vec<Image>,
    #[serde(deserialize_with = "null_default")]
    pub highlight: Vec<TextLocation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryContext {
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    pub meta_url: Option<MetaUrl>,
}

/// A character span in the summary text. Offsets are sometimes quoted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextLocation {
    pub start: FlexibleNumber,
    pub end: FlexibleNumber,
}

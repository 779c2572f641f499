//! Building blocks shared by several endpoints.

use serde::{Deserialize, Serialize};

use crate::scalar::{null_default, Timestamp};

/// A typed list of results with its section tag, e.g. `{"type": "search", "results": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de>"))]
pub struct ResultContainer<T> {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub results: Vec<T>,
    #[serde(deserialize_with = "null_default")]
    pub mutated_by_goggles: bool,
}

impl<T> Default for ResultContainer<T> {
    fn default() -> Self {
        ResultContainer {
            kind: String::new(),
            results: Vec::new(),
            mutated_by_goggles: false,
        }
    }
}

/// How the server understood the query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    #[serde(deserialize_with = "null_default")]
    pub original: String,
    #[serde(deserialize_with = "null_default")]
    pub show_strict_warning: bool,
    #[serde(deserialize_with = "null_default")]
    pub altered: String,
    #[serde(deserialize_with = "null_default")]
    pub safesearch: bool,
    #[serde(deserialize_with = "null_default")]
    pub is_navigational: bool,
    #[serde(deserialize_with = "null_default")]
    pub is_geolocal: bool,
    #[serde(deserialize_with = "null_default")]
    pub local_decision: String,
    #[serde(deserialize_with = "null_default")]
    pub local_locations_idx: i64,
    #[serde(deserialize_with = "null_default")]
    pub is_trending: bool,
    #[serde(deserialize_with = "null_default")]
    pub is_news_breaking: bool,
    #[serde(deserialize_with = "null_default")]
    pub ask_for_location: bool,
    pub language: Option<Language>,
    #[serde(deserialize_with = "null_default")]
    pub spellcheck_off: bool,
    #[serde(deserialize_with = "null_default")]
    pub country: String,
    #[serde(deserialize_with = "null_default")]
    pub bad_results: bool,
    #[serde(deserialize_with = "null_default")]
    pub should_fallback: bool,
    #[serde(deserialize_with = "null_default")]
    pub lat: String,
    #[serde(deserialize_with = "null_default")]
    pub long: String,
    #[serde(deserialize_with = "null_default")]
    pub postal_code: String,
    #[serde(deserialize_with = "null_default")]
    pub city: String,
    #[serde(deserialize_with = "null_default")]
    pub state: String,
    #[serde(deserialize_with = "null_default")]
    pub header_country: String,
    #[serde(deserialize_with = "null_default")]
    pub more_results_available: bool,
    #[serde(deserialize_with = "null_default")]
    pub custom_location_label: String,
    #[serde(deserialize_with = "null_default")]
    pub reddit_cluster: String,
    #[serde(deserialize_with = "null_default")]
    pub summary_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    #[serde(deserialize_with = "null_default")]
    pub main: String,
}

/// Fields every page-like result carries. Flattened into the richer result types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResultBase {
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub is_source_local: bool,
    #[serde(deserialize_with = "null_default")]
    pub is_source_both: bool,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    pub page_age: Timestamp,
    #[serde(deserialize_with = "null_default")]
    pub page_fetched: String,
    pub profile: Option<Profile>,
    #[serde(deserialize_with = "null_default")]
    pub language: String,
    #[serde(deserialize_with = "null_default")]
    pub family_friendly: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub long_name: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(rename = "img", deserialize_with = "null_default")]
    pub image: String,
}

/// A result URL split into its parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaUrl {
    #[serde(deserialize_with = "null_default")]
    pub scheme: String,
    #[serde(deserialize_with = "null_default")]
    pub netloc: String,
    #[serde(deserialize_with = "null_default")]
    pub hostname: String,
    #[serde(deserialize_with = "null_default")]
    pub favicon: String,
    #[serde(deserialize_with = "null_default")]
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thumbnail {
    #[serde(deserialize_with = "null_default")]
    pub src: String,
    #[serde(deserialize_with = "null_default")]
    pub height: i64,
    #[serde(deserialize_with = "null_default")]
    pub width: i64,
    #[serde(rename = "bg_color", deserialize_with = "null_default")]
    pub background_color: String,
    #[serde(deserialize_with = "null_default")]
    pub original: String,
    #[serde(deserialize_with = "null_default")]
    pub logo: bool,
    #[serde(deserialize_with = "null_default")]
    pub duplicated: bool,
    #[serde(deserialize_with = "null_default")]
    pub theme: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub thumbnail: Option<Thumbnail>,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    pub properties: Option<ImageProperties>,
    #[serde(deserialize_with = "null_default")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageProperties {
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub resized: String,
    #[serde(deserialize_with = "null_default")]
    pub height: i64,
    #[serde(deserialize_with = "null_default")]
    pub width: i64,
    #[serde(deserialize_with = "null_default")]
    pub format: String,
    #[serde(deserialize_with = "null_default")]
    pub content_size: String,
    #[serde(deserialize_with = "null_default")]
    pub placeholder: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rating {
    #[serde(rename = "ratingValue", deserialize_with = "null_default")]
    pub rating_value: f32,
    #[serde(rename = "bestRating", deserialize_with = "null_default")]
    pub best_rating: f32,
    #[serde(rename = "reviewCount", deserialize_with = "null_default")]
    pub review_count: i64,
    pub profile: Option<Profile>,
    #[serde(deserialize_with = "null_default")]
    pub is_tripadvisor: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    pub thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataProvider {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub long_name: String,
    #[serde(rename = "img", deserialize_with = "null_default")]
    pub image: String,
}

/// A measured quantity, e.g. a distance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Unit {
    #[serde(deserialize_with = "null_default")]
    pub value: f32,
    #[serde(deserialize_with = "null_default")]
    pub units: String,
}

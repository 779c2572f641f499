//! Web search results and the structured data hanging off them.
//!
//! Most sections are optional and only present when the server decided they
//! are relevant to the query. Sections whose shape the API leaves open
//! (`faq`, `locations`, `schemas`) are kept as raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{
    DataProvider, Image, MetaUrl, Organization, Person, Profile, Query, Rating, ResultContainer,
    SearchResultBase, Thumbnail, Unit,
};
use super::summarizer::Summarizer;
use super::video::{VideoData, VideoResult};
use crate::scalar::{null_default, Duration, FlexibleNumber, Timestamp};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebSearchResponse {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    pub discussions: Option<ResultContainer<DiscussionResult>>,
    pub faq: Value,
    pub infobox: Option<ResultContainer<GraphInfoBox>>,
    pub locations: Value,
    pub mixed: Option<Mixed>,
    pub news: Option<ResultContainer<NewsResult>>,
    pub query: Option<Query>,
    pub videos: Option<ResultContainer<VideoResult>>,
    pub web: Option<ResultContainer<SearchResult>>,
    pub summarizer: Option<Summarizer>,
}

/// Suggested ranking of the sections across the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mixed {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub main: Vec<ResultReference>,
    #[serde(deserialize_with = "null_default")]
    pub top: Vec<ResultReference>,
    #[serde(deserialize_with = "null_default")]
    pub side: Vec<ResultReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultReference {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub index: i64,
    #[serde(deserialize_with = "null_default")]
    pub all: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    #[serde(flatten)]
    pub base: SearchResultBase,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub subtype: String,
    pub deep_results: Option<DeepResult>,
    pub schemas: Value,
    #[serde(deserialize_with = "null_default")]
    pub meta_url: MetaUrl,
    pub thumbnail: Option<Thumbnail>,
    pub age: Timestamp,
    pub restaurant: Option<LocationResult>,
    pub locations: Option<Locations>,
    pub video: Option<VideoData>,
    pub movie: Option<MovieData>,
    pub faq: Option<Faq>,
    pub qa: Option<QaPage>,
    pub book: Option<Book>,
    pub rating: Option<Rating>,
    pub article: Option<Article>,
    #[serde(deserialize_with = "null_default")]
    pub product_cluster: Vec<Product>,
    #[serde(deserialize_with = "null_default")]
    pub cluster_type: String,
    #[serde(deserialize_with = "null_default")]
    pub cluster: Vec<SearchResultBase>,
    pub creative_work: Option<CreativeWork>,
    pub music_recording: Option<MusicRecording>,
    pub review: Option<Review>,
    pub software: Option<Software>,
    /// Present when `subtype` is `"recipe"`.
    pub recipe: Option<Recipe>,
    #[serde(deserialize_with = "null_default")]
    pub content_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsResult {
    #[serde(flatten)]
    pub base: SearchResultBase,
    #[serde(deserialize_with = "null_default")]
    pub meta_url: MetaUrl,
    #[serde(deserialize_with = "null_default")]
    pub source: String,
    #[serde(deserialize_with = "null_default")]
    pub breaking: bool,
    pub thumbnail: Option<Thumbnail>,
    pub age: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeepResult {
    #[serde(deserialize_with = "null_default")]
    pub news: Vec<NewsResult>,
    #[serde(deserialize_with = "null_default")]
    pub buttons: Vec<ButtonResult>,
    #[serde(deserialize_with = "null_default")]
    pub social: Vec<KnowledgeGraphProfile>,
    #[serde(deserialize_with = "null_default")]
    pub videos: Vec<VideoResult>,
    #[serde(deserialize_with = "null_default")]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonResult {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeGraphProfile {
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    pub thumbnail: Option<UrlInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlInfo {
    #[serde(deserialize_with = "null_default")]
    pub original: String,
    #[serde(deserialize_with = "null_default")]
    pub display: String,
    #[serde(deserialize_with = "null_default")]
    pub alternatives: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub canonical: String,
    #[serde(deserialize_with = "null_default")]
    pub mobile: MobileUrl,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobileUrl {
    #[serde(deserialize_with = "null_default")]
    pub original: String,
    #[serde(deserialize_with = "null_default")]
    pub amp: String,
    #[serde(deserialize_with = "null_default")]
    pub android: String,
    #[serde(deserialize_with = "null_default")]
    pub ios: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationResult {
    #[serde(flatten)]
    pub base: SearchResultBase,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub provider_url: String,
    #[serde(deserialize_with = "null_default")]
    pub coordinates: Vec<f32>,
    #[serde(deserialize_with = "null_default")]
    pub zoom_level: i64,
    pub thumbnail: Option<Thumbnail>,
    pub postal_address: Option<PostalAddress>,
    pub opening_hours: Option<OpeningHours>,
    pub contact: Option<Contact>,
    #[serde(deserialize_with = "null_default")]
    pub price_range: String,
    pub rating: Option<Rating>,
    pub distance: Option<Unit>,
    #[serde(deserialize_with = "null_default")]
    pub profiles: Vec<DataProvider>,
    pub reviews: Option<Reviews>,
    pub pictures: Option<PictureResults>,
    #[serde(deserialize_with = "null_default")]
    pub serves_cuisine: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub timezone: String,
    #[serde(deserialize_with = "null_default")]
    pub timezone_offset: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locations {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub results: Vec<LocationResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub country: String,
    #[serde(deserialize_with = "null_default")]
    pub postal_code: String,
    #[serde(deserialize_with = "null_default")]
    pub street_address: String,
    #[serde(deserialize_with = "null_default")]
    pub address_region: String,
    #[serde(deserialize_with = "null_default")]
    pub address_locality: String,
    #[serde(deserialize_with = "null_default")]
    pub display_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningHours {
    #[serde(deserialize_with = "null_default")]
    pub current_day: Vec<DayOpeningHours>,
    #[serde(deserialize_with = "null_default")]
    pub days: Vec<Vec<DayOpeningHours>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayOpeningHours {
    #[serde(deserialize_with = "null_default")]
    pub abbr_name: String,
    #[serde(deserialize_with = "null_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_default")]
    pub opens: String,
    #[serde(deserialize_with = "null_default")]
    pub closes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "null_default")]
    pub email: String,
    #[serde(deserialize_with = "null_default")]
    pub telephone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reviews {
    #[serde(deserialize_with = "null_default")]
    pub results: Vec<TripAdvisorReview>,
    #[serde(rename = "viewMoreUrl", deserialize_with = "null_default")]
    pub view_more_url: String,
    #[serde(deserialize_with = "null_default")]
    pub reviews_in_foreign_language: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripAdvisorReview {
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(deserialize_with = "null_default")]
    pub date: String,
    pub rating: Option<Rating>,
    pub author: Option<Person>,
    #[serde(deserialize_with = "null_default")]
    pub review_url: String,
    #[serde(deserialize_with = "null_default")]
    pub language: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PictureResults {
    #[serde(deserialize_with = "null_default")]
    pub results: Vec<Thumbnail>,
    #[serde(rename = "viewMoreUrl", deserialize_with = "null_default")]
    pub view_more_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieData {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    pub thumbnail: Option<Thumbnail>,
    #[serde(deserialize_with = "null_default")]
    pub release: String,
    #[serde(deserialize_with = "null_default")]
    pub directors: Vec<Person>,
    #[serde(deserialize_with = "null_default")]
    pub actors: Vec<Person>,
    pub rating: Option<Rating>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Faq {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub results: Vec<QaItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QaItem {
    #[serde(deserialize_with = "null_default")]
    pub question: String,
    #[serde(deserialize_with = "null_default")]
    pub answer: String,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub meta_url: MetaUrl,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QaPage {
    #[serde(deserialize_with = "null_default")]
    pub question: String,
    pub answer: Option<Answer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Answer {
    #[serde(deserialize_with = "null_default")]
    pub text: String,
    #[serde(deserialize_with = "null_default")]
    pub author: String,
    #[serde(deserialize_with = "null_default")]
    pub upvote_count: i64,
    #[serde(deserialize_with = "null_default")]
    pub downvote_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub author: Vec<Person>,
    #[serde(deserialize_with = "null_default")]
    pub date: String,
    pub price: Option<Price>,
    /// Page count; sometimes quoted, sometimes not a number at all.
    pub pages: FlexibleNumber,
    pub publisher: Option<Person>,
    pub rating: Option<Rating>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Price {
    #[serde(deserialize_with = "null_default")]
    pub price: String,
    #[serde(deserialize_with = "null_default")]
    pub price_currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    #[serde(deserialize_with = "null_default")]
    pub author: Vec<Person>,
    #[serde(deserialize_with = "null_default")]
    pub date: String,
    pub publisher: Option<Organization>,
    pub thumbnail: Option<Thumbnail>,
    #[serde(rename = "isAccessibleForFree", deserialize_with = "null_default")]
    pub is_accessible_for_free: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreativeWork {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub thumbnail: Option<Thumbnail>,
    pub rating: Option<Rating>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MusicRecording {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub thumbnail: Option<Thumbnail>,
    pub rating: Option<Rating>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub thumbnail: Option<Thumbnail>,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    pub rating: Option<Rating>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Software {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub author: String,
    #[serde(deserialize_with = "null_default")]
    pub version: String,
    #[serde(rename = "codeRepository", deserialize_with = "null_default")]
    pub code_repository: String,
    #[serde(deserialize_with = "null_default")]
    pub homepage: String,
    // The API spells it this way.
    #[serde(rename = "datePublisher", deserialize_with = "null_default")]
    pub date_published: String,
    #[serde(deserialize_with = "null_default")]
    pub is_npm: bool,
    #[serde(deserialize_with = "null_default")]
    pub is_pypi: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    pub thumbnail: Option<Thumbnail>,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_default")]
    pub favicon: String,
    /// Total preparation time as a clock string, e.g. `"40:00"`.
    pub time: Duration,
    pub rating: Option<Rating>,
}

/// A forum thread surfaced for the query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscussionResult {
    #[serde(flatten)]
    pub result: SearchResult,
    #[serde(deserialize_with = "null_default")]
    pub data: ForumData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForumData {
    #[serde(deserialize_with = "null_default")]
    pub forum_name: String,
    #[serde(deserialize_with = "null_default")]
    pub num_answers: i64,
    #[serde(deserialize_with = "null_default")]
    pub score: String,
    #[serde(deserialize_with = "null_default")]
    pub question: String,
    #[serde(deserialize_with = "null_default")]
    pub top_comment: String,
}

/// Knowledge-graph panel for an entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphInfoBox {
    #[serde(flatten)]
    pub base: SearchResultBase,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub position: i64,
    #[serde(deserialize_with = "null_default")]
    pub label: String,
    #[serde(deserialize_with = "null_default")]
    pub category: String,
    #[serde(deserialize_with = "null_default")]
    pub long_desc: String,
    pub thumbnail: Option<Thumbnail>,
    #[serde(deserialize_with = "null_default")]
    pub attributes: Vec<Value>,
    #[serde(deserialize_with = "null_default")]
    pub profiles: Vec<Profile>,
    #[serde(deserialize_with = "null_default")]
    pub website_url: String,
    #[serde(deserialize_with = "null_default")]
    pub attributes_shown: i64,
    #[serde(deserialize_with = "null_default")]
    pub ratings: Vec<Rating>,
    #[serde(deserialize_with = "null_default")]
    pub providers: Vec<DataProvider>,
    pub distance: Option<Unit>,
    #[serde(deserialize_with = "null_default")]
    pub images: Vec<Thumbnail>,
    pub movie: Option<MovieData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub price: String,
    pub thumbnail: Option<Thumbnail>,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(deserialize_with = "null_default")]
    pub offers: Vec<Offer>,
    pub rating: Option<Rating>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Offer {
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub price: String,
    #[serde(rename = "priceCurrency", deserialize_with = "null_default")]
    pub price_currency: String,
}

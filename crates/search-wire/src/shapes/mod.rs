//! Result shapes for each endpoint.
//!
//! These are passive `serde` types. Every struct is `#[serde(default)]`, and
//! plain fields go through `null_default`, so a field the server leaves out or
//! sends as `null` decodes as its zero value. The tolerant scalar types from
//! [`crate::scalar`] handle the fields whose wire format drifts.

pub mod common;
pub mod image;
pub mod spellcheck;
pub mod suggest;
pub mod summarizer;
pub mod video;
pub mod web;

pub use common::{
    DataProvider, Image, ImageProperties, Language, MetaUrl, Organization, Person, Profile, Query,
    Rating, ResultContainer, SearchResultBase, Thumbnail, Unit,
};
pub use image::{ImageResult, ImageSearchResponse};
pub use spellcheck::{SpellcheckResponse, SpellcheckResultItem};
pub use suggest::{SuggestResult, SuggestSearchResponse};
pub use summarizer::{
    Summarizer, SummarizerResponse, SummaryAnswer, SummaryContext, SummaryEnrichments,
    SummaryEntity, SummaryMessage, TextLocation,
};
pub use video::{VideoData, VideoResult, VideoSearchResponse};
pub use web::{
    Answer, Article, Book, ButtonResult, Contact, CreativeWork, DayOpeningHours, DeepResult,
    DiscussionResult, Faq, ForumData, GraphInfoBox, KnowledgeGraphProfile, LocationResult,
    Locations, Mixed, MobileUrl, MovieData, MusicRecording, NewsResult, Offer, OpeningHours,
    PictureResults, PostalAddress, Price, Product, QaItem, QaPage, Recipe, ResultReference,
    Review, Reviews, SearchResult, Software, TripAdvisorReview, UrlInfo, WebSearchResponse,
};

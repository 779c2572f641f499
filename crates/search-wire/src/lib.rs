//! # search-wire
//!
//! Decoding layer for a web search API client: raw response bytes in, typed
//! results or typed errors out.
//!
//! The API is loose about its scalars. Dates show up as RFC 3339, as bare
//! local datetimes, as `"January 12, 2024"`, as `"25 minutes ago"`, or as
//! epoch seconds; view counts as `1234` or `"12k"`; some integers quoted and
//! some not. This crate normalises all of them into canonical types and tells
//! a structured server error apart from a payload that is not JSON at all.
//!
//! No HTTP happens here. The caller performs the request and hands over the
//! body, the status code, and (optionally) the query string it sent.
//!
//! ## Quick start
//!
//! ```rust
//! use search_wire::{decode_response, SuggestSearchResponse, WireError};
//!
//! let body = br#"{"type":"suggest","results":[{"string":"rust serde"}]}"#;
//! let resp: SuggestSearchResponse = decode_response(body, 200, None).unwrap();
//! assert_eq!(resp.results[0].query, "rust serde");
//!
//! let body = br#"{"error":{"id":"x","status":429,"code":"RATE_LIMITED","detail":"Slow down"},"time":1700000000}"#;
//! let err = decode_response::<SuggestSearchResponse>(body, 429, Some("q=rust")).unwrap_err();
//! match err {
//!     WireError::Api(api) => assert_eq!(api.code(), "RATE_LIMITED"),
//!     other => panic!("unexpected: {other}"),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`scalar`]: tolerant decoders: `Timestamp`, `Duration`, `ViewCount`, `FlexibleNumber`
//! - [`envelope`]: success/error dispatch and the structured `ErrorEnvelope`
//! - [`shapes`]: result types for the web, image, video, suggest, spellcheck
//!   and summarizer endpoints
//! - [`error`]: error types

pub mod envelope;
pub mod error;
pub mod scalar;
pub mod shapes;

pub use envelope::{
    decode_error, decode_response, decode_response_reader, decode_success, is_success, ApiError,
    ErrorContext, ErrorEnvelope, ErrorMeta, ValidationError,
};
pub use error::{ScalarError, WireError};
pub use scalar::{Duration, FlexibleNumber, Timestamp, ViewCount};
pub use shapes::{
    ImageSearchResponse, SpellcheckResponse, SuggestSearchResponse, SummarizerResponse,
    VideoSearchResponse, WebSearchResponse,
};

//! Error types for response decoding.

use std::num::ParseIntError;

use thiserror::Error;

use crate::envelope::ApiError;

/// Longest payload excerpt carried by [`WireError::Json`].
pub const SNIPPET_LIMIT: usize = 256;

/// Errors that can occur while turning a response body into a typed value.
#[derive(Error, Debug)]
pub enum WireError {
    /// The payload was not valid JSON, or did not match the requested shape.
    ///
    /// Duration and view-count fields that cannot be parsed also land here,
    /// since they fail from inside the structural decode.
    #[error("JSON decode error: {source}\nResponse body (truncated): {body_snippet}")]
    Json {
        #[source]
        source: serde_json::Error,
        body_snippet: String,
    },

    /// Reading the response stream failed before any JSON was seen.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The server answered with a well-formed error envelope.
    #[error("{0}")]
    Api(Box<ApiError>),
}

impl WireError {
    pub(crate) fn json(source: serde_json::Error, body: &[u8]) -> Self {
        WireError::Json {
            source,
            body_snippet: snippet(&String::from_utf8_lossy(body), SNIPPET_LIMIT),
        }
    }

    /// The structured server error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            WireError::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Errors from the strict (non fail-open) scalar parsers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScalarError {
    #[error("invalid duration {raw:?}: {reason}")]
    InvalidDuration { raw: String, reason: String },

    #[error("invalid view count {raw:?}: {source}")]
    InvalidViewCount {
        raw: String,
        #[source]
        source: ParseIntError,
    },
}

/// Convenience alias used throughout search-wire.
pub type Result<T> = std::result::Result<T, WireError>;

/// Cut `s` down to `limit` characters for error messages, marking the cut.
pub fn snippet(s: &str, limit: usize) -> String {
    const ELLIPSIS: &str = "…";
    if s.chars().count() <= limit {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(limit).collect();
        out.push_str(ELLIPSIS);
        out
    }
}

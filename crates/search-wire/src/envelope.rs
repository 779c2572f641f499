//! Response envelopes: a typed result on 2xx, a structured [`ApiError`] otherwise.
//!
//! The error path is a two-pass decode. The payload is first parsed into a
//! `serde_json::Value`; the `time` field is pulled out and resolved through
//! the fail-open [`Timestamp`] decoder, and whatever remains is deserialised
//! structurally. A missing or mangled `time` therefore never turns a
//! well-formed server error into a decode failure.
//!
//! Two error layouts are accepted:
//!
//! - wrapped, as the API sends it: `{"error": {"id": ..., ...}, "time": 1700000000}`
//! - flat: `{"id": ..., "status": 422, ..., "time": "..."}`
//!
//! A payload that is not JSON at all is a [`WireError::Json`], never an
//! [`ApiError`], so callers can tell "the server said no" from "the server
//! sent garbage".

use std::fmt;
use std::io::Read;

use chrono::{DateTime, Utc};
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Result, WireError};
use crate::scalar::{null_default, Timestamp};

/// Whether a transport status code means the body holds a success payload.
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a response body according to its transport status.
///
/// 2xx bodies are deserialised into `T`. Anything else is decoded as an error
/// envelope and returned as `Err(WireError::Api(..))`, with `query` attached
/// so the error message names the request that failed.
///
/// # Errors
/// `WireError::Api` for a well-formed server error; `WireError::Json` when the
/// body is not valid JSON or does not fit the expected shape.
pub fn decode_response<T: DeserializeOwned>(
    body: &[u8],
    status: u16,
    query: Option<&str>,
) -> Result<T> {
    if is_success(status) {
        decode_success(body)
    } else {
        Err(WireError::Api(Box::new(decode_error(body, status, query)?)))
    }
}

/// Same as [`decode_response`], reading the body from a stream first.
///
/// # Errors
/// `WireError::Io` if the stream fails, otherwise as [`decode_response`].
pub fn decode_response_reader<T: DeserializeOwned, R: Read>(
    mut reader: R,
    status: u16,
    query: Option<&str>,
) -> Result<T> {
    let mut body = Vec::new();
    reader.read_to_end(&mut body)?;
    decode_response(&body, status, query)
}

/// Decode a success payload into the caller's result shape.
///
/// # Errors
/// `WireError::Json` if the body is not valid JSON, does not match `T`, or
/// holds a malformed strict scalar (duration, view count).
pub fn decode_success<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    debug!(
        shape = std::any::type_name::<T>(),
        bytes = body.len(),
        "decoding success payload"
    );
    serde_json::from_slice(body).map_err(|e| WireError::json(e, body))
}

/// Decode an error payload into an [`ApiError`].
///
/// When the envelope carries no status of its own, the transport `status` is
/// used.
///
/// # Errors
/// `WireError::Json` if the body is not valid JSON or not an error envelope.
pub fn decode_error(body: &[u8], status: u16, query: Option<&str>) -> Result<ApiError> {
    debug!(status, bytes = body.len(), "decoding error envelope");
    let tree: Value = serde_json::from_slice(body).map_err(|e| WireError::json(e, body))?;
    let mut envelope =
        ErrorEnvelope::from_value(tree, Utc::now()).map_err(|e| WireError::json(e, body))?;
    if envelope.status == 0 {
        envelope.status = status;
    }
    Ok(ApiError {
        envelope,
        query: query.map(str::to_string),
    })
}

// ---------------------------------------------------------------------------
// Error envelope
// ---------------------------------------------------------------------------

/// A structured error reported by the search API.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ErrorEnvelope {
    pub id: String,
    pub status: u16,
    pub code: String,
    pub detail: String,
    pub meta: ErrorMeta,
    /// When the error occurred; zero if the server did not say or said it oddly.
    pub time: Timestamp,
}

/// The fields of an error envelope other than its time.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    #[serde(deserialize_with = "null_default")]
    id: String,
    #[serde(deserialize_with = "null_default")]
    status: u16,
    #[serde(deserialize_with = "null_default")]
    code: String,
    #[serde(deserialize_with = "null_default")]
    detail: String,
    #[serde(deserialize_with = "null_default")]
    meta: ErrorMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorMeta {
    #[serde(deserialize_with = "null_default")]
    pub component: String,
    #[serde(deserialize_with = "null_default")]
    pub errors: Vec<ValidationError>,
}

/// One field-level validation failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationError {
    /// Path to the offending parameter, e.g. `["query", "offset"]`.
    /// Segments are strings or array indices.
    #[serde(deserialize_with = "null_default")]
    pub loc: Vec<Value>,
    #[serde(rename = "msg", deserialize_with = "null_default")]
    pub message: String,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    /// The rejected value, as sent.
    pub input: Option<Value>,
    #[serde(rename = "ctx")]
    pub context: Option<ErrorContext>,
}

/// Extra detail attached to a validation failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorContext {
    /// Allowed values, for enum-typed parameters.
    #[serde(deserialize_with = "null_default")]
    pub enum_values: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ErrorEnvelope {
    /// Decode an envelope from an already-parsed tree, resolving a relative
    /// `time` against `now`.
    ///
    /// # Errors
    /// Fails if the tree (after unwrapping) does not have the envelope's shape.
    pub fn from_value(tree: Value, now: DateTime<Utc>) -> serde_json::Result<Self> {
        let (body, time) = split_time(tree);
        let body: ErrorBody = serde_json::from_value(body)?;
        Ok(ErrorEnvelope {
            id: body.id,
            status: body.status,
            code: body.code,
            detail: body.detail,
            meta: body.meta,
            time: Timestamp::from_json_at(&time, now),
        })
    }

    /// Decode an envelope from raw bytes.
    ///
    /// # Errors
    /// `WireError::Json` if the bytes are not a JSON error envelope.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| WireError::json(e, body))
    }
}

/// Separate the error body from its `time`, unwrapping `{"error": {...}}`.
///
/// In the wrapped layout the outer `time` wins over one inside the body.
fn split_time(tree: Value) -> (Value, Value) {
    let mut outer = match tree {
        Value::Object(map) => map,
        other => return (other, Value::Null),
    };
    let outer_time = outer.remove("time");

    match outer.remove("error") {
        Some(Value::Object(mut inner)) => {
            let inner_time = inner.remove("time");
            let time = outer_time.or(inner_time).unwrap_or(Value::Null);
            (Value::Object(inner), time)
        }
        Some(other) => {
            outer.insert("error".to_string(), other);
            (Value::Object(outer), outer_time.unwrap_or(Value::Null))
        }
        None => (Value::Object(outer), outer_time.unwrap_or(Value::Null)),
    }
}

impl<'de> Deserialize<'de> for ErrorEnvelope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let tree = Value::deserialize(deserializer)?;
        ErrorEnvelope::from_value(tree, Utc::now()).map_err(de::Error::custom)
    }
}

/// `error: <detail> (ID: <id>; Status: <status>; Code: <code>); details: <clauses>); details: <component>`
///
/// Clauses are the validation errors in array order, joined with `", "`.
/// The `)` after the clauses is always written, even when there are none.
impl fmt::Display for ErrorEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error: {} (ID: {}; Status: {}; Code: {}); details: ",
            self.detail, self.id, self.status, self.code
        )?;
        for (i, err) in self.meta.errors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{err}")?;
        }
        write!(f, "); details: {}", self.meta.component)
    }
}

impl std::error::Error for ErrorEnvelope {}

impl ValidationError {
    /// The location path joined with dots, e.g. `query.offset`.
    pub fn location(&self) -> String {
        self.loc.iter().map(render).collect::<Vec<_>>().join(".")
    }

    /// The rejected input as text; empty when the server did not echo it.
    pub fn input_text(&self) -> String {
        self.input.as_ref().map(render).unwrap_or_default()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(type [{}]; loc [{}]; input [{}]; msg [{}])",
            self.kind,
            self.location(),
            self.input_text(),
            self.message
        )
    }
}

/// Strings render bare, everything else as compact JSON.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// ApiError
// ---------------------------------------------------------------------------

/// A server-reported error plus the request it answered.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub envelope: ErrorEnvelope,
    /// The original query string of the failed request, when the caller had one.
    pub query: Option<String>,
}

impl ApiError {
    pub fn status(&self) -> u16 {
        self.envelope.status
    }

    pub fn code(&self) -> &str {
        &self.envelope.code
    }

    pub fn validation_errors(&self) -> &[ValidationError] {
        &self.envelope.meta.errors
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.envelope)?;
        if let Some(query) = &self.query {
            write!(f, " [query: {query}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.envelope)
    }
}

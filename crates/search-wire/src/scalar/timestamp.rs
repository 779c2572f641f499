//! Timestamps recovered from whatever the server happened to send.
//!
//! Quoted values run through [`TIMESTAMP_STRATEGIES`] in order; the first
//! strategy that yields an instant wins. Bare integers are Unix epoch seconds.
//! Nothing here ever fails the enclosing decode: an unrecognised value
//! resolves to the zero timestamp instead.
//!
//! The natural-language and seconds-heuristic strategies read the wall clock,
//! so decoding `"25 minutes ago"` twice can give two different instants. Use
//! [`Timestamp::parse_at`] to pin the reference time.

use std::fmt;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

use super::{drain_map, drain_seq, natural};

/// One step of the timestamp fallback chain.
///
/// Receives the unquoted text and the reference "now"; returns `None` to pass
/// the value on to the next strategy.
pub type TimestampStrategy = fn(&str, DateTime<Utc>) -> Option<DateTime<Utc>>;

/// The ordered fallback chain applied to quoted timestamps.
pub const TIMESTAMP_STRATEGIES: &[(&str, TimestampStrategy)] = &[
    ("rfc3339", parse_rfc3339),
    ("naive-datetime", parse_naive_datetime),
    ("long-month-day-year", parse_long_date),
    ("natural-language", natural::parse),
    ("seconds-heuristic", parse_seconds_heuristic),
];

/// A point in time, or the zero timestamp when the wire value was unusable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(Option<DateTime<Utc>>);

impl Timestamp {
    /// The zero (unset) timestamp.
    pub const ZERO: Timestamp = Timestamp(None);

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Timestamp(Some(dt))
    }

    /// Seconds since the Unix epoch. Out-of-range values give the zero timestamp.
    pub fn from_unix(secs: i64) -> Self {
        Timestamp(DateTime::from_timestamp(secs, 0))
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }

    /// Parse a quoted timestamp relative to the current wall clock.
    pub fn parse(text: &str) -> Self {
        Self::parse_at(text, Utc::now())
    }

    /// Parse a quoted timestamp, resolving relative phrases against `now`.
    pub fn parse_at(text: &str, now: DateTime<Utc>) -> Self {
        for (name, strategy) in TIMESTAMP_STRATEGIES {
            if let Some(dt) = strategy(text, now) {
                if *name != "rfc3339" {
                    debug!(strategy = *name, input = text, "timestamp resolved by fallback");
                }
                return Timestamp(Some(dt));
            }
        }
        debug!(input = text, "unrecognised timestamp, using zero value");
        Timestamp::ZERO
    }

    /// Decode an already-parsed JSON leaf relative to the current wall clock.
    pub fn from_json(value: &Value) -> Self {
        Self::from_json_at(value, Utc::now())
    }

    /// Decode an already-parsed JSON leaf, resolving relative phrases against `now`.
    ///
    /// Strings go through the strategy chain, integers are epoch seconds,
    /// anything else (null, floats, objects, ...) is the zero timestamp.
    pub fn from_json_at(value: &Value, now: DateTime<Utc>) -> Self {
        match value {
            Value::String(s) => Self::parse_at(s, now),
            Value::Number(n) => match n.as_i64() {
                Some(secs) => Self::from_unix(secs),
                None => {
                    debug!(input = %n, "non-integer epoch timestamp, using zero value");
                    Timestamp::ZERO
                }
            },
            _ => Timestamp::ZERO,
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp(Some(dt))
    }
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// `2024-03-06T16:41:05Z`, `2024-03-06T16:41:05+01:00`
pub fn parse_rfc3339(text: &str, _now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// `2024-03-06T16:41:05`, read as UTC. Fractional seconds are allowed.
pub fn parse_naive_datetime(text: &str, _now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|ndt| ndt.and_utc())
}

/// `January 12, 2024`, midnight UTC.
pub fn parse_long_date(text: &str, _now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(text, "%B %d, %Y")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc())
}

/// Last resort for phrasings like `"Streamed 5 seconds ago"`.
///
/// Only applies when the text mentions "second". The first run of one or two
/// digits is taken as a second count before `now`; `0` means `now` itself and
/// no digits at all means no match.
pub fn parse_seconds_heuristic(text: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if !text.contains("second") {
        return None;
    }
    let digits = first_digit_run(text, 2)?;
    let seconds: i64 = digits.parse().ok()?;
    if seconds == 0 {
        Some(now)
    } else {
        now.checked_sub_signed(Duration::seconds(seconds))
    }
}

fn first_digit_run(text: &str, max_len: usize) -> Option<&str> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let len = text[start..]
        .bytes()
        .take(max_len)
        .take_while(u8::is_ascii_digit)
        .count();
    Some(&text[start..start + len])
}

// ---------------------------------------------------------------------------
// serde
// ---------------------------------------------------------------------------

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(dt) => {
                serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

struct TimestampVisitor;

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a timestamp string or Unix epoch seconds")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Timestamp, E> {
        Ok(Timestamp::parse(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Timestamp, E> {
        Ok(Timestamp::from_unix(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Timestamp, E> {
        Ok(i64::try_from(v).map_or(Timestamp::ZERO, Timestamp::from_unix))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Timestamp, E> {
        debug!(input = v, "non-integer epoch timestamp, using zero value");
        Ok(Timestamp::ZERO)
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Timestamp, E> {
        Ok(Timestamp::ZERO)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Timestamp, E> {
        Ok(Timestamp::ZERO)
    }

    fn visit_none<E: de::Error>(self) -> Result<Timestamp, E> {
        Ok(Timestamp::ZERO)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Timestamp, D::Error> {
        Timestamp::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Timestamp, A::Error> {
        drain_seq(seq)?;
        Ok(Timestamp::ZERO)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Timestamp, A::Error> {
        drain_map(map)?;
        Ok(Timestamp::ZERO)
    }
}

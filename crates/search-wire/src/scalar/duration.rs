//! Clock-style durations: `"59:04"`, `"02:02:04"`.
//!
//! Short strings are left-padded with zero components, so `"02:04"` is two
//! minutes four seconds, never two hours four minutes. Unlike the timestamp
//! and number decoders this one is strict: a malformed clock string fails the
//! decode.

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use super::{drain_map, drain_seq};
use crate::error::ScalarError;

/// An elapsed span decoded from an `[[HH:]MM:]SS` clock string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(chrono::Duration);

impl Default for Duration {
    fn default() -> Self {
        Duration(chrono::Duration::zero())
    }
}

impl Duration {
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        let total = i64::from(hours) * 3_600 + i64::from(minutes) * 60 + i64::from(seconds);
        Duration(chrono::Duration::seconds(total))
    }

    /// Parse a colon-delimited clock string.
    ///
    /// # Errors
    /// Returns `ScalarError::InvalidDuration` when there are more than three
    /// components or any component is empty or not all digits.
    pub fn parse_clock(raw: &str) -> Result<Self, ScalarError> {
        let mut parts: Vec<&str> = raw.split(':').collect();
        if parts.len() > 3 {
            return Err(invalid(raw, "more than three components"));
        }
        while parts.len() < 3 {
            parts.insert(0, "00");
        }

        let hours = component(raw, parts[0], "hours")?;
        let minutes = component(raw, parts[1], "minutes")?;
        let seconds = component(raw, parts[2], "seconds")?;
        Ok(Self::from_hms(hours, minutes, seconds))
    }

    pub fn as_chrono(&self) -> chrono::Duration {
        self.0
    }

    pub fn as_std(&self) -> std::time::Duration {
        self.0.to_std().unwrap_or_default()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Whole hours.
    pub fn hours(&self) -> i64 {
        self.0.num_hours()
    }

    /// Minutes past the hour.
    pub fn minutes(&self) -> i64 {
        self.0.num_minutes() % 60
    }

    /// Seconds past the minute.
    pub fn seconds(&self) -> i64 {
        self.0.num_seconds() % 60
    }
}

fn component(raw: &str, part: &str, name: &str) -> Result<u32, ScalarError> {
    if part.is_empty() {
        return Err(invalid(raw, &format!("empty {name} component")));
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(raw, &format!("non-numeric {name} component {part:?}")));
    }
    part.parse()
        .map_err(|e| invalid(raw, &format!("{name} component {part:?}: {e}")))
}

fn invalid(raw: &str, reason: &str) -> ScalarError {
    ScalarError::InvalidDuration {
        raw: raw.to_string(),
        reason: reason.to_string(),
    }
}

impl From<Duration> for chrono::Duration {
    fn from(d: Duration) -> Self {
        d.0
    }
}

/// Renders as `HH:MM:SS`, the same shape the decoder accepts.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DurationVisitor)
    }
}

struct DurationVisitor;

// Only quoted clock strings carry a duration; bare values leave it at zero.
impl<'de> Visitor<'de> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a clock string such as \"59:04\" or \"02:02:04\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Duration, E> {
        Duration::parse_clock(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, _v: i64) -> Result<Duration, E> {
        Ok(Duration::default())
    }

    fn visit_u64<E: de::Error>(self, _v: u64) -> Result<Duration, E> {
        Ok(Duration::default())
    }

    fn visit_f64<E: de::Error>(self, _v: f64) -> Result<Duration, E> {
        Ok(Duration::default())
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Duration, E> {
        Ok(Duration::default())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Duration, E> {
        Ok(Duration::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Duration, E> {
        Ok(Duration::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Duration, D::Error> {
        Duration::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Duration, A::Error> {
        drain_seq(seq)?;
        Ok(Duration::default())
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Duration, A::Error> {
        drain_map(map)?;
        Ok(Duration::default())
    }
}

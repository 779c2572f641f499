//! View counts, which arrive as `1234`, `"1234"`, `"12k"` or `"3M"`.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::ScalarError;

/// A view count with any `k`/`m` magnitude suffix expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ViewCount(i64);

impl ViewCount {
    pub fn new(count: i64) -> Self {
        ViewCount(count)
    }

    pub fn get(&self) -> i64 {
        self.0
    }

    /// Parse the text of a quoted count.
    ///
    /// The suffix is textual: `"12k"` becomes `"12000"` before the integer
    /// parse, so fractional prefixes such as `"1.2k"` are rejected.
    ///
    /// # Errors
    /// Returns `ScalarError::InvalidViewCount` if the expanded text is not an integer.
    pub fn parse(raw: &str) -> Result<Self, ScalarError> {
        let lowered = raw.to_lowercase();
        let expanded = if let Some(prefix) = lowered.strip_suffix('k') {
            format!("{prefix}000")
        } else if let Some(prefix) = lowered.strip_suffix('m') {
            format!("{prefix}000000")
        } else {
            lowered
        };

        expanded
            .parse::<i64>()
            .map(ViewCount)
            .map_err(|source| ScalarError::InvalidViewCount {
                raw: raw.to_string(),
                source,
            })
    }
}

impl From<ViewCount> for i64 {
    fn from(v: ViewCount) -> Self {
        v.0
    }
}

impl fmt::Display for ViewCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for ViewCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ViewCountVisitor)
    }
}

struct ViewCountVisitor;

impl<'de> Visitor<'de> for ViewCountVisitor {
    type Value = ViewCount;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer view count, optionally quoted with a k/m suffix")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ViewCount, E> {
        ViewCount::parse(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ViewCount, E> {
        Ok(ViewCount(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ViewCount, E> {
        i64::try_from(v)
            .map(ViewCount)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_unit<E: de::Error>(self) -> Result<ViewCount, E> {
        Ok(ViewCount::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<ViewCount, E> {
        Ok(ViewCount::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<ViewCount, D::Error> {
        ViewCount::deserialize(deserializer)
    }
}

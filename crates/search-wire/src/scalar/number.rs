//! Integers that are sometimes quoted.

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{drain_map, drain_seq};

/// An integer decoded from either `42` or `"42"`.
///
/// Fail-open: anything that is not an integer decodes as `0`. The fields that
/// use this type (page counts, highlight offsets) are never load-bearing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FlexibleNumber(i64);

impl FlexibleNumber {
    pub fn new(n: i64) -> Self {
        FlexibleNumber(n)
    }

    pub fn get(&self) -> i64 {
        self.0
    }

    /// Parse the text of a quoted number, or `0` if it is not one.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(n) => FlexibleNumber(n),
            Err(_) => {
                debug!(input = raw, "unparseable number, using zero value");
                FlexibleNumber(0)
            }
        }
    }
}

impl From<FlexibleNumber> for i64 {
    fn from(n: FlexibleNumber) -> Self {
        n.0
    }
}

impl fmt::Display for FlexibleNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for FlexibleNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FlexibleNumberVisitor)
    }
}

struct FlexibleNumberVisitor;

impl<'de> Visitor<'de> for FlexibleNumberVisitor {
    type Value = FlexibleNumber;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a quoted integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<FlexibleNumber, E> {
        Ok(FlexibleNumber::parse(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<FlexibleNumber, E> {
        Ok(FlexibleNumber(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<FlexibleNumber, E> {
        Ok(FlexibleNumber(i64::try_from(v).unwrap_or_default()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<FlexibleNumber, E> {
        debug!(input = v, "non-integer number, using zero value");
        Ok(FlexibleNumber(0))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<FlexibleNumber, E> {
        Ok(FlexibleNumber(0))
    }

    fn visit_unit<E: de::Error>(self) -> Result<FlexibleNumber, E> {
        Ok(FlexibleNumber(0))
    }

    fn visit_none<E: de::Error>(self) -> Result<FlexibleNumber, E> {
        Ok(FlexibleNumber(0))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<FlexibleNumber, D::Error> {
        FlexibleNumber::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<FlexibleNumber, A::Error> {
        drain_seq(seq)?;
        Ok(FlexibleNumber(0))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<FlexibleNumber, A::Error> {
        drain_map(map)?;
        Ok(FlexibleNumber(0))
    }
}

//! Format-tolerant decoders for the scalar fields the search API is loose about.
//!
//! Each scalar is its own newtype with a hand-written `Deserialize` impl that
//! looks at the raw token (quoted string vs. bare literal) before choosing a
//! parse path:
//!
//! | type               | accepts                                   | on garbage      |
//! |--------------------|-------------------------------------------|-----------------|
//! | [`Timestamp`]      | RFC 3339, naive datetime, long dates, natural language, epoch seconds | zero instant |
//! | [`Duration`]       | `"SS"`, `"MM:SS"`, `"HH:MM:SS"`           | decode error    |
//! | [`ViewCount`]      | `123`, `"123"`, `"12k"`, `"3M"`           | decode error    |
//! | [`FlexibleNumber`] | `42`, `"42"`                              | zero            |

pub mod duration;
pub mod natural;
pub mod number;
pub mod timestamp;
pub mod views;

pub use duration::Duration;
pub use number::FlexibleNumber;
pub use timestamp::{Timestamp, TimestampStrategy, TIMESTAMP_STRATEGIES};
pub use views::ViewCount;

use serde::de::{Deserializer, IgnoredAny, MapAccess, SeqAccess};
use serde::Deserialize;

/// Consume an array the fail-open decoders have no use for.
pub(crate) fn drain_seq<'de, A: SeqAccess<'de>>(mut seq: A) -> Result<(), A::Error> {
    while seq.next_element::<IgnoredAny>()?.is_some() {}
    Ok(())
}

/// Consume an object the fail-open decoders have no use for.
pub(crate) fn drain_map<'de, A: MapAccess<'de>>(mut map: A) -> Result<(), A::Error> {
    while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
    Ok(())
}

/// `deserialize_with` helper for plain fields: JSON `null` reads as the
/// field's default, the same as a missing key.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

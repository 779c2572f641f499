//! Natural-language timestamps: `"25 minutes ago"`, `"yesterday"`, `"in 2 weeks"`.
//!
//! The whole (trimmed, case-insensitive) string has to match one of the
//! recognised phrasings, otherwise the parse fails and the caller moves on to
//! the next strategy. Recognised forms:
//!
//! - `now`, `just now`, `right now`
//! - `today`, `yesterday`, `tomorrow` (midnight UTC of that day)
//! - `<amount> <unit> ago`, `in <amount> <unit>`, `<amount> <unit> from now`
//! - `last <unit>`, `next <unit>`
//! - date-only: `2024-01-12`, `12 January 2024`, `Jan 12, 2024`
//!
//! `<amount>` is digits, `a`/`an`, or a number word up to twelve.

use chrono::{DateTime, Days, Duration, Months, NaiveDate, Utc};

/// Calendar unit of a relative phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    /// Parse a unit word, singular or plural.
    pub fn parse(word: &str) -> Option<Self> {
        let unit = match word {
            "s" | "sec" | "secs" | "second" | "seconds" => Unit::Second,
            "min" | "mins" | "minute" | "minutes" => Unit::Minute,
            "h" | "hr" | "hrs" | "hour" | "hours" => Unit::Hour,
            "d" | "day" | "days" => Unit::Day,
            "w" | "wk" | "wks" | "week" | "weeks" => Unit::Week,
            "mo" | "month" | "months" => Unit::Month,
            "y" | "yr" | "yrs" | "year" | "years" => Unit::Year,
            _ => return None,
        };
        Some(unit)
    }
}

/// Which way a relative phrase points from "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Past,
    Future,
}

/// Resolve a natural-language timestamp against `now`.
pub fn parse(text: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let trimmed = text.trim();
    let lowered = trimmed.to_ascii_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    match words.as_slice() {
        [] => None,
        ["now"] | ["just", "now"] | ["right", "now"] => Some(now),
        ["today"] => midnight(now, 0),
        ["yesterday"] => midnight(now, -1),
        ["tomorrow"] => midnight(now, 1),
        [amount, unit, "ago"] => relative(now, amount, unit, Direction::Past),
        ["in", amount, unit] => relative(now, amount, unit, Direction::Future),
        [amount, unit, "from", "now"] => relative(now, amount, unit, Direction::Future),
        ["last", unit] => shift(now, 1, Unit::parse(unit)?, Direction::Past),
        ["next", unit] => shift(now, 1, Unit::parse(unit)?, Direction::Future),
        _ => parse_date_only(trimmed),
    }
}

fn relative(
    now: DateTime<Utc>,
    amount: &str,
    unit: &str,
    direction: Direction,
) -> Option<DateTime<Utc>> {
    shift(now, parse_amount(amount)?, Unit::parse(unit)?, direction)
}

fn parse_amount(word: &str) -> Option<u32> {
    if word.bytes().all(|b| b.is_ascii_digit()) {
        return word.parse().ok();
    }
    let n = match word {
        "a" | "an" | "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        _ => return None,
    };
    Some(n)
}

/// Move `amount` units away from `now`. Months and years use calendar
/// arithmetic (clamping to the end of shorter months); the rest are fixed spans.
fn shift(
    now: DateTime<Utc>,
    amount: u32,
    unit: Unit,
    direction: Direction,
) -> Option<DateTime<Utc>> {
    let fixed_secs: i64 = match unit {
        Unit::Second => 1,
        Unit::Minute => 60,
        Unit::Hour => 3_600,
        Unit::Day => 86_400,
        Unit::Week => 604_800,
        Unit::Month | Unit::Year => {
            let months = if unit == Unit::Year {
                amount.checked_mul(12)?
            } else {
                amount
            };
            return match direction {
                Direction::Past => now.checked_sub_months(Months::new(months)),
                Direction::Future => now.checked_add_months(Months::new(months)),
            };
        }
    };

    let span = Duration::try_seconds(i64::from(amount).checked_mul(fixed_secs)?)?;
    match direction {
        Direction::Past => now.checked_sub_signed(span),
        Direction::Future => now.checked_add_signed(span),
    }
}

fn midnight(now: DateTime<Utc>, day_offset: i8) -> Option<DateTime<Utc>> {
    let today = now.date_naive();
    let day = match day_offset {
        0 => Some(today),
        d if d < 0 => today.checked_sub_days(Days::new(u64::from(d.unsigned_abs()))),
        d => today.checked_add_days(Days::new(d as u64)),
    }?;
    day.and_hms_opt(0, 0, 0).map(|ndt| ndt.and_utc())
}

const DATE_ONLY_FORMATS: &[&str] = &["%Y-%m-%d", "%d %B %Y", "%b %d, %Y", "%B %d %Y"];

fn parse_date_only(text: &str) -> Option<DateTime<Utc>> {
    DATE_ONLY_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc())
}

//! Unit spellings and their millisecond multipliers.

use std::collections::BTreeMap;
use std::fmt;

pub const SECOND: u64 = 1_000;
pub const MINUTE: u64 = 60 * SECOND;
pub const HOUR: u64 = 60 * MINUTE;
pub const DAY: u64 = 24 * HOUR;
pub const WEEK: u64 = 7 * DAY;
/// 365.25 days.
pub const YEAR: u64 = 31_557_600_000;

/// Canonical unit a spelling resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Year,
}

/// Every recognized spelling, lowercase.
pub static UNIT_SPELLINGS: &[(&str, Unit)] = &[
    ("years", Unit::Year),
    ("year", Unit::Year),
    ("yrs", Unit::Year),
    ("yr", Unit::Year),
    ("y", Unit::Year),
    ("weeks", Unit::Week),
    ("week", Unit::Week),
    ("w", Unit::Week),
    ("days", Unit::Day),
    ("day", Unit::Day),
    ("d", Unit::Day),
    ("hours", Unit::Hour),
    ("hour", Unit::Hour),
    ("hrs", Unit::Hour),
    ("hr", Unit::Hour),
    ("h", Unit::Hour),
    ("minutes", Unit::Minute),
    ("minute", Unit::Minute),
    ("mins", Unit::Minute),
    ("min", Unit::Minute),
    ("m", Unit::Minute),
    ("seconds", Unit::Second),
    ("second", Unit::Second),
    ("secs", Unit::Second),
    ("sec", Unit::Second),
    ("s", Unit::Second),
    ("milliseconds", Unit::Millisecond),
    ("millisecond", Unit::Millisecond),
    ("msecs", Unit::Millisecond),
    ("msec", Unit::Millisecond),
    ("ms", Unit::Millisecond),
];

impl Unit {
    pub const fn millis(self) -> u64 {
        match self {
            Unit::Millisecond => 1,
            Unit::Second => SECOND,
            Unit::Minute => MINUTE,
            Unit::Hour => HOUR,
            Unit::Day => DAY,
            Unit::Week => WEEK,
            Unit::Year => YEAR,
        }
    }

    pub const fn singular(self) -> &'static str {
        match self {
            Unit::Millisecond => "millisecond",
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Year => "year",
        }
    }

    pub const fn plural(self) -> &'static str {
        match self {
            Unit::Millisecond => "milliseconds",
            Unit::Second => "seconds",
            Unit::Minute => "minutes",
            Unit::Hour => "hours",
            Unit::Day => "days",
            Unit::Week => "weeks",
            Unit::Year => "years",
        }
    }

    pub const fn short(self) -> &'static str {
        match self {
            Unit::Millisecond => "ms",
            Unit::Second => "s",
            Unit::Minute => "m",
            Unit::Hour => "h",
            Unit::Day => "d",
            Unit::Week => "w",
            Unit::Year => "y",
        }
    }

    /// Resolves a whole token, ignoring ASCII case. An empty token means
    /// milliseconds.
    pub fn from_token(token: &str) -> Option<Unit> {
        if token.is_empty() {
            return Some(Unit::Millisecond);
        }
        UNIT_SPELLINGS
            .iter()
            .find(|(spelling, _)| spelling.eq_ignore_ascii_case(token))
            .map(|&(_, unit)| unit)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

/// Finds the longest spelling at the start of `text`, returning the unit and
/// the number of bytes it spans.
pub fn match_prefix(text: &str) -> Option<(Unit, usize)> {
    let bytes = text.as_bytes();
    UNIT_SPELLINGS
        .iter()
        .filter(|(spelling, _)| {
            bytes.len() >= spelling.len()
                && bytes[..spelling.len()].eq_ignore_ascii_case(spelling.as_bytes())
        })
        .max_by_key(|(spelling, _)| spelling.len())
        .map(|&(spelling, unit)| (unit, spelling.len()))
}

/// Spelling to multiplier view of [`UNIT_SPELLINGS`].
pub fn unit_table() -> BTreeMap<&'static str, u64> {
    UNIT_SPELLINGS
        .iter()
        .map(|&(spelling, unit)| (spelling, unit.millis()))
        .collect()
}

//! Canonical calendar-day key.
//!
//! # Responsibility
//! - Wrap a calendar date with a strict `YYYY-MM-DD` wire form.
//! - Serve as the ordered map key for scheduled-post buckets.
//!
//! # Invariants
//! - `Display`, `Serialize` and map-key forms are byte-identical.
//! - Parsing accepts exactly the canonical format, nothing looser.

use chrono::NaiveDate;
use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Canonical `YYYY-MM-DD` key bucketing scheduled posts by day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

/// Parse failure for non-canonical date key text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDateKey(pub String);

impl Display for InvalidDateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid date key `{}`: expected YYYY-MM-DD", self.0)
    }
}

impl Error for InvalidDateKey {}

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Builds a key from calendar components, rejecting invalid dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = InvalidDateKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(value, DATE_KEY_FORMAT)
            .map(Self)
            .map_err(|_| InvalidDateKey(value.to_string()))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::DateKey;

    #[test]
    fn display_is_canonical() {
        let key = DateKey::from_ymd(2025, 6, 1).unwrap();
        assert_eq!(key.to_string(), "2025-06-01");
    }

    #[test]
    fn parse_roundtrip() {
        let key: DateKey = "2025-12-31".parse().unwrap();
        assert_eq!(key.to_string(), "2025-12-31");
    }

    #[test]
    fn parse_rejects_non_canonical_text() {
        assert!("2025/06/01".parse::<DateKey>().is_err());
        assert!("yesterday".parse::<DateKey>().is_err());
        assert!("2025-02-30".parse::<DateKey>().is_err());
    }

    #[test]
    fn serde_uses_the_canonical_string() {
        let key = DateKey::from_ymd(2025, 6, 1).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2025-06-01\"");
        let back: DateKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}

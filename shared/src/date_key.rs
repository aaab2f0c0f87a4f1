//! Canonical day identity used for selection bookkeeping.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateKeyError {
    #[error("invalid date key '{0}', expected YYYY-MM-DD")]
    InvalidFormat(String),
}

/// A calendar date in its `YYYY-MM-DD` form.
///
/// Keys compare and hash by calendar date only, so two keys built from the
/// same day are always equal regardless of where the date came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = DateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono accepts unpadded fields, the key form does not
        if s.len() != 10 {
            return Err(DateKeyError::InvalidFormat(s.to_string()));
        }
        NaiveDate::parse_from_str(s, DATE_KEY_FORMAT)
            .map(Self)
            .map_err(|_| DateKeyError::InvalidFormat(s.to_string()))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_zero_padded() {
        let key = DateKey::new(NaiveDate::from_ymd_opt(2025, 6, 3).unwrap());
        assert_eq!(key.to_string(), "2025-06-03");
    }

    #[test]
    fn test_parse_valid_key() {
        let key: DateKey = "2024-02-29".parse().unwrap();
        assert_eq!(key.date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("2025-02-29".parse::<DateKey>().is_err()); // not a leap year
        assert!("2025-6-3".parse::<DateKey>().is_err());
        assert!("invalid-date".parse::<DateKey>().is_err());

        let err = "nope".parse::<DateKey>().unwrap_err();
        assert_eq!(err, DateKeyError::InvalidFormat("nope".to_string()));
    }

    #[test]
    fn test_same_day_gives_equal_keys() {
        let a = DateKey::from(NaiveDate::from_ymd_opt(2025, 6, 13).unwrap());
        let b: DateKey = "2025-06-13".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_serializes_as_string() {
        let key: DateKey = "2025-01-09".parse().unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2025-01-09\"");

        let back: DateKey = serde_json::from_str("\"2025-01-09\"").unwrap();
        assert_eq!(back, key);
    }
}

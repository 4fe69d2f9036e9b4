use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{CalendarError, Result};
use super::gregorian::days_in_month;

/// A day in the proleptic Gregorian calendar.
///
/// Ordering is lexical on `(year, month, day)`, which is also the order of the
/// token identifiers the dates encode to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: u64,
    pub month: u8,
    pub day: u8,
}

impl CalendarDate {
    /// Creates a date after checking the ranges reserved by the token encoding:
    /// `year >= 1`, `1..=12` months and `1..=31` days.
    ///
    /// The day is not checked against the real length of the month, see
    /// [`CalendarDate::is_gregorian`] for that.
    pub fn new(year: u64, month: u8, day: u8) -> Result<Self> {
        let date = Self { year, month, day };
        if date.is_in_encoding_range() {
            Ok(date)
        } else {
            Err(date.invalid())
        }
    }

    /// Returns true if the fields fit the fixed 372-slot-per-year layout.
    pub fn is_in_encoding_range(&self) -> bool {
        self.year >= 1 && (1..=12).contains(&self.month) && (1..=31).contains(&self.day)
    }

    /// Returns true if this is a day that exists on a real calendar
    /// (e.g. rejects February 30 or February 29 of a common year).
    pub fn is_gregorian(&self) -> bool {
        self.is_in_encoding_range() && self.day <= days_in_month(self.year, self.month)
    }

    /// Returns true for February 29.
    pub fn is_leap_day(&self) -> bool {
        is_leap_day(self.month, self.day)
    }

    pub(crate) fn invalid(&self) -> CalendarError {
        CalendarError::InvalidDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// True iff the month/day pair is February 29.
pub fn is_leap_day(month: u8, day: u8) -> bool {
    month == 2 && day == 29
}

/// Identifier of a single calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(pub u64);

impl TokenId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for TokenId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for TokenId {
    type Err = CalendarError;

    /// Parses a token id from a path segment.
    ///
    /// Only plain decimal digits are accepted: no sign, whitespace, fraction
    /// or exponent.
    fn from_str(s: &str) -> Result<Self> {
        parse_digits(s)
            .map(TokenId)
            .ok_or_else(|| CalendarError::InvalidTokenId(s.to_string()))
    }
}

/// Parses a non-empty run of ASCII digits into an unsigned integer.
///
/// Returns `None` for anything else, including values that overflow `T`.
pub fn parse_digits<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_encoding_range() {
        assert!(CalendarDate::new(1, 1, 1).is_ok());
        assert!(CalendarDate::new(9999, 12, 31).is_ok());
        // Not a real date, but still encodable
        assert!(CalendarDate::new(2021, 2, 31).is_ok());
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            CalendarDate::new(0, 1, 1),
            Err(CalendarError::InvalidDate {
                year: 0,
                month: 1,
                day: 1
            })
        );
        assert!(CalendarDate::new(2021, 0, 1).is_err());
        assert!(CalendarDate::new(2021, 13, 1).is_err());
        assert!(CalendarDate::new(2021, 1, 0).is_err());
        assert!(CalendarDate::new(2021, 1, 32).is_err());
    }

    #[test]
    fn test_is_gregorian() {
        assert!(CalendarDate::new(2020, 2, 29).unwrap().is_gregorian());
        assert!(!CalendarDate::new(2021, 2, 29).unwrap().is_gregorian());
        assert!(!CalendarDate::new(1900, 2, 29).unwrap().is_gregorian());
        assert!(CalendarDate::new(2000, 2, 29).unwrap().is_gregorian());
        assert!(!CalendarDate::new(2021, 4, 31).unwrap().is_gregorian());
    }

    #[test]
    fn test_is_leap_day() {
        assert!(is_leap_day(2, 29));
        assert!(!is_leap_day(2, 28));
        assert!(!is_leap_day(3, 29));
    }

    #[test]
    fn test_ordering_is_lexical() {
        let a = CalendarDate::new(1999, 12, 31).unwrap();
        let b = CalendarDate::new(2000, 1, 1).unwrap();
        let c = CalendarDate::new(2000, 1, 2).unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_display() {
        assert_eq!(CalendarDate::new(1, 1, 1).unwrap().to_string(), "0001-01-01");
        assert_eq!(
            CalendarDate::new(2005, 10, 29).unwrap().to_string(),
            "2005-10-29"
        );
    }

    #[test]
    fn test_token_id_from_str() {
        assert_eq!("0".parse::<TokenId>(), Ok(TokenId(0)));
        assert_eq!("745996".parse::<TokenId>(), Ok(TokenId(745_996)));
    }

    #[test]
    fn test_token_id_from_str_rejects_malformed() {
        for input in ["", "abc", "-1", "+1", " 1", "1.5", "1e3", "0x10"] {
            assert_eq!(
                input.parse::<TokenId>(),
                Err(CalendarError::InvalidTokenId(input.to_string())),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_token_id_from_str_rejects_overflow() {
        assert!("18446744073709551616".parse::<TokenId>().is_err());
    }

    #[test]
    fn test_token_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&TokenId(42)).unwrap(), "42");
    }

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits::<u8>("12"), Some(12));
        assert_eq!(parse_digits::<u8>("256"), None);
        assert_eq!(parse_digits::<u8>("-1"), None);
    }
}

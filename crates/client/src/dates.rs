//! Offline date codec commands. Nothing here talks to the server.

use serde::Serialize;

use datechain_core::calendar::{
    date_to_timestamp, decode, encode, is_leap_year, timestamp_to_date, weekday, CalendarDate,
    TokenId,
};

use crate::error::Result;

/// Everything the codec knows about one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateInfo {
    pub token_id: TokenId,
    pub year: u64,
    pub month: u8,
    pub day: u8,
    pub leap_year: bool,
    /// Absent for slots that are not real days, such as February 30.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekday: Option<&'static str>,
    /// Midnight UTC, in seconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl DateInfo {
    pub fn date(&self) -> CalendarDate {
        CalendarDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }
}

/// Describes a date, computing its token id.
pub fn describe(date: CalendarDate) -> Result<DateInfo> {
    Ok(DateInfo {
        token_id: encode(&date)?,
        year: date.year,
        month: date.month,
        day: date.day,
        leap_year: is_leap_year(date.year),
        weekday: weekday(&date).ok().map(|w| w.name()),
        timestamp: date_to_timestamp(&date).ok(),
    })
}

/// `dates encode <year> <month> <day>`
pub fn encode_date(year: u64, month: u8, day: u8) -> Result<DateInfo> {
    describe(CalendarDate::new(year, month, day)?)
}

/// `dates decode <id>`
pub fn decode_id(id: TokenId) -> Result<DateInfo> {
    describe(decode(id))
}

/// `dates from-timestamp <ts>`
pub fn from_timestamp(timestamp: i64) -> Result<DateInfo> {
    describe(timestamp_to_date(timestamp)?)
}

/// `dates to-timestamp <year> <month> <day>`
pub fn to_timestamp(year: u64, month: u8, day: u8) -> Result<i64> {
    let date = CalendarDate::new(year, month, day)?;
    Ok(date_to_timestamp(&date)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    #[test]
    fn test_encode_origin() {
        let info = encode_date(1, 1, 1).unwrap();
        assert_eq!(info.token_id, TokenId(0));
        assert_eq!(info.weekday, Some("Monday"));
        assert_eq!(info.timestamp, Some(-62_135_596_800));
    }

    #[test]
    fn test_encode_rejects_out_of_range() {
        assert!(matches!(
            encode_date(2021, 13, 1),
            Err(ClientError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_encode_unreal_date_has_no_timestamp() {
        let info = encode_date(2021, 2, 30).unwrap();
        assert_eq!(info.token_id, TokenId(2020 * 372 + 31 + 29));
        assert_eq!(info.weekday, None);
        assert_eq!(info.timestamp, None);

        let json = serde_json::to_value(&info).unwrap();
        assert!(json.get("timestamp").is_none());
    }

    #[test]
    fn test_decode_id() {
        let info = decode_id(TokenId(745_795)).unwrap();
        assert_eq!(info.date(), CalendarDate::new(2005, 10, 29).unwrap());
        assert_eq!(info.weekday, Some("Saturday"));
        assert!(!info.leap_year);
    }

    #[test]
    fn test_from_timestamp() {
        let info = from_timestamp(68_169_600).unwrap();
        assert_eq!(info.date(), CalendarDate::new(1972, 2, 29).unwrap());
        assert!(info.leap_year);
        assert_eq!(info.timestamp, Some(68_169_600));
    }

    #[test]
    fn test_from_timestamp_before_year_one() {
        assert!(from_timestamp(-62_135_596_801).is_err());
    }

    #[test]
    fn test_to_timestamp() {
        assert_eq!(to_timestamp(1970, 1, 1).unwrap(), 0);
        assert_eq!(to_timestamp(3086, 6, 12).unwrap(), 35_231_587_200);
        assert!(to_timestamp(2019, 2, 29).is_err());
    }
}

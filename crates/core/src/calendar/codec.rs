//! Fixed calendar encoding between dates and token identifiers.
//!
//! Every year gets 372 slots and every month 31, regardless of the real
//! month length: `id = (year - 1) * 372 + (month - 1) * 31 + (day - 1)`.

use super::error::Result;
use super::types::{CalendarDate, TokenId};

pub const DAYS_PER_ENCODED_MONTH: u64 = 31;
pub const DAYS_PER_ENCODED_YEAR: u64 = 12 * DAYS_PER_ENCODED_MONTH;

/// Encodes a date into its token identifier.
///
/// Fails with `InvalidDate` when the date is outside the encoding ranges or
/// the identifier would not fit in a `u64`.
pub fn encode(date: &CalendarDate) -> Result<TokenId> {
    if !date.is_in_encoding_range() {
        return Err(date.invalid());
    }

    let within_year = u64::from(date.month - 1) * DAYS_PER_ENCODED_MONTH + u64::from(date.day - 1);

    (date.year - 1)
        .checked_mul(DAYS_PER_ENCODED_YEAR)
        .and_then(|slots| slots.checked_add(within_year))
        .map(TokenId)
        .ok_or_else(|| date.invalid())
}

/// Decodes a token identifier back into the date it was encoded from.
pub fn decode(id: TokenId) -> CalendarDate {
    let within_year = id.0 % DAYS_PER_ENCODED_YEAR;
    CalendarDate {
        year: id.0 / DAYS_PER_ENCODED_YEAR + 1,
        month: (within_year / DAYS_PER_ENCODED_MONTH) as u8 + 1,
        day: (within_year % DAYS_PER_ENCODED_MONTH) as u8 + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarError;

    fn date(year: u64, month: u8, day: u8) -> CalendarDate {
        CalendarDate { year, month, day }
    }

    #[test]
    fn test_origin_encodes_to_zero() {
        assert_eq!(encode(&date(1, 1, 1)), Ok(TokenId(0)));
    }

    #[test]
    fn test_encode_known_dates() {
        assert_eq!(
            encode(&date(2005, 10, 29)),
            Ok(TokenId((2005 - 1) * 372 + (10 - 1) * 31 + 29 - 1))
        );
        assert_eq!(encode(&date(1, 12, 31)), Ok(TokenId(371)));
        assert_eq!(encode(&date(2, 1, 1)), Ok(TokenId(372)));
    }

    #[test]
    fn test_encode_reserves_full_months() {
        // February 31 does not exist but still owns a slot
        assert_eq!(
            encode(&date(2021, 3, 1)).unwrap().0 - encode(&date(2021, 2, 28)).unwrap().0,
            4
        );
    }

    #[test]
    fn test_encode_rejects_out_of_range() {
        for d in [date(0, 1, 1), date(1, 0, 1), date(1, 13, 1), date(1, 1, 0), date(1, 1, 32)] {
            assert_eq!(
                encode(&d),
                Err(CalendarError::InvalidDate {
                    year: d.year,
                    month: d.month,
                    day: d.day
                })
            );
        }
    }

    #[test]
    fn test_encode_rejects_overflow() {
        assert!(encode(&date(u64::MAX, 1, 1)).is_err());
        let largest_year = u64::MAX / DAYS_PER_ENCODED_YEAR;
        assert!(encode(&date(largest_year, 12, 31)).is_ok());
    }

    #[test]
    fn test_encode_is_strictly_increasing() {
        let mut previous: Option<TokenId> = None;
        for year in [1u64, 2, 1899, 1900, 1970, 2000, 3086] {
            for month in 1..=12 {
                for day in 1..=31 {
                    let id = encode(&date(year, month, day)).unwrap();
                    if let Some(prev) = previous {
                        assert!(id > prev, "{year}-{month}-{day} did not increase");
                    }
                    previous = Some(id);
                }
            }
        }
    }

    #[test]
    fn test_consecutive_slots_within_a_year() {
        let first = encode(&date(1970, 1, 1)).unwrap().0;
        for offset in 0..DAYS_PER_ENCODED_YEAR {
            let decoded = decode(TokenId(first + offset));
            assert_eq!(encode(&decoded).unwrap().0, first + offset);
        }
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode(TokenId(0)), date(1, 1, 1));
        assert_eq!(decode(TokenId(371)), date(1, 12, 31));
        assert_eq!(decode(TokenId(372)), date(2, 1, 1));
        assert_eq!(decode(TokenId(u64::MAX)).year, u64::MAX / 372 + 1);
    }

    #[test]
    fn test_decode_encode_round_trip() {
        for d in [date(1, 1, 1), date(1912, 6, 23), date(2000, 2, 29), date(3086, 6, 12)] {
            assert_eq!(decode(encode(&d).unwrap()), d);
        }
    }
}

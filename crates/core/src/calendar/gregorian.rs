//! Proleptic Gregorian arithmetic.
//!
//! Day numbers count from 0001-01-01 (day 0). Conversions split whole
//! 400-year cycles off arithmetically and only walk the years and months
//! inside a single cycle, so the cost is bounded no matter how far in the
//! future the date is.

use super::error::{CalendarError, Result};
use super::types::CalendarDate;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Days in one 400-year Gregorian cycle.
pub const DAYS_PER_CYCLE: u64 = 146_097;

/// Day number of 1970-01-01.
pub const UNIX_EPOCH_DAY: i64 = 719_162;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Divisible by 4, and not by 100 unless also by 400.
pub fn is_leap_year(year: u64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_year(year: u64) -> u64 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Length of a month, or 0 for a month outside `1..=12`.
pub fn days_in_month(year: u64, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// English month name for `1..=12`.
pub fn month_name(month: u8) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(usize::from(index)))
        .copied()
}

/// Day of the week. 0001-01-01 was a Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

/// Returns the weekday of a real Gregorian date.
pub fn weekday(date: &CalendarDate) -> Result<Weekday> {
    let days = date_to_days(date)?;
    Ok(Weekday::ALL[(days % 7) as usize])
}

/// Number of days between 0001-01-01 and January 1st of `year`.
fn days_before_year(year: u64) -> Option<u64> {
    let y = year - 1;
    y.checked_mul(365)?.checked_add(y / 4 - y / 100 + y / 400)
}

/// Day number of a real Gregorian date.
pub fn date_to_days(date: &CalendarDate) -> Result<u64> {
    if !date.is_gregorian() {
        return Err(date.invalid());
    }

    let before_month: u64 = (1..date.month)
        .map(|month| u64::from(days_in_month(date.year, month)))
        .sum();

    days_before_year(date.year)
        .and_then(|days| days.checked_add(before_month + u64::from(date.day) - 1))
        .ok_or_else(|| date.invalid())
}

/// Inverse of [`date_to_days`].
pub fn days_to_date(days: u64) -> CalendarDate {
    let cycles = days / DAYS_PER_CYCLE;
    let mut remaining = days % DAYS_PER_CYCLE;

    let mut year = cycles * 400 + 1;
    while remaining >= days_in_year(year) {
        remaining -= days_in_year(year);
        year += 1;
    }

    let mut month = 1;
    while remaining >= u64::from(days_in_month(year, month)) {
        remaining -= u64::from(days_in_month(year, month));
        month += 1;
    }

    CalendarDate {
        year,
        month,
        day: remaining as u8 + 1,
    }
}

/// Converts seconds since 1970-01-01T00:00:00Z into the calendar date they fall on.
///
/// Every second of a day maps to that day; negative timestamps are floored
/// towards the previous day. Timestamps before 0001-01-01 fail.
pub fn timestamp_to_date(timestamp: i64) -> Result<CalendarDate> {
    let days = timestamp
        .div_euclid(SECONDS_PER_DAY)
        .checked_add(UNIX_EPOCH_DAY)
        .filter(|days| *days >= 0)
        .ok_or(CalendarError::TimestampOutOfRange(timestamp))?;

    Ok(days_to_date(days as u64))
}

/// Converts a real Gregorian date into the timestamp of its first second.
///
/// This is the exact inverse of [`timestamp_to_date`] on day boundaries.
pub fn date_to_timestamp(date: &CalendarDate) -> Result<i64> {
    let days = date_to_days(date)?;

    i64::try_from(days)
        .ok()
        .map(|days| days - UNIX_EPOCH_DAY)
        .and_then(|days| days.checked_mul(SECONDS_PER_DAY))
        .ok_or_else(|| date.invalid())
}

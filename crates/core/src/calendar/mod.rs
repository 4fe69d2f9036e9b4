mod codec;
mod error;
mod gregorian;
mod types;

pub use codec::{decode, encode, DAYS_PER_ENCODED_MONTH, DAYS_PER_ENCODED_YEAR};
pub use error::{CalendarError, Result};
pub use gregorian::{
    date_to_days, date_to_timestamp, days_in_month, days_in_year, days_to_date, is_leap_year,
    month_name, timestamp_to_date, weekday, Weekday, DAYS_PER_CYCLE, SECONDS_PER_DAY,
    UNIX_EPOCH_DAY,
};
pub use types::{is_leap_day, parse_digits, CalendarDate, TokenId};

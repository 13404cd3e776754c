use crate::{schema::EPOCH_DAY, TleError};
use chrono::{Duration, TimeZone, Utc};
use tle_types::time::{UtcTimestamp, MILLIS_PER_DAY};

/// Two-digit years 57-99 are the 1900s, 00-56 the 2000s
pub fn full_year(two_digit: i64) -> Option<i32> {
    match two_digit {
        57..=99 => Some(1900 + two_digit as i32),
        0..=56 => Some(2000 + two_digit as i32),
        _ => None,
    }
}

/// Start of `year` plus `(day - 1)` days, truncated to whole milliseconds
pub fn epoch_timestamp(year: i32, day: f64) -> Result<UtcTimestamp, TleError> {
    let invalid = || TleError::invalid_field(EPOCH_DAY.name, format!("{year} {day}"));
    if !day.is_finite() {
        return Err(invalid());
    }

    let start = Utc
        .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .ok_or_else(invalid)?;
    let offset_ms = ((day - 1.0) * MILLIS_PER_DAY as f64).trunc() as i64;
    start
        .checked_add_signed(Duration::milliseconds(offset_ms))
        .ok_or_else(invalid)
}

//! Instants, durations and angles used by the crossing search and track walks
//!
//! Durations are kept in (possibly fractional) milliseconds, the resolution
//! every cache key and search bound is expressed in.

use crate::error::Error;
use chrono::{Duration, Timelike};
use std::{
    fmt,
    ops::{Add, Div, Sub},
};
use tle_types::time::{UtcTimestamp, MILLIS_PER_MINUTE};

const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// A UTC instant with sub-millisecond arithmetic
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Timestamp(UtcTimestamp);

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.3fZ"))
    }
}

impl From<UtcTimestamp> for Timestamp {
    fn from(utc: UtcTimestamp) -> Self {
        Timestamp(utc)
    }
}

impl Timestamp {
    pub fn from_utc(utc: UtcTimestamp) -> Self {
        Timestamp(utc)
    }

    pub fn as_utc(&self) -> &UtcTimestamp {
        &self.0
    }

    /// Unix milliseconds, rounded down
    pub fn as_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Drop anything below a whole millisecond
    pub fn truncate_millis(self) -> Self {
        let whole = self.0.nanosecond() / 1_000_000 * 1_000_000;
        Timestamp(self.0.with_nanosecond(whole).unwrap_or(self.0))
    }

    /// `t` later, or an error past the last representable instant
    pub fn after(self, t: Time) -> Result<Self, Error> {
        self.shifted(t)
    }

    /// `t` earlier, or an error before the first representable instant
    pub fn before(self, t: Time) -> Result<Self, Error> {
        self.shifted(Time::from_millis(-t.millis))
    }

    fn shifted(self, by: Time) -> Result<Self, Error> {
        let nanos = Duration::nanoseconds((by.millis * NANOS_PER_MILLI) as i64);
        self.0
            .checked_add_signed(nanos)
            .map(Timestamp)
            .ok_or(Error::TimeOutOfRange { at: self, by })
    }
}

impl Sub for Timestamp {
    type Output = Time;

    fn sub(self, earlier: Timestamp) -> Time {
        let d = self.0 - earlier.0;
        match d.num_nanoseconds() {
            Some(ns) => Time::from_millis(ns as f64 / NANOS_PER_MILLI),
            None => Time::from_millis(d.num_milliseconds() as f64),
        }
    }
}

/// A signed duration
#[derive(Copy, Clone, PartialEq, PartialOrd)]
pub struct Time {
    millis: f64,
}

impl fmt::Debug for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms", self.millis)
    }
}

impl Time {
    pub fn from_millis(millis: f64) -> Self {
        Time { millis }
    }

    pub fn from_secs(seconds: f64) -> Self {
        Time::from_millis(seconds * 1_000.0)
    }

    pub fn from_minutes(minutes: f64) -> Self {
        Time::from_millis(minutes * MILLIS_PER_MINUTE as f64)
    }

    pub fn as_millis(&self) -> f64 {
        self.millis
    }

    pub fn as_secs(&self) -> f64 {
        self.millis / 1_000.0
    }

    pub fn as_minutes(&self) -> f64 {
        self.millis / MILLIS_PER_MINUTE as f64
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, other: Time) -> Time {
        Time::from_millis(self.millis + other.millis)
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, other: Time) -> Time {
        Time::from_millis(self.millis - other.millis)
    }
}

impl Div<f64> for Time {
    type Output = Time;

    fn div(self, divisor: f64) -> Time {
        Time::from_millis(self.millis / divisor)
    }
}

/// Longitudes and thresholds, in degrees
#[derive(Copy, Clone, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl fmt::Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

impl Angle {
    pub fn from_degrees(degrees: f64) -> Self {
        Angle(degrees)
    }

    pub fn as_degrees(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn ts(ms: i64) -> Timestamp {
        Timestamp::from_utc(Utc.timestamp_millis_opt(ms).unwrap())
    }

    #[test]
    fn timestamp_arithmetic() {
        let t0 = ts(1_000_000);
        let t1 = t0.after(Time::from_minutes(10.0)).unwrap();
        assert_eq!(t1.as_millis(), 1_600_000);
        assert_eq!((t1 - t0).as_millis(), 600_000.0);
        assert_eq!((t0 - t1).as_secs(), -600.0);
        assert_eq!(t1.before(Time::from_secs(1.0)).unwrap().as_millis(), 1_599_000);
        assert_eq!(t1.after(Time::from_secs(-1.0)).unwrap().as_millis(), 1_599_000);
    }

    #[test]
    fn shifts_past_the_calendar_range_fail() {
        let last = Timestamp::from_utc(DateTime::<Utc>::MAX_UTC);
        assert!(matches!(
            last.after(Time::from_minutes(10.0)),
            Err(Error::TimeOutOfRange { at, .. }) if at == last
        ));
        assert!(last.before(Time::from_minutes(10.0)).is_ok());

        let first = Timestamp::from_utc(DateTime::<Utc>::MIN_UTC);
        assert!(matches!(
            first.before(Time::from_millis(0.5)),
            Err(Error::TimeOutOfRange { .. })
        ));
        assert_eq!(first.after(Time::from_millis(0.0)).unwrap(), first);
    }

    #[test]
    fn halving_steps_stay_exact() {
        let mut step = Time::from_minutes(10.0);
        for _ in 0..11 {
            step = step / 2.0;
        }
        assert_eq!(step.as_millis(), 292.96875);
        assert_eq!(ts(0).after(step).unwrap().as_utc().nanosecond(), 292_968_750);
    }

    #[test]
    fn sub_millisecond_steps_truncate() {
        let t1 = ts(1_000).after(Time::from_millis(292.96875)).unwrap();
        assert_eq!(t1.truncate_millis().as_millis(), 1_292);
        assert_eq!(t1.truncate_millis().as_utc().nanosecond(), 292_000_000);
        assert_eq!(t1.to_string(), "1970-01-01T00:00:01.292Z");
    }
}

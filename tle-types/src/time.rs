use chrono::{DateTime, Utc};

pub type UtcTimestamp = DateTime<Utc>;

pub const MILLIS_PER_MINUTE: i64 = 60_000;
pub const MILLIS_PER_DAY: i64 = 86_400_000;

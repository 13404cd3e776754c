use derive_more::Display;
use serde::Serialize;
use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

pub const UNKNOWN_SATELLITE_NAME: &str = "Unknown";

/// A parsed two-line element set
/// https://en.wikipedia.org/wiki/Two-line_element_set
///
/// Both element lines are trimmed and non-empty. The record says nothing about
/// checksum validity, see `tle_format::is_valid` for that.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, Serialize)]
#[display(fmt = "{}\n{}\n{}", "name", "line1", "line2")]
pub struct TleRecord {
    pub name: String,
    pub line1: String,
    pub line2: String,
}

impl TleRecord {
    pub fn new<N, L1, L2>(name: N, line1: L1, line2: L2) -> Self
    where
        N: Into<String>,
        L1: Into<String>,
        L2: Into<String>,
    {
        Self {
            name: name.into(),
            line1: line1.into(),
            line2: line2.into(),
        }
    }

    pub fn lines(&self) -> [&str; 2] {
        [&self.line1, &self.line2]
    }

    pub fn fingerprint(&self) -> TleFingerprint {
        TleFingerprint::of_lines(&self.line1, &self.line2)
    }
}

/// Identity of an element set, derived from the complete content of both lines.
///
/// The satellite name doesn't participate, two records with the same elements
/// describe the same orbit.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, Serialize)]
#[display(fmt = "{:016x}", _0)]
pub struct TleFingerprint(pub u64);

impl TleFingerprint {
    pub fn of_lines(line1: &str, line2: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        line1.hash(&mut hasher);
        line2.hash(&mut hasher);
        TleFingerprint(hasher.finish())
    }
}

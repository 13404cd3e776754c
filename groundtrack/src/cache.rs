//! Memoized engine results
//!
//! Nothing is ever evicted. The engine is meant for a small set of tracked
//! satellites; call `Engine::clear_cache` when that set changes.

use ordered_float::OrderedFloat;
use std::{collections::HashMap, sync::Arc};
use tle_types::{
    geo::{GroundPosition, Observer, SatelliteState},
    time::UtcTimestamp,
    tle::{TleFingerprint, TleRecord},
    track::OrbitTrack,
};

/// Antemeridian crossings discovered so far for one element set
#[derive(Clone, PartialEq, Debug)]
pub enum CrossingHistory {
    /// In discovery order, not necessarily chronological
    Crossings(Vec<UtcTimestamp>),
    /// A search ran out of iterations, don't bother searching again
    NeverCrosses,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct PositionKey {
    pub fingerprint: TleFingerprint,
    pub at_ms: i64,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct StateKey {
    pub fingerprint: TleFingerprint,
    pub at_ms: i64,
    /// Latitude, longitude, height
    pub observer: [OrderedFloat<f64>; 3],
}

impl StateKey {
    pub fn new(fingerprint: TleFingerprint, at_ms: i64, observer: &Observer) -> Self {
        Self {
            fingerprint,
            at_ms,
            observer: [
                OrderedFloat(observer.latitude),
                OrderedFloat(observer.longitude),
                OrderedFloat(observer.height_km),
            ],
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct TrackKey {
    pub fingerprint: TleFingerprint,
    pub start_ms: i64,
    pub step_ms: i64,
    pub max_duration_ms: i64,
}

/// Number of entries held in each part of the cache
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct CacheSizes {
    pub records: usize,
    pub handles: usize,
    pub positions: usize,
    pub states: usize,
    pub tracks: usize,
    pub crossings: usize,
}

impl CacheSizes {
    pub fn total(&self) -> usize {
        self.records + self.handles + self.positions + self.states + self.tracks + self.crossings
    }
}

pub(crate) struct Cache<H> {
    /// Parsed records keyed by their raw input text
    pub records: HashMap<String, Arc<TleRecord>>,
    /// Initialized propagator state
    pub handles: HashMap<TleFingerprint, H>,
    pub positions: HashMap<PositionKey, GroundPosition>,
    pub states: HashMap<StateKey, SatelliteState>,
    pub tracks: HashMap<TrackKey, OrbitTrack>,
    pub crossings: HashMap<TleFingerprint, CrossingHistory>,
}

impl<H> Default for Cache<H> {
    fn default() -> Self {
        Self {
            records: Default::default(),
            handles: Default::default(),
            positions: Default::default(),
            states: Default::default(),
            tracks: Default::default(),
            crossings: Default::default(),
        }
    }
}

impl<H> Cache<H> {
    pub fn clear(&mut self) {
        self.records.clear();
        self.handles.clear();
        self.positions.clear();
        self.states.clear();
        self.tracks.clear();
        self.crossings.clear();
    }

    pub fn sizes(&self) -> CacheSizes {
        CacheSizes {
            records: self.records.len(),
            handles: self.handles.len(),
            positions: self.positions.len(),
            states: self.states.len(),
            tracks: self.tracks.len(),
            crossings: self.crossings.len(),
        }
    }

    /// The latest known crossing strictly before `reference` and less than
    /// `period_ms` before it
    pub fn recent_crossing(
        &self,
        fingerprint: &TleFingerprint,
        reference: UtcTimestamp,
        period_ms: i64,
    ) -> Option<UtcTimestamp> {
        match self.crossings.get(fingerprint)? {
            CrossingHistory::Crossings(found) => found
                .iter()
                .copied()
                .filter(|c| *c < reference && (reference - *c).num_milliseconds() < period_ms)
                .max(),
            CrossingHistory::NeverCrosses => None,
        }
    }

    pub fn never_crosses(&self, fingerprint: &TleFingerprint) -> bool {
        matches!(
            self.crossings.get(fingerprint),
            Some(CrossingHistory::NeverCrosses)
        )
    }

    pub fn record_crossing(&mut self, fingerprint: TleFingerprint, crossing: UtcTimestamp) {
        let history = self
            .crossings
            .entry(fingerprint)
            .or_insert_with(|| CrossingHistory::Crossings(Vec::new()));
        match history {
            CrossingHistory::Crossings(found) => {
                if !found.contains(&crossing) {
                    found.push(crossing);
                }
            }
            CrossingHistory::NeverCrosses => {
                *history = CrossingHistory::Crossings(vec![crossing]);
            }
        }
    }

    pub fn record_never_crosses(&mut self, fingerprint: TleFingerprint) {
        self.crossings
            .insert(fingerprint, CrossingHistory::NeverCrosses);
    }
}

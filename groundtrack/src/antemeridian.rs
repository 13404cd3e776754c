//! Locating the instants a ground track wraps from +180 to -180 degrees

use crate::{
    engine::Engine,
    error::Error,
    propagator::Propagator,
    units::{Angle, Timestamp},
};
use tle_format::TleInput;
use tle_types::{time::UtcTimestamp, tle::TleRecord, track::Crossing};
use tracing::{debug, trace};

/// True when the ground track wraps around the antemeridian between two
/// consecutive longitudes.
///
/// The signs must differ and at least one side must be further than
/// `threshold` from the prime meridian, which rules out crossing 0°.
pub fn crosses_antemeridian(a: Angle, b: Angle, threshold: Angle) -> bool {
    let threshold = threshold.as_degrees();
    (a.as_degrees() < 0.0) != (b.as_degrees() < 0.0)
        && (a.as_degrees().abs() > threshold || b.as_degrees().abs() > threshold)
}

impl<P: Propagator> Engine<P> {
    /// The most recent antemeridian crossing at or before `at`
    pub fn last_antemeridian_crossing<'a, T: Into<TleInput<'a>>>(
        &mut self,
        input: T,
        at: UtcTimestamp,
    ) -> Result<Crossing, Error> {
        let tle = self.validated(input)?;
        self.crossing_before(&tle, at.into())
    }

    pub(crate) fn crossing_before(
        &mut self,
        tle: &TleRecord,
        reference: Timestamp,
    ) -> Result<Crossing, Error> {
        let fingerprint = tle.fingerprint();
        if self.cache.never_crosses(&fingerprint) {
            return Ok(Crossing::NotFound);
        }

        let period = self.orbital_period(tle)?;
        if let Some(c) =
            self.cache
                .recent_crossing(&fingerprint, *reference.as_utc(), period.as_millis() as i64)
        {
            trace!(name = %tle.name, crossing = %c, "Reusing antemeridian crossing");
            return Ok(Crossing::Found(c));
        }

        let cfg = self.config.crossing_search.clone();
        let threshold = cfg.threshold();
        let mut current = reference;
        let mut step = cfg.coarse_step();
        let mut last: Option<Angle> = None;
        let mut tries = 0;

        loop {
            let lng = Angle::from_degrees(self.sample(tle, current)?.lng);
            let crossed = last.map_or(false, |last| crosses_antemeridian(last, lng, threshold));
            if crossed {
                // Back to the sample past the crossing, then close in with a finer step
                current = current.after(step)?;
                step = step / 2.0;
            } else {
                current = current.before(step)?;
                last = Some(lng);
            }

            if tries >= cfg.max_iterations {
                debug!(name = %tle.name, tries, "No antemeridian crossing found");
                self.cache.record_never_crosses(fingerprint);
                return Ok(Crossing::NotFound);
            }
            if step < cfg.min_step() {
                let crossing = *current.truncate_millis().as_utc();
                debug!(name = %tle.name, %crossing, tries, "Found antemeridian crossing");
                self.cache.record_crossing(fingerprint, crossing);
                return Ok(Crossing::Found(crossing));
            }
            tries += 1;
        }
    }
}

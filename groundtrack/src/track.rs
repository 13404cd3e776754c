use crate::{
    antemeridian::crosses_antemeridian,
    cache::TrackKey,
    engine::Engine,
    error::Error,
    propagator::Propagator,
    units::{Angle, Time, Timestamp},
};
use tle_format::TleInput;
use tle_types::{
    time::UtcTimestamp,
    tle::TleRecord,
    track::{Crossing, GroundTrack, OrbitTrack},
};
use tracing::{debug, trace};

impl<P: Propagator> Engine<P> {
    /// Walk the ground track forward from `start` until the next antemeridian
    /// crossing or `max_duration`, whichever comes first.
    ///
    /// `step` and `max_duration` default to the configured orbit track
    /// values. A missing `start` yields an empty track.
    pub fn orbit_track<'a, T: Into<TleInput<'a>>>(
        &mut self,
        input: T,
        start: Option<UtcTimestamp>,
        step: Option<Time>,
        max_duration: Option<Time>,
    ) -> Result<OrbitTrack, Error> {
        let tle = self.validated(input)?;
        let Some(start) = start else {
            return Ok(OrbitTrack::default());
        };
        let step = step.unwrap_or_else(|| self.config.orbit_track.step());
        let max_duration = max_duration.unwrap_or_else(|| self.config.orbit_track.max_duration());
        self.build_track(&tle, start.into(), step, max_duration)
    }

    /// The orbits before, around and after `at`, each bounded by antemeridian
    /// crossings. Orbits that never reach the antemeridian get a single
    /// long-horizon track instead.
    pub fn ground_track<'a, T: Into<TleInput<'a>>>(
        &mut self,
        input: T,
        at: UtcTimestamp,
    ) -> Result<GroundTrack, Error> {
        let tle = self.validated(input)?;
        self.assemble_ground_track(&tle, at.into())
    }

    /// `ground_track` as `[lng, lat]` pairs, one list per track
    pub fn ground_track_lng_lat<'a, T: Into<TleInput<'a>>>(
        &mut self,
        input: T,
        at: UtcTimestamp,
    ) -> Result<Vec<Vec<[f64; 2]>>, Error> {
        Ok(self.ground_track(input, at)?.lng_lat())
    }

    pub(crate) fn build_track(
        &mut self,
        tle: &TleRecord,
        start: Timestamp,
        step: Time,
        max_duration: Time,
    ) -> Result<OrbitTrack, Error> {
        let start = start.truncate_millis();
        let key = TrackKey {
            fingerprint: tle.fingerprint(),
            start_ms: start.as_millis(),
            step_ms: step.as_millis() as i64,
            max_duration_ms: max_duration.as_millis() as i64,
        };
        if let Some(track) = self.cache.tracks.get(&key) {
            return Ok(track.clone());
        }

        let threshold = self.config.crossing_search.threshold();
        let refine_step = self.config.orbit_track.refine_step();
        let mut points = Vec::new();
        let mut t = start;
        let mut step = step;
        let mut refining = false;
        let mut last: Option<Angle> = None;

        loop {
            if t - start > max_duration {
                break;
            }
            let p = self.sample(tle, t)?;
            let lng = Angle::from_degrees(p.lng);
            if last.map_or(false, |last| crosses_antemeridian(last, lng, threshold)) {
                if refining {
                    break;
                }
                // Retrace the coarse step in small increments so the track ends
                // close to the antemeridian
                t = t.before(step)?;
                step = refine_step;
                refining = true;
            } else {
                points.push(p);
                last = Some(lng);
            }
            t = t.after(step)?;
        }

        trace!(name = %tle.name, %start, points = points.len(), "Built orbit track");
        let track = OrbitTrack::new(points);
        self.cache.tracks.insert(key, track.clone());
        Ok(track)
    }

    fn assemble_ground_track(&mut self, tle: &TleRecord, at: Timestamp) -> Result<GroundTrack, Error> {
        let cfg = self.config.ground_track.clone();
        let current = match self.crossing_before(tle, at)? {
            Crossing::Found(c) => Timestamp::from(c),
            Crossing::NotFound => {
                debug!(name = %tle.name, "No antemeridian crossing, building a continuous track");
                let track =
                    self.build_track(tle, at, cfg.continuous_step(), cfg.continuous_duration())?;
                return Ok(GroundTrack::Continuous(track));
            }
        };

        let period = self.orbital_period(tle)?;
        let previous = self.crossing_before(tle, current.before(cfg.previous_orbit_offset())?)?;
        let next =
            self.crossing_before(tle, current.after(period + cfg.next_orbit_margin())?)?;

        Ok(GroundTrack::Orbits {
            previous: self.orbit_from(tle, previous)?,
            current: self.orbit_from(tle, Crossing::Found(*current.as_utc()))?,
            next: self.orbit_from(tle, next)?,
        })
    }

    fn orbit_from(&mut self, tle: &TleRecord, crossing: Crossing) -> Result<OrbitTrack, Error> {
        match crossing {
            Crossing::Found(start) => {
                let step = self.config.orbit_track.step();
                let max_duration = self.config.orbit_track.max_duration();
                self.build_track(tle, start.into(), step, max_duration)
            }
            Crossing::NotFound => Ok(OrbitTrack::default()),
        }
    }
}

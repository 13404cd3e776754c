use crate::{engine::Engine, error::Error, propagator::Propagator};
use tle_types::{
    geo::{Observer, SatelliteState},
    time::UtcTimestamp,
    tle::TleRecord,
};
use tracing::debug;

impl<P: Propagator> Engine<P> {
    /// Every record at or above `min_elevation_deg` as seen from `observer`
    /// at `at`, in input order.
    ///
    /// Records that fail validation or propagation are skipped.
    pub fn visible_satellites(
        &mut self,
        tles: &[TleRecord],
        observer: Option<Observer>,
        min_elevation_deg: f64,
        at: UtcTimestamp,
    ) -> Result<Vec<(TleRecord, SatelliteState)>, Error> {
        let observer = self.observer_or_default(observer)?;
        let mut visible = Vec::new();
        for tle in tles {
            if !tle_format::is_valid(tle) {
                debug!(name = %tle.name, "Skipping invalid TLE");
                continue;
            }
            match self.satellite_state(tle, at.into(), &observer) {
                Ok(state) if state.elevation_deg >= min_elevation_deg => {
                    visible.push((tle.clone(), state))
                }
                Ok(_) => (),
                Err(e) => debug!(name = %tle.name, err = %e, "Skipping TLE"),
            }
        }
        debug!(
            candidates = tles.len(),
            visible = visible.len(),
            %observer,
            "Visibility check"
        );
        Ok(visible)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::EngineConfig,
        engine::Engine,
        error::Error,
        test_util::{LinearPropagator, GEO, ISS, STATIONARY_LNG},
    };
    use chrono::{TimeZone, Utc};
    use tle_types::{geo::Observer, tle::TleRecord};

    fn engine() -> Engine<LinearPropagator> {
        Engine::with_propagator(EngineConfig::default(), LinearPropagator::default())
    }

    fn record(lines: [&str; 3]) -> TleRecord {
        TleRecord::new(lines[0], lines[1], lines[2])
    }

    #[test]
    fn filters_by_elevation() {
        let mut e = engine();
        // ISS is over lng 0 half way through an orbit
        let period = LinearPropagator::period_ms(15.54225995);
        let at = Utc
            .timestamp_millis_opt((period * 270_000.5).round() as i64)
            .unwrap();
        let tles = vec![record(ISS), record(GEO)];

        let near_iss = Observer::new(0.0, 5.0, 0.0);
        let visible = e.visible_satellites(&tles, Some(near_iss), 80.0, at).unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0.name, "ISS (ZARYA)");

        let under_geo = Observer::new(0.0, STATIONARY_LNG, 0.0);
        let visible = e.visible_satellites(&tles, Some(under_geo), 80.0, at).unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0.name, "GEO1");

        let between = Observer::new(0.0, 20.0, 0.0);
        let visible = e.visible_satellites(&tles, Some(between), 60.0, at).unwrap();
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn invalid_records_are_skipped() {
        let mut e = engine();
        let mut bad = record(ISS);
        bad.line1 = bad.line1.replace("9993", "9994");
        let at = Utc.timestamp_millis_opt(0).unwrap();
        let visible = e
            .visible_satellites(&[bad, record(GEO)], Some(Observer::new(0.0, 40.0, 0.0)), 0.0, at)
            .unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0.name, "GEO1");
    }

    #[test]
    fn observer_must_be_on_earth() {
        let mut e = engine();
        let at = Utc.timestamp_millis_opt(0).unwrap();
        assert!(matches!(
            e.visible_satellites(&[], Some(Observer::new(0.0, 200.0, 0.0)), 0.0, at),
            Err(Error::InvalidObserver(_))
        ));
    }
}

use crate::{
    cache::{PositionKey, StateKey},
    engine::Engine,
    error::Error,
    propagator::Propagator,
    units::Timestamp,
};
use tle_format::TleInput;
use tle_types::{
    geo::{GroundPosition, Observer, SatelliteState},
    time::UtcTimestamp,
    tle::TleRecord,
};
use tracing::trace;

impl<P: Propagator> Engine<P> {
    /// Position, height, look angles and speed at `at`, as seen from
    /// `observer` (or the configured default observer)
    pub fn ground_position<'a, T: Into<TleInput<'a>>>(
        &mut self,
        input: T,
        at: UtcTimestamp,
        observer: Option<Observer>,
    ) -> Result<SatelliteState, Error> {
        let tle = self.validated(input)?;
        let observer = self.observer_or_default(observer)?;
        self.satellite_state(&tle, at.into(), &observer)
    }

    pub fn lat_lon<'a, T: Into<TleInput<'a>>>(
        &mut self,
        input: T,
        at: UtcTimestamp,
    ) -> Result<GroundPosition, Error> {
        let tle = self.validated(input)?;
        self.sample(&tle, at.into())
    }

    /// `[lat, lng]`
    pub fn lat_lon_array<'a, T: Into<TleInput<'a>>>(
        &mut self,
        input: T,
        at: UtcTimestamp,
    ) -> Result<[f64; 2], Error> {
        Ok(self.lat_lon(input, at)?.lat_lng())
    }

    /// Sub-satellite point, the primitive every search and walk is built on
    pub(crate) fn sample(&mut self, tle: &TleRecord, at: Timestamp) -> Result<GroundPosition, Error> {
        let at = at.truncate_millis();
        let key = PositionKey {
            fingerprint: tle.fingerprint(),
            at_ms: at.as_millis(),
        };
        if let Some(p) = self.cache.positions.get(&key) {
            return Ok(*p);
        }

        let state = self.inertial_state(tle, at)?;
        let gmst = self.propagator.sidereal_time(*at.as_utc());
        let geodetic = self.propagator.inertial_to_geodetic(&state.position, gmst);
        let p = GroundPosition::new(
            geodetic.latitude.to_degrees(),
            geodetic.longitude.to_degrees(),
        );
        trace!(%at, lat = p.lat, lng = p.lng, "Sampled ground position");
        self.cache.positions.insert(key, p);
        Ok(p)
    }

    pub(crate) fn satellite_state(
        &mut self,
        tle: &TleRecord,
        at: Timestamp,
        observer: &Observer,
    ) -> Result<SatelliteState, Error> {
        let at = at.truncate_millis();
        let key = StateKey::new(tle.fingerprint(), at.as_millis(), observer);
        if let Some(s) = self.cache.states.get(&key) {
            return Ok(*s);
        }

        let inertial = self.inertial_state(tle, at)?;
        let gmst = self.propagator.sidereal_time(*at.as_utc());
        let ecf = self
            .propagator
            .inertial_to_earth_fixed(&inertial.position, gmst);
        let geodetic = self
            .propagator
            .inertial_to_geodetic(&inertial.position, gmst);
        let look = self
            .propagator
            .earth_fixed_to_look_angles(&observer.to_geodetic(), &ecf);

        let state = SatelliteState {
            lat: geodetic.latitude.to_degrees(),
            lng: geodetic.longitude.to_degrees(),
            height_km: geodetic.height,
            azimuth_deg: look.azimuth.to_degrees(),
            elevation_deg: look.elevation.to_degrees(),
            range_km: look.range,
            velocity_km_s: inertial.speed(),
        };
        self.cache.states.insert(key, state);
        Ok(state)
    }
}

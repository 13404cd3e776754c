use crate::{
    antemeridian::crosses_antemeridian,
    engine::Engine,
    error::Error,
    propagator::Propagator,
    units::{Angle, Timestamp},
};
use tle_format::TleInput;
use tle_types::{
    geo::GroundPosition,
    time::UtcTimestamp,
    track::{Bearing, Compass},
};

/// Initial great-circle bearing from `from` towards `to`
pub fn initial_bearing(from: &GroundPosition, to: &GroundPosition) -> Bearing {
    let (lat1, lat2) = (from.lat.to_radians(), to.lat.to_radians());
    let d_lng = (to.lng - from.lng).to_radians();
    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();
    Bearing {
        degrees: y.atan2(x).to_degrees(),
        compass: Compass::from_heading(to.lat > from.lat, to.lng > from.lng),
    }
}

impl<P: Propagator> Engine<P> {
    /// Direction of travel at `at`.
    ///
    /// `None` when the sampling interval straddles the antemeridian, where the
    /// longitude difference is meaningless.
    pub fn bearing<'a, T: Into<TleInput<'a>>>(
        &mut self,
        input: T,
        at: UtcTimestamp,
    ) -> Result<Option<Bearing>, Error> {
        let tle = self.validated(input)?;
        let at = Timestamp::from(at);
        let later = at.after(self.config.bearing.sample_interval())?;
        let from = self.sample(&tle, at)?;
        let to = self.sample(&tle, later)?;

        let threshold = self.config.crossing_search.threshold();
        if crosses_antemeridian(
            Angle::from_degrees(from.lng),
            Angle::from_degrees(to.lng),
            threshold,
        ) {
            return Ok(None);
        }
        Ok(Some(initial_bearing(&from, &to)))
    }
}

//! A deterministic stand-in for SGP4
//!
//! The sub-satellite longitude sweeps linearly from -180 to 180 once per
//! orbital period, with period boundaries aligned to the unix epoch, so
//! antemeridian crossings land exactly on multiples of the period.

use crate::propagator::{PropagationError, Propagator};
use std::{cell::Cell, f64::consts::TAU};
use tle_types::{
    geo::{Geodetic, InertialState, LookAngles},
    time::{UtcTimestamp, MILLIS_PER_MINUTE},
};

pub const ISS: [&str; 3] = [
    "ISS (ZARYA)",
    "1 25544U 98067A   17206.18396726  .00001961  00000-0  36771-4 0  9993",
    "2 25544  51.6400 208.9163 0006317  69.9862  25.2906 15.54225995 67660",
];

pub const GEO: [&str; 3] = [
    "GEO1",
    "1 37481U 11019A   23190.45078927 -.00000009  00000-0  00000+0 0  9991",
    "2 37481   2.3847  40.6385 0001640  70.7486  43.7146  1.00272292 44578",
];

/// Longitude of anything slower than this many revolutions per day
pub const STATIONARY_LNG: f64 = 40.0;
const STATIONARY_BELOW_REV_PER_DAY: f64 = 2.0;

pub const MAX_LAT: f64 = 51.6;
pub const HEIGHT_KM: f64 = 400.0;
pub const SPEED_KM_S: f64 = 7.66;

#[derive(Copy, Clone, Debug)]
pub struct LinearHandle {
    pub period_ms: f64,
    pub stationary: bool,
}

#[derive(Debug, Default)]
pub struct LinearPropagator {
    initializations: Cell<usize>,
    propagations: Cell<usize>,
}

impl LinearPropagator {
    pub fn initializations(&self) -> usize {
        self.initializations.get()
    }

    pub fn propagations(&self) -> usize {
        self.propagations.get()
    }

    /// Period in milliseconds of an element set with this mean motion
    pub fn period_ms(mean_motion: f64) -> f64 {
        1440.0 / mean_motion * MILLIS_PER_MINUTE as f64
    }

    /// Where `propagate` puts the satellite, [deg]
    pub fn lat_lng(handle: &LinearHandle, at: UtcTimestamp) -> (f64, f64) {
        if handle.stationary {
            return (0.0, STATIONARY_LNG);
        }
        let phase = (at.timestamp_millis() as f64 / handle.period_ms).rem_euclid(1.0);
        (MAX_LAT * (TAU * phase).sin(), -180.0 + 360.0 * phase)
    }
}

impl Propagator for LinearPropagator {
    type Handle = LinearHandle;

    fn initialize(&self, line1: &str, line2: &str) -> Result<Self::Handle, PropagationError> {
        self.initializations.set(self.initializations.get() + 1);
        let mean_motion = tle_format::mean_motion(&[line1, line2])
            .map_err(|e| PropagationError::Initialize(e.to_string()))?;
        Ok(LinearHandle {
            period_ms: Self::period_ms(mean_motion),
            stationary: mean_motion < STATIONARY_BELOW_REV_PER_DAY,
        })
    }

    /// Encodes `[lng deg, lat deg, height km]` in the position
    fn propagate(
        &self,
        handle: &Self::Handle,
        at: UtcTimestamp,
    ) -> Result<InertialState, PropagationError> {
        self.propagations.set(self.propagations.get() + 1);
        let (lat, lng) = Self::lat_lng(handle, at);
        Ok(InertialState {
            position: na::vector![lng, lat, HEIGHT_KM],
            velocity: na::vector![SPEED_KM_S, 0.0, 0.0],
        })
    }

    fn sidereal_time(&self, _at: UtcTimestamp) -> f64 {
        0.0
    }

    fn inertial_to_earth_fixed(&self, position: &na::Vector3<f64>, _gmst: f64) -> na::Vector3<f64> {
        *position
    }

    fn inertial_to_geodetic(&self, position: &na::Vector3<f64>, _gmst: f64) -> Geodetic {
        Geodetic {
            latitude: position.y.to_radians(),
            longitude: position.x.to_radians(),
            height: position.z,
        }
    }

    /// Overhead at the observer's longitude, dropping one degree of
    /// elevation per degree of longitude away from it
    fn earth_fixed_to_look_angles(
        &self,
        observer: &Geodetic,
        position_ecf: &na::Vector3<f64>,
    ) -> LookAngles {
        let delta = (position_ecf.x - observer.longitude.to_degrees()).abs();
        let delta = delta.min(360.0 - delta);
        LookAngles {
            azimuth: 0.0,
            elevation: (90.0 - delta).to_radians(),
            range: position_ecf.z + delta * 100.0,
        }
    }
}

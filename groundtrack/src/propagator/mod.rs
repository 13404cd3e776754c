//! The orbit propagator the engine delegates physics to

use tle_types::{
    geo::{Geodetic, InertialState, LookAngles},
    time::UtcTimestamp,
};

pub use self::sgp4::{Sgp4Handle, Sgp4Propagator};

pub mod sgp4;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PropagationError {
    #[error("Failed to initialize the propagator. {0}")]
    Initialize(String),
    #[error("Failed to propagate to {at}. {msg}")]
    Propagate { at: UtcTimestamp, msg: String },
}

/// Propagates element sets and converts between the frames involved.
///
/// Implementations are assumed to be pure functions of their inputs; the
/// engine memoizes their results.
pub trait Propagator {
    /// Initialized state for one element set
    type Handle;

    /// Initialize from two trimmed element lines
    fn initialize(&self, line1: &str, line2: &str) -> Result<Self::Handle, PropagationError>;

    /// Inertial (TEME) position [km] and velocity [km/s] at `at`
    fn propagate(
        &self,
        handle: &Self::Handle,
        at: UtcTimestamp,
    ) -> Result<InertialState, PropagationError>;

    /// Greenwich mean sidereal time [rad]
    fn sidereal_time(&self, at: UtcTimestamp) -> f64;

    fn inertial_to_earth_fixed(&self, position: &na::Vector3<f64>, gmst: f64) -> na::Vector3<f64>;

    fn inertial_to_geodetic(&self, position: &na::Vector3<f64>, gmst: f64) -> Geodetic;

    /// Look angles from `observer` (geodetic, [rad] and [km]) to an earth
    /// fixed position [km]
    fn earth_fixed_to_look_angles(
        &self,
        observer: &Geodetic,
        position_ecf: &na::Vector3<f64>,
    ) -> LookAngles;
}

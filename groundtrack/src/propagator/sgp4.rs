//! SGP4 propagation and the frame conversions that go with it

use super::{PropagationError, Propagator};
use nav_types::{ECEF, WGS84};
use std::f64::consts::{PI, TAU};
use tle_types::{
    geo::{Geodetic, InertialState, LookAngles},
    time::{UtcTimestamp, MILLIS_PER_DAY, MILLIS_PER_MINUTE},
};

const JULIAN_DATE_UNIX_EPOCH: f64 = 2_440_587.5;
const JULIAN_DATE_J2000: f64 = 2_451_545.0;
const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

#[derive(Clone, Debug)]
pub struct Sgp4Handle {
    elements: ::sgp4::Elements,
    constants: ::sgp4::Constants,
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Sgp4Propagator;

impl Propagator for Sgp4Propagator {
    type Handle = Sgp4Handle;

    fn initialize(&self, line1: &str, line2: &str) -> Result<Self::Handle, PropagationError> {
        let elements = ::sgp4::Elements::from_tle(None, line1.as_bytes(), line2.as_bytes())
            .map_err(|e| PropagationError::Initialize(e.to_string()))?;
        let constants = ::sgp4::Constants::from_elements(&elements)
            .map_err(|e| PropagationError::Initialize(e.to_string()))?;
        Ok(Sgp4Handle {
            elements,
            constants,
        })
    }

    fn propagate(
        &self,
        handle: &Self::Handle,
        at: UtcTimestamp,
    ) -> Result<InertialState, PropagationError> {
        let since_epoch = at.naive_utc() - handle.elements.datetime;
        let minutes = since_epoch.num_milliseconds() as f64 / MILLIS_PER_MINUTE as f64;
        let prediction = handle
            .constants
            .propagate(::sgp4::MinutesSinceEpoch(minutes))
            .map_err(|e| PropagationError::Propagate {
                at,
                msg: e.to_string(),
            })?;
        Ok(InertialState {
            position: na::Vector3::from(prediction.position),
            velocity: na::Vector3::from(prediction.velocity),
        })
    }

    /// IAU-82 model
    fn sidereal_time(&self, at: UtcTimestamp) -> f64 {
        let julian_date =
            at.timestamp_millis() as f64 / MILLIS_PER_DAY as f64 + JULIAN_DATE_UNIX_EPOCH;
        let t = (julian_date - JULIAN_DATE_J2000) / DAYS_PER_JULIAN_CENTURY;
        let seconds = -6.2e-6 * t.powi(3)
            + 0.093104 * t.powi(2)
            + (876_600.0 * 3600.0 + 8_640_184.812866) * t
            + 67_310.54841;
        (seconds.to_radians() / 240.0).rem_euclid(TAU)
    }

    fn inertial_to_earth_fixed(&self, position: &na::Vector3<f64>, gmst: f64) -> na::Vector3<f64> {
        na::Rotation3::from_axis_angle(&na::Vector3::z_axis(), -gmst) * position
    }

    fn inertial_to_geodetic(&self, position: &na::Vector3<f64>, gmst: f64) -> Geodetic {
        let ecf = self.inertial_to_earth_fixed(position, gmst) * 1000.0;
        let wgs = WGS84::from(ECEF::new(ecf.x, ecf.y, ecf.z));
        Geodetic {
            latitude: wgs.latitude_radians(),
            longitude: wgs.longitude_radians(),
            height: wgs.altitude() / 1000.0,
        }
    }

    /// Topocentric south-east-zenith rotation of the observer to satellite vector
    fn earth_fixed_to_look_angles(
        &self,
        observer: &Geodetic,
        position_ecf: &na::Vector3<f64>,
    ) -> LookAngles {
        let observer_ecf = ECEF::from(WGS84::from_radians_and_meters(
            observer.latitude,
            observer.longitude,
            observer.height * 1000.0,
        ));
        let observer_ecf =
            na::Vector3::new(observer_ecf.x(), observer_ecf.y(), observer_ecf.z()) / 1000.0;
        let r = position_ecf - observer_ecf;

        let (sin_lat, cos_lat) = observer.latitude.sin_cos();
        let (sin_lng, cos_lng) = observer.longitude.sin_cos();
        let s = sin_lat * cos_lng * r.x + sin_lat * sin_lng * r.y - cos_lat * r.z;
        let e = -sin_lng * r.x + cos_lng * r.y;
        let z = cos_lat * cos_lng * r.x + cos_lat * sin_lng * r.y + sin_lat * r.z;

        let range = (s * s + e * e + z * z).sqrt();
        LookAngles {
            azimuth: (-e).atan2(s) + PI,
            elevation: (z / range).asin(),
            range,
        }
    }
}

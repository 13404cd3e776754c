use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A point directly beneath the satellite [deg]
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default, Display, Serialize)]
#[display(fmt = "{{lat: {}, lng: {}}}", "lat", "lng")]
pub struct GroundPosition {
    pub lat: f64,
    pub lng: f64,
}

impl GroundPosition {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn lat_lng(&self) -> [f64; 2] {
        [self.lat, self.lng]
    }

    /// GeoJSON ordering
    pub fn lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

/// Propagator output, expressed in the inertial (TEME) frame
#[derive(Copy, Clone, PartialEq, Debug, Default, Display)]
#[display(fmt = "{{position: {}, velocity: {}}}", "position", "velocity")]
pub struct InertialState {
    /// Position [km]
    pub position: na::Vector3<f64>,

    /// Velocity [km/s]
    pub velocity: na::Vector3<f64>,
}

impl InertialState {
    /// Speed [km/s]
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }
}

/// Geodetic coordinates, angles in [rad], height in [km]
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default, Display)]
#[display(
    fmt = "{{lat: {} rad, lng: {} rad, height: {} km}}",
    "latitude",
    "longitude",
    "height"
)]
pub struct Geodetic {
    pub latitude: f64,
    pub longitude: f64,
    pub height: f64,
}

/// Observer-relative direction to the satellite, angles in [rad], range in [km]
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default, Display)]
#[display(
    fmt = "{{az: {} rad, el: {} rad, range: {} km}}",
    "azimuth",
    "elevation",
    "range"
)]
pub struct LookAngles {
    pub azimuth: f64,
    pub elevation: f64,
    pub range: f64,
}

/// A ground observer, angles in [deg], height in [km]
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[display(
    fmt = "{{lat: {}, lng: {}, height: {} km}}",
    "latitude",
    "longitude",
    "height_km"
)]
pub struct Observer {
    pub latitude: f64,
    pub longitude: f64,
    pub height_km: f64,
}

impl Observer {
    pub fn new(latitude: f64, longitude: f64, height_km: f64) -> Self {
        Self {
            latitude,
            longitude,
            height_km,
        }
    }

    pub fn to_geodetic(self) -> Geodetic {
        Geodetic {
            latitude: self.latitude.to_radians(),
            longitude: self.longitude.to_radians(),
            height: self.height_km,
        }
    }
}

/// Everything the geometry layer knows about a satellite at one instant
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Display, Serialize)]
#[display(
    fmt = "{{lat: {}, lng: {}, height: {} km, az: {}, el: {}, range: {} km, speed: {} km/s}}",
    "lat",
    "lng",
    "height_km",
    "azimuth_deg",
    "elevation_deg",
    "range_km",
    "velocity_km_s"
)]
pub struct SatelliteState {
    /// Sub-satellite latitude [deg]
    pub lat: f64,
    /// Sub-satellite longitude [deg]
    pub lng: f64,
    /// Height above the ellipsoid [km]
    pub height_km: f64,
    /// Azimuth from the observer [deg]
    pub azimuth_deg: f64,
    /// Elevation above the observer's horizon [deg]
    pub elevation_deg: f64,
    /// Observer to satellite [km]
    pub range_km: f64,
    /// Inertial speed [km/s]
    pub velocity_km_s: f64,
}

impl SatelliteState {
    pub fn ground_position(&self) -> GroundPosition {
        GroundPosition::new(self.lat, self.lng)
    }
}

pub use crate::field::{Encoding, FieldDescriptor, FieldValue, LineNumber};
pub use crate::geo::{
    Geodetic, GroundPosition, InertialState, LookAngles, Observer, SatelliteState,
};
pub use crate::time::{UtcTimestamp, MILLIS_PER_DAY, MILLIS_PER_MINUTE};
pub use crate::tle::{TleFingerprint, TleRecord, UNKNOWN_SATELLITE_NAME};
pub use crate::track::{Bearing, Compass, Crossing, GroundTrack, OrbitTrack};

//! Column layout of the standard 69-character element lines
//!
//! Columns are zero-based; the published layout numbers them from one.

use tle_types::field::{Encoding::*, FieldDescriptor, LineNumber::*};

pub const LINE_NUMBER_1: FieldDescriptor = FieldDescriptor::new("line_number_1", One, 0, 1, Integer);
pub const CATALOG_NUMBER_1: FieldDescriptor =
    FieldDescriptor::new("catalog_number_1", One, 2, 5, Integer);
pub const CLASSIFICATION: FieldDescriptor = FieldDescriptor::new("classification", One, 7, 1, Char);
/// Last two digits of the launch year
pub const INTERNATIONAL_DESIGNATOR_YEAR: FieldDescriptor =
    FieldDescriptor::new("international_designator_year", One, 9, 2, Integer);
/// Launch number of the year
pub const INTERNATIONAL_DESIGNATOR_LAUNCH_NUMBER: FieldDescriptor =
    FieldDescriptor::new("international_designator_launch_number", One, 11, 3, Integer);
/// Piece of the launch, e.g. "A"
pub const INTERNATIONAL_DESIGNATOR_PIECE: FieldDescriptor =
    FieldDescriptor::new("international_designator_piece", One, 14, 3, Char);
/// Last two digits of the epoch year
pub const EPOCH_YEAR: FieldDescriptor = FieldDescriptor::new("epoch_year", One, 18, 2, Integer);
/// Day of the year and fractional portion of the day, starting at 1.0
pub const EPOCH_DAY: FieldDescriptor = FieldDescriptor::new("epoch_day", One, 20, 12, Float);
/// First time derivative of the mean motion divided by two [rev/day²]
pub const FIRST_TIME_DERIVATIVE: FieldDescriptor =
    FieldDescriptor::new("first_time_derivative", One, 33, 10, Float);
/// Second time derivative of the mean motion divided by six [rev/day³]
pub const SECOND_TIME_DERIVATIVE: FieldDescriptor =
    FieldDescriptor::new("second_time_derivative", One, 44, 8, DecimalAssumedWithExponent);
/// BSTAR drag term [1/earth radii]
pub const BSTAR_DRAG: FieldDescriptor =
    FieldDescriptor::new("bstar_drag", One, 53, 8, DecimalAssumedWithExponent);
/// Always 0 in distributed data
pub const ORBIT_MODEL: FieldDescriptor = FieldDescriptor::new("orbit_model", One, 62, 1, Integer);
pub const ELEMENT_SET_NUMBER: FieldDescriptor =
    FieldDescriptor::new("element_set_number", One, 64, 4, Integer);
pub const CHECKSUM_1: FieldDescriptor = FieldDescriptor::new("checksum_1", One, 68, 1, Integer);

pub const LINE_NUMBER_2: FieldDescriptor = FieldDescriptor::new("line_number_2", Two, 0, 1, Integer);
pub const CATALOG_NUMBER_2: FieldDescriptor =
    FieldDescriptor::new("catalog_number_2", Two, 2, 5, Integer);
/// [deg]
pub const INCLINATION: FieldDescriptor = FieldDescriptor::new("inclination", Two, 8, 8, Float);
/// Right ascension of the ascending node [deg]
pub const RIGHT_ASCENSION: FieldDescriptor =
    FieldDescriptor::new("right_ascension", Two, 17, 8, Float);
pub const ECCENTRICITY: FieldDescriptor =
    FieldDescriptor::new("eccentricity", Two, 26, 7, DecimalAssumed);
/// [deg]
pub const ARGUMENT_OF_PERIGEE: FieldDescriptor =
    FieldDescriptor::new("argument_of_perigee", Two, 34, 8, Float);
/// [deg]
pub const MEAN_ANOMALY: FieldDescriptor = FieldDescriptor::new("mean_anomaly", Two, 43, 8, Float);
/// [rev/day]
pub const MEAN_MOTION: FieldDescriptor = FieldDescriptor::new("mean_motion", Two, 52, 11, Float);
pub const REVOLUTION_NUMBER: FieldDescriptor =
    FieldDescriptor::new("revolution_number", Two, 63, 5, Integer);
pub const CHECKSUM_2: FieldDescriptor = FieldDescriptor::new("checksum_2", Two, 68, 1, Integer);

/// Every field, line 1 first, in column order
pub static FIELDS: [FieldDescriptor; 24] = [
    LINE_NUMBER_1,
    CATALOG_NUMBER_1,
    CLASSIFICATION,
    INTERNATIONAL_DESIGNATOR_YEAR,
    INTERNATIONAL_DESIGNATOR_LAUNCH_NUMBER,
    INTERNATIONAL_DESIGNATOR_PIECE,
    EPOCH_YEAR,
    EPOCH_DAY,
    FIRST_TIME_DERIVATIVE,
    SECOND_TIME_DERIVATIVE,
    BSTAR_DRAG,
    ORBIT_MODEL,
    ELEMENT_SET_NUMBER,
    CHECKSUM_1,
    LINE_NUMBER_2,
    CATALOG_NUMBER_2,
    INCLINATION,
    RIGHT_ASCENSION,
    ECCENTRICITY,
    ARGUMENT_OF_PERIGEE,
    MEAN_ANOMALY,
    MEAN_MOTION,
    REVOLUTION_NUMBER,
    CHECKSUM_2,
];

pub fn by_name(name: &str) -> Option<&'static FieldDescriptor> {
    FIELDS.iter().find(|f| f.name == name)
}

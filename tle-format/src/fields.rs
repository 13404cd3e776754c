//! Field accessors over any TLE input
//!
//! Each accessor parses its input, selects the descriptor's line, slices the
//! descriptor's columns and decodes them. Nothing is cached here.

use crate::{
    decode::decode,
    epoch::{epoch_timestamp, full_year},
    parser::{parse_tle, TleInput},
    schema::*,
    TleError,
};
use tle_types::{
    field::{FieldDescriptor, FieldValue, LineNumber},
    time::UtcTimestamp,
    tle::TleRecord,
};

/// Decode `field` from any TLE input
pub fn get_field<'a, T: Into<TleInput<'a>>>(
    field: &FieldDescriptor,
    input: T,
) -> Result<FieldValue, TleError> {
    match input.into() {
        TleInput::Record(tle) => record_field(field, tle),
        input => record_field(field, &parse_tle(input)?),
    }
}

/// Decode `field` from an already parsed record
pub fn record_field(field: &FieldDescriptor, tle: &TleRecord) -> Result<FieldValue, TleError> {
    let line = match field.line {
        LineNumber::One => &tle.line1,
        LineNumber::Two => &tle.line2,
    };
    decode(field, column(field, line)?)
}

/// The raw text of `field`'s columns within `line`
pub(crate) fn column<'l>(field: &FieldDescriptor, line: &'l str) -> Result<&'l str, TleError> {
    line.get(field.start..field.end())
        .ok_or_else(|| TleError::invalid_field(field.name, line))
}

fn integer<'a, T: Into<TleInput<'a>>>(field: &FieldDescriptor, input: T) -> Result<i64, TleError> {
    let value = get_field(field, input)?;
    value
        .as_i64()
        .ok_or_else(|| TleError::invalid_field(field.name, value.to_string()))
}

fn float<'a, T: Into<TleInput<'a>>>(field: &FieldDescriptor, input: T) -> Result<f64, TleError> {
    let value = get_field(field, input)?;
    value
        .as_f64()
        .ok_or_else(|| TleError::invalid_field(field.name, value.to_string()))
}

fn text<'a, T: Into<TleInput<'a>>>(field: &FieldDescriptor, input: T) -> Result<String, TleError> {
    match get_field(field, input)? {
        FieldValue::Char(s) => Ok(s),
        other => Err(TleError::invalid_field(field.name, other.to_string())),
    }
}

macro_rules! create_int_field {
    ($func_name:ident, $field:ident) => {
        pub fn $func_name<'a, T: Into<TleInput<'a>>>(input: T) -> Result<i64, TleError> {
            integer(&$field, input)
        }
    };
}

macro_rules! create_float_field {
    ($func_name:ident, $field:ident) => {
        pub fn $func_name<'a, T: Into<TleInput<'a>>>(input: T) -> Result<f64, TleError> {
            float(&$field, input)
        }
    };
}

macro_rules! create_char_field {
    ($func_name:ident, $field:ident) => {
        pub fn $func_name<'a, T: Into<TleInput<'a>>>(input: T) -> Result<String, TleError> {
            text(&$field, input)
        }
    };
}

create_int_field!(line_number_1, LINE_NUMBER_1);
create_int_field!(catalog_number_1, CATALOG_NUMBER_1);
create_char_field!(classification, CLASSIFICATION);
create_int_field!(international_designator_year, INTERNATIONAL_DESIGNATOR_YEAR);
create_int_field!(
    international_designator_launch_number,
    INTERNATIONAL_DESIGNATOR_LAUNCH_NUMBER
);
create_char_field!(international_designator_piece, INTERNATIONAL_DESIGNATOR_PIECE);
create_int_field!(epoch_year, EPOCH_YEAR);
create_float_field!(epoch_day, EPOCH_DAY);
create_float_field!(first_time_derivative, FIRST_TIME_DERIVATIVE);
create_float_field!(second_time_derivative, SECOND_TIME_DERIVATIVE);
create_float_field!(bstar_drag, BSTAR_DRAG);
create_int_field!(orbit_model, ORBIT_MODEL);
create_int_field!(element_set_number, ELEMENT_SET_NUMBER);
create_int_field!(checksum_1, CHECKSUM_1);

create_int_field!(line_number_2, LINE_NUMBER_2);
create_int_field!(catalog_number_2, CATALOG_NUMBER_2);
create_float_field!(inclination, INCLINATION);
create_float_field!(right_ascension, RIGHT_ASCENSION);
create_float_field!(eccentricity, ECCENTRICITY);
create_float_field!(argument_of_perigee, ARGUMENT_OF_PERIGEE);
create_float_field!(mean_anomaly, MEAN_ANOMALY);
create_float_field!(mean_motion, MEAN_MOTION);
create_int_field!(revolution_number, REVOLUTION_NUMBER);
create_int_field!(checksum_2, CHECKSUM_2);

/// The name line, not a column
pub fn satellite_name<'a, T: Into<TleInput<'a>>>(input: T) -> Result<String, TleError> {
    match input.into() {
        TleInput::Record(tle) => Ok(tle.name.clone()),
        input => Ok(parse_tle(input)?.name),
    }
}

/// Epoch of the element set as an absolute timestamp
pub fn epoch<'a, T: Into<TleInput<'a>>>(input: T) -> Result<UtcTimestamp, TleError> {
    let tle = parse_tle(input)?;
    let two_digit = epoch_year(&tle)?;
    let year = full_year(two_digit)
        .ok_or_else(|| TleError::invalid_field(EPOCH_YEAR.name, two_digit.to_string()))?;
    epoch_timestamp(year, epoch_day(&tle)?)
}

/// International designator in COSPAR form, e.g. "1998-067A"
pub fn cospar_id<'a, T: Into<TleInput<'a>>>(input: T) -> Result<String, TleError> {
    let tle = parse_tle(input)?;
    let two_digit = international_designator_year(&tle)?;
    let year = full_year(two_digit).ok_or_else(|| {
        TleError::invalid_field(INTERNATIONAL_DESIGNATOR_YEAR.name, two_digit.to_string())
    })?;
    let launch = international_designator_launch_number(&tle)?;
    let piece = international_designator_piece(&tle)?;
    Ok(format!("{year}-{launch:03}{piece}"))
}

//! Decoding of raw column text into typed values

use crate::{parser, TleError};
use nom::{
    character::complete::{digit1, i32, i64, one_of, space0},
    combinator::{all_consuming, opt, recognize},
    number::complete::double,
    sequence::{delimited, pair, preceded},
};
use tle_types::field::{Encoding, FieldDescriptor, FieldValue};

/// Decode the text sliced from `field`'s columns according to its encoding
pub fn decode(field: &FieldDescriptor, raw: &str) -> Result<FieldValue, TleError> {
    match field.encoding {
        Encoding::Integer => {
            let value = complete(field, raw, delimited(space0, i64, space0))?;
            Ok(FieldValue::Integer(value))
        }
        Encoding::Float => {
            let value = complete(field, raw, delimited(space0, double, space0))?;
            Ok(FieldValue::Float(value))
        }
        Encoding::Char => Ok(FieldValue::Char(raw.trim().to_owned())),
        Encoding::DecimalAssumed => {
            let value = assumed_decimal(field, raw, raw)?;
            Ok(FieldValue::Float(value))
        }
        Encoding::DecimalAssumedWithExponent => {
            let value = assumed_decimal_with_exponent(field, raw)?;
            Ok(FieldValue::Float(value))
        }
    }
}

/// `[sign]digits` read as `[sign]0.digits`
fn assumed_decimal(field: &FieldDescriptor, raw: &str, mantissa: &str) -> Result<f64, TleError> {
    let (sign, digits) = complete(
        field,
        mantissa,
        delimited(space0, pair(opt(one_of("+-")), recognize(digit1)), space0),
    )?;
    let sign = if sign == Some('-') { "-" } else { "" };
    format!("{sign}0.{digits}")
        .parse::<f64>()
        .map_err(|_| TleError::invalid_field(field.name, raw))
}

/// `[sign]digits` followed by a two character signed exponent, e.g. ` 36771-4`
fn assumed_decimal_with_exponent(field: &FieldDescriptor, raw: &str) -> Result<f64, TleError> {
    if !raw.is_ascii() || raw.trim().len() < 3 {
        return Err(TleError::invalid_field(field.name, raw));
    }
    let (mantissa, exponent) = raw.split_at(raw.len() - 2);
    let mantissa = assumed_decimal(field, raw, mantissa)?;
    let exponent = complete(field, exponent, preceded(space0, i32))?;
    let value = mantissa * 10f64.powi(exponent);

    // Drop the binary noise from the scaling, the column only carries 5 digits
    format!("{value:.4e}")
        .parse::<f64>()
        .map_err(|_| TleError::invalid_field(field.name, raw))
}

/// Run `parser` over the whole of `input`
fn complete<'a, O, P>(field: &FieldDescriptor, input: &'a str, parser: P) -> Result<O, TleError>
where
    P: FnMut(&'a str) -> parser::Result<&'a str, O>,
{
    all_consuming(parser)(input)
        .map(|(_, value)| value)
        .map_err(|_| TleError::invalid_field(field.name, input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::*;
    use approx::assert_relative_eq;

    fn float(field: &FieldDescriptor, raw: &str) -> f64 {
        decode(field, raw).unwrap().as_f64().unwrap()
    }

    #[test]
    fn integers() {
        assert_eq!(decode(&CATALOG_NUMBER_1, "25544"), Ok(FieldValue::Integer(25544)));
        assert_eq!(decode(&ELEMENT_SET_NUMBER, " 999"), Ok(FieldValue::Integer(999)));
        assert_eq!(decode(&REVOLUTION_NUMBER, " 6766"), Ok(FieldValue::Integer(6766)));
        assert_eq!(decode(&INTERNATIONAL_DESIGNATOR_LAUNCH_NUMBER, "067"), Ok(FieldValue::Integer(67)));
    }

    #[test]
    fn floats() {
        assert_relative_eq!(float(&EPOCH_DAY, "206.18396726"), 206.18396726);
        assert_relative_eq!(float(&FIRST_TIME_DERIVATIVE, " .00001961"), 0.00001961);
        assert_relative_eq!(float(&FIRST_TIME_DERIVATIVE, "-.00002182"), -0.00002182);
        assert_relative_eq!(float(&INCLINATION, " 51.6400"), 51.64);
        assert_relative_eq!(float(&MEAN_MOTION, "15.54225995"), 15.54225995);
    }

    #[test]
    fn chars_are_trimmed() {
        assert_eq!(
            decode(&INTERNATIONAL_DESIGNATOR_PIECE, "A  "),
            Ok(FieldValue::Char("A".to_owned()))
        );
        assert_eq!(decode(&CLASSIFICATION, "U"), Ok(FieldValue::Char("U".to_owned())));
    }

    #[test]
    fn decimal_assumed() {
        assert_relative_eq!(float(&ECCENTRICITY, "0006317"), 0.0006317);
        assert_relative_eq!(float(&ECCENTRICITY, "0001640"), 0.000164);
    }

    #[test]
    fn decimal_assumed_with_exponent() {
        assert_relative_eq!(float(&BSTAR_DRAG, " 36771-4"), 0.000036771);
        assert_relative_eq!(float(&BSTAR_DRAG, "-11606-4"), -0.000011606);
        assert_relative_eq!(float(&BSTAR_DRAG, " 12345+1"), 1.2345);
        assert_eq!(float(&SECOND_TIME_DERIVATIVE, " 00000-0"), 0.0);
        assert_eq!(float(&BSTAR_DRAG, " 00000+0"), 0.0);
    }

    #[test]
    fn invalid_text() {
        let err = TleError::InvalidField {
            field: "catalog_number_1",
            value: "25X44".to_owned(),
        };
        assert_eq!(decode(&CATALOG_NUMBER_1, "25X44"), Err(err));
        assert!(decode(&ORBIT_MODEL, " ").is_err());
        assert!(decode(&INCLINATION, "  abc   ").is_err());
        assert!(decode(&ECCENTRICITY, "00.6317").is_err());
        assert!(decode(&BSTAR_DRAG, "      -4").is_err());
        assert!(decode(&BSTAR_DRAG, " 36771x4").is_err());
        assert!(decode(&BSTAR_DRAG, "-4").is_err());
    }
}

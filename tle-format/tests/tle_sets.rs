//! Parse a multi-satellite element set file and read fields back out of it

use tle_format::*;
use tle_types::{
    field::{Encoding, FieldDescriptor, FieldValue},
    tle::TleRecord,
};

const STATIONS: &str = include_str!("../test_fixtures/stations.txt");

fn stations() -> Vec<TleRecord> {
    parse_tle_set(STATIONS).unwrap()
}

#[test]
fn every_set_is_parsed_and_valid() {
    let tles = stations();
    let names: Vec<&str> = tles.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["ISS (ZARYA)", "GEO1", "GEO2", "NOAA 19", "HST"]);
    for tle in tles.iter() {
        assert!(is_valid(tle), "{} should be valid", tle.name);
        assert_eq!(tle.line1.len(), LINE_LENGTH);
        assert_eq!(tle.line2.len(), LINE_LENGTH);
    }
}

#[test]
fn text_form_parses_back_to_the_same_record() {
    for tle in stations() {
        let text = tle.to_string();
        assert_eq!(parse_tle(text.as_str()).unwrap(), tle);
        assert_eq!(parse_tle(&[tle.line1.as_str(), tle.line2.as_str()]).unwrap().lines(), tle.lines());
    }
}

#[test]
fn changing_any_body_digit_breaks_the_checksum() {
    for tle in stations() {
        for (idx, c) in tle.line1.char_indices().skip(1) {
            if idx == LINE_LENGTH - 1 {
                break;
            }
            let Some(d) = c.to_digit(10) else {
                continue;
            };
            let mut line1 = tle.line1.clone();
            line1.replace_range(idx..idx + 1, &((d + 1) % 10).to_string());
            assert!(!line_checksum_matches(&line1), "{line1}");
            assert!(!is_valid(&[line1.as_str(), tle.line2.as_str()]));
        }
    }
}

#[test]
fn catalog_numbers_agree_across_lines() {
    for tle in stations() {
        assert_eq!(catalog_number_1(&tle), catalog_number_2(&tle));
    }
}

#[test]
fn geostationary_fields() {
    let geo1 = &stations()[1];
    assert_eq!(cospar_id(geo1).unwrap(), "2011-019A");
    assert_eq!(epoch_year(geo1).unwrap(), 23);
    assert!((mean_motion(geo1).unwrap() - 1.00272292).abs() < 1e-12);
    assert!((first_time_derivative(geo1).unwrap() + 0.00000009).abs() < 1e-15);
    assert_eq!(bstar_drag(geo1).unwrap(), 0.0);
}

#[test]
fn every_field_decodes_for_every_set() {
    for tle in stations() {
        for field in FIELDS.iter() {
            assert!(get_field(field, &tle).is_ok(), "{} {field}", tle.name);
        }
    }
}

/// Write a decoded value back into its column the way element sets are published
fn encode(field: &FieldDescriptor, value: &FieldValue, raw: &str) -> String {
    let width = field.length;
    match field.encoding {
        Encoding::Integer => format!("{:0width$}", value.as_i64().unwrap()),
        Encoding::Char => format!("{:<width$}", value.as_str().unwrap()),
        Encoding::Float => {
            let decimals = raw.trim().split('.').nth(1).map_or(0, str::len);
            let mut text = format!("{:.*}", decimals, value.as_f64().unwrap());
            // Fractions are published without the leading zero
            if raw.trim().trim_start_matches('-').starts_with('.') {
                text = text.replacen("0.", ".", 1);
            }
            format!("{text:>width$}")
        }
        Encoding::DecimalAssumed => {
            let scale = 10f64.powi(width as i32);
            format!("{:0width$}", (value.as_f64().unwrap() * scale).round() as i64)
        }
        Encoding::DecimalAssumedWithExponent => {
            let v = value.as_f64().unwrap();
            let sign = if v < 0.0 { '-' } else { ' ' };
            if v == 0.0 {
                // The exponent of zero is arbitrary, keep the published one
                return format!("{sign}00000{}", &raw[6..]);
            }
            let exponent = v.abs().log10().floor() as i32 + 1;
            let mantissa = (v.abs() / 10f64.powi(exponent) * 1e5).round() as i64;
            format!("{sign}{mantissa:05}{exponent:+}")
        }
    }
}

#[test]
fn decoded_fields_encode_back_to_their_columns() {
    for tle in stations() {
        for field in FIELDS.iter() {
            let line = tle.lines()[field.line.index()];
            let raw = &line[field.start..field.end()];
            let value = get_field(field, &tle).unwrap();
            let expected = match field.encoding {
                // Integer columns are blank padded on the left
                Encoding::Integer => raw.replace(' ', "0"),
                _ => raw.to_owned(),
            };
            assert_eq!(
                encode(field, &value, raw),
                expected,
                "{} {field} from {raw:?}",
                tle.name
            );
        }
    }
}

//! Modulo-10 line checksums

use crate::{
    decode::decode,
    fields::column,
    parser::{parse_tle, TleInput},
    schema::{CHECKSUM_1, CHECKSUM_2, LINE_NUMBER_1, LINE_NUMBER_2},
    TleError,
};
use tle_types::{field::FieldDescriptor, tle::TleRecord};
use tracing::debug;

/// Checksum over every character but the last: digits count their value,
/// '-' counts 1, anything else 0.
pub fn compute_checksum(line: &str) -> Result<u8, TleError> {
    let mut chars = line.chars();
    chars.next_back();
    let body = chars.as_str();
    if body.is_empty() {
        return Err(TleError::MalformedLine);
    }

    let sum: u32 = body
        .chars()
        .map(|c| match c {
            '-' => 1,
            c => c.to_digit(10).unwrap_or(0),
        })
        .sum();
    Ok((sum % 10) as u8)
}

/// The checksum digit stored in column 68
pub fn checksum_field(line: &str) -> Result<u8, TleError> {
    let field = if line.starts_with('2') {
        &CHECKSUM_2
    } else {
        &CHECKSUM_1
    };
    let raw = column(field, line)?;
    raw.parse::<u8>()
        .map_err(|_| TleError::invalid_field(field.name, raw))
}

pub fn line_checksum_matches(line: &str) -> bool {
    match (compute_checksum(line), checksum_field(line)) {
        (Ok(computed), Ok(stored)) => computed == stored,
        _ => false,
    }
}

/// True when the input parses to two element lines numbered 1 and 2 whose
/// stored checksums match the computed ones. Never fails.
pub fn is_valid<'a, T: Into<TleInput<'a>>>(input: T) -> bool {
    match input.into() {
        TleInput::Record(tle) => record_is_valid(tle),
        input => match parse_tle(input) {
            Ok(tle) => record_is_valid(&tle),
            Err(e) => {
                debug!(err = %e, "Rejecting unparseable TLE");
                false
            }
        },
    }
}

fn record_is_valid(tle: &TleRecord) -> bool {
    let checks: [(&FieldDescriptor, &str, i64); 2] = [
        (&LINE_NUMBER_1, tle.line1.as_str(), 1),
        (&LINE_NUMBER_2, tle.line2.as_str(), 2),
    ];

    checks.into_iter().all(|(field, line, expected)| {
        let number = column(field, line).and_then(|raw| decode(field, raw));
        if number.as_ref().ok().and_then(|v| v.as_i64()) != Some(expected) {
            debug!(name = %tle.name, expected, "Element line has the wrong line number");
            return false;
        }
        if !line_checksum_matches(line) {
            debug!(name = %tle.name, line = expected, "Element line checksum mismatch");
            return false;
        }
        true
    })
}

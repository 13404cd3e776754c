//! Normalizes the shapes a TLE arrives in into a `TleRecord`

use crate::TleError;
use nom::{
    character::complete::{char, line_ending, not_line_ending, space0},
    combinator::{all_consuming, opt, recognize, verify},
    error::ErrorKind,
    multi::{fold_many0, many0, separated_list0},
    sequence::{pair, preceded, terminated},
};
use std::{borrow::Cow, sync::Arc};
use tle_types::tle::{TleRecord, UNKNOWN_SATELLITE_NAME};
use tracing::debug;

pub type Result<I, O, E = ParseError<I>> = std::result::Result<(I, O), nom::Err<E>>;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ParseError<I> {
    #[error("Parse error")]
    Nom(I, ErrorKind),
}

impl<I> nom::error::ParseError<I> for ParseError<I> {
    fn from_error_kind(s: I, kind: ErrorKind) -> Self {
        ParseError::Nom(s, kind)
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

/// Anything that can be normalized into a `TleRecord`
#[derive(Clone, Debug, PartialEq)]
pub enum TleInput<'a> {
    /// Newline-delimited text, with or without a name line
    Text(&'a str),
    /// One entry per line, with or without a name line
    Lines(Vec<&'a str>),
    /// Already parsed, passed through untouched
    Record(&'a TleRecord),
}

impl<'a> TleInput<'a> {
    /// Text form of the input, equal inputs produce equal text
    pub fn raw_text(&self) -> Cow<'a, str> {
        match self {
            TleInput::Text(s) => Cow::Borrowed(*s),
            TleInput::Lines(lines) => Cow::Owned(lines.join("\n")),
            TleInput::Record(r) => Cow::Owned(r.to_string()),
        }
    }
}

impl<'a> From<&'a str> for TleInput<'a> {
    fn from(value: &'a str) -> Self {
        TleInput::Text(value)
    }
}

impl<'a> From<&'a String> for TleInput<'a> {
    fn from(value: &'a String) -> Self {
        TleInput::Text(value.as_str())
    }
}

impl<'a, S: AsRef<str>> From<&'a [S]> for TleInput<'a> {
    fn from(value: &'a [S]) -> Self {
        TleInput::Lines(value.iter().map(AsRef::as_ref).collect())
    }
}

impl<'a, S: AsRef<str>, const N: usize> From<&'a [S; N]> for TleInput<'a> {
    fn from(value: &'a [S; N]) -> Self {
        TleInput::from(value.as_slice())
    }
}

impl<'a, S: AsRef<str>> From<&'a Vec<S>> for TleInput<'a> {
    fn from(value: &'a Vec<S>) -> Self {
        TleInput::from(value.as_slice())
    }
}

impl<'a> From<&'a TleRecord> for TleInput<'a> {
    fn from(value: &'a TleRecord) -> Self {
        TleInput::Record(value)
    }
}

impl<'a> From<&'a Arc<TleRecord>> for TleInput<'a> {
    fn from(value: &'a Arc<TleRecord>) -> Self {
        TleInput::Record(value.as_ref())
    }
}

/// Parse a single element set.
///
/// When more than two non-blank lines are present the first one is the
/// satellite name, otherwise the name is "Unknown". Lines are trimmed.
pub fn parse_tle<'a, T: Into<TleInput<'a>>>(input: T) -> std::result::Result<TleRecord, TleError> {
    let lines = match input.into() {
        TleInput::Record(r) => return Ok(r.clone()),
        TleInput::Lines(lines) => lines,
        TleInput::Text(s) => {
            let (_, lines) = all_consuming(text_lines)(s)
                .map_err(|e| TleError::InvalidInput(e.to_string()))?;
            lines
        }
    };
    record_from_lines(lines)
}

/// Parse back-to-back element sets, each with or without a name line.
/// Blank lines between sets are ignored.
pub fn parse_tle_set(set: &str) -> std::result::Result<Vec<TleRecord>, TleError> {
    let (rest, tles) = fold_many0(tle, Vec::new, |mut tles: Vec<TleRecord>, tle| {
        tles.push(tle);
        tles
    })(set)
    .map_err(|e| TleError::InvalidInput(e.to_string()))?;

    if !rest.trim().is_empty() {
        let line = rest.trim_start().lines().next().unwrap_or_default();
        return Err(TleError::InvalidInput(format!(
            "Unexpected line after {} element set(s): '{line}'",
            tles.len()
        )));
    }

    debug!(count = tles.len(), "Parsed TLE set");
    Ok(tles)
}

fn record_from_lines(lines: Vec<&str>) -> std::result::Result<TleRecord, TleError> {
    let mut lines: Vec<&str> = lines
        .into_iter()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let name = if lines.len() > 2 {
        lines.remove(0)
    } else {
        UNKNOWN_SATELLITE_NAME
    };

    match lines.as_slice() {
        [line1, line2] => Ok(TleRecord::new(name, *line1, *line2)),
        _ => Err(TleError::InvalidInput(format!(
            "Expected 2 element lines, found {}",
            lines.len()
        ))),
    }
}

fn text_lines(s: &str) -> Result<&str, Vec<&str>> {
    separated_list0(line_ending, not_line_ending)(s)
}

fn tle(s: &str) -> Result<&str, TleRecord> {
    let (s, _) = many0(pair(space0, line_ending))(s)?;
    let (s, name) = opt(terminated(name_line, line_ending))(s)?;
    let (s, line1) = element_line('1')(s)?;
    let (s, _) = line_ending(s)?;
    let (s, line2) = element_line('2')(s)?;
    let (s, _) = opt(line_ending)(s)?;
    Ok((
        s,
        TleRecord::new(
            name.map(str::trim).unwrap_or(UNKNOWN_SATELLITE_NAME),
            line1.trim(),
            line2.trim(),
        ),
    ))
}

fn name_line(s: &str) -> Result<&str, &str> {
    verify(not_line_ending, |l: &str| {
        let l = l.trim_start();
        !l.is_empty() && !l.starts_with("1 ") && !l.starts_with("2 ")
    })(s)
}

fn element_line(number: char) -> impl FnMut(&str) -> Result<&str, &str> {
    move |s| {
        preceded(
            space0,
            recognize(pair(char(number), preceded(char(' '), not_line_ending))),
        )(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const ISS_LINE1: &str =
        "1 25544U 98067A   17206.18396726  .00001961  00000-0  36771-4 0  9993";
    const ISS_LINE2: &str =
        "2 25544  51.6400 208.9163 0006317  69.9862  25.2906 15.54225995 67660";

    const TLE_SET: &str = indoc! {r#"GEO1
        1 37481U 11019A   23190.45078927 -.00000009  00000-0  00000+0 0  9991
        2 37481   2.3847  40.6385 0001640  70.7486  43.7146  1.00272292 44578

        GEO2
        1 39120U 13011A   23190.50177227 -.00000262  00000-0  00000+0 0  9997
        2 39120   2.3950  38.7964 0001772  68.0002 323.0070  1.00271163 37822
        1 25544U 98067A   17206.18396726  .00001961  00000-0  36771-4 0  9993
        2 25544  51.6400 208.9163 0006317  69.9862  25.2906 15.54225995 67660
        "#};

    #[test]
    fn parse_text_with_name() {
        let text = format!("ISS (ZARYA)\n{ISS_LINE1}\n{ISS_LINE2}");
        let tle = parse_tle(text.as_str()).unwrap();
        assert_eq!(tle, TleRecord::new("ISS (ZARYA)", ISS_LINE1, ISS_LINE2));
    }

    #[test]
    fn parse_text_without_name() {
        let text = format!("{ISS_LINE1}\r\n{ISS_LINE2}\n");
        let tle = parse_tle(&text).unwrap();
        assert_eq!(tle.name, UNKNOWN_SATELLITE_NAME);
        assert_eq!(tle.lines(), [ISS_LINE1, ISS_LINE2]);
    }

    #[test]
    fn parse_lines_trims() {
        let padded = [
            "  ISS (ZARYA)  ".to_string(),
            format!("  {ISS_LINE1}  "),
            format!("\t{ISS_LINE2}"),
        ];
        let tle = parse_tle(&padded).unwrap();
        assert_eq!(tle, TleRecord::new("ISS (ZARYA)", ISS_LINE1, ISS_LINE2));
    }

    #[test]
    fn record_passthrough() {
        let tle = TleRecord::new("ISS (ZARYA)", ISS_LINE1, ISS_LINE2);
        assert_eq!(parse_tle(&tle).unwrap(), tle);
        assert_eq!(parse_tle(TleInput::Record(&tle).raw_text().as_ref()).unwrap(), tle);
    }

    #[test]
    fn wrong_line_counts() {
        assert!(matches!(parse_tle(""), Err(TleError::InvalidInput(_))));
        assert!(matches!(parse_tle(ISS_LINE1), Err(TleError::InvalidInput(_))));
        let four = ["NAME", ISS_LINE1, ISS_LINE2, ISS_LINE2];
        assert!(matches!(parse_tle(&four), Err(TleError::InvalidInput(_))));
        let blank_line = [ISS_LINE1, "   "];
        assert!(matches!(parse_tle(&blank_line), Err(TleError::InvalidInput(_))));
    }

    #[test]
    fn parse_set() {
        let tles = parse_tle_set(TLE_SET).unwrap();
        assert_eq!(tles.len(), 3);
        assert_eq!(tles[0].name, "GEO1");
        assert_eq!(tles[1].name, "GEO2");
        assert_eq!(tles[2], TleRecord::new(UNKNOWN_SATELLITE_NAME, ISS_LINE1, ISS_LINE2));
    }

    #[test]
    fn parse_set_rejects_dangling_lines() {
        let text = format!("{TLE_SET}ORPHAN\n{ISS_LINE1}\n");
        assert!(matches!(
            parse_tle_set(&text),
            Err(TleError::InvalidInput(_))
        ));
    }
}

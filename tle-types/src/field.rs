use derive_more::Display;
use serde::Serialize;

/// How the characters of a fixed-column field map onto a value
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, Serialize)]
pub enum Encoding {
    /// Base-10 integer, surrounding blanks ignored
    Integer,
    /// Decimal literal with the point written out
    Float,
    /// Text, trimmed
    Char,
    /// Digits with an implied leading `0.`
    DecimalAssumed,
    /// Assumed-decimal mantissa followed by a signed one-digit exponent, e.g. ` 36771-4`
    DecimalAssumedWithExponent,
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display, Serialize)]
pub enum LineNumber {
    #[display(fmt = "1")]
    One,
    #[display(fmt = "2")]
    Two,
}

impl LineNumber {
    pub const fn index(self) -> usize {
        match self {
            LineNumber::One => 0,
            LineNumber::Two => 1,
        }
    }
}

/// One fixed-column value of a TLE line.
///
/// `start` is the zero-based column of the first character.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, Serialize)]
#[display(
    fmt = "{{{}: line {}, columns {}..{}, {}}}",
    "name",
    "line",
    "start",
    "self.end()",
    "encoding"
)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub line: LineNumber,
    pub start: usize,
    pub length: usize,
    pub encoding: Encoding,
}

impl FieldDescriptor {
    pub const fn new(
        name: &'static str,
        line: LineNumber,
        start: usize,
        length: usize,
        encoding: Encoding,
    ) -> Self {
        Self {
            name,
            line,
            start,
            length,
            encoding,
        }
    }

    /// One past the last column
    pub const fn end(&self) -> usize {
        self.start + self.length
    }

    pub const fn overlaps(&self, other: &FieldDescriptor) -> bool {
        self.line.index() == other.line.index()
            && self.start < other.end()
            && other.start < self.end()
    }
}

/// A decoded field value
#[derive(Clone, PartialEq, Debug, Display, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Char(String),
}

impl FieldValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Integers widen to floats
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(v) => Some(*v as f64),
            FieldValue::Float(v) => Some(*v),
            FieldValue::Char(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Char(v) => Some(v),
            _ => None,
        }
    }
}

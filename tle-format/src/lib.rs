pub use crate::checksum::{checksum_field, compute_checksum, is_valid, line_checksum_matches};
pub use crate::decode::decode;
pub use crate::epoch::{epoch_timestamp, full_year};
pub use crate::error::TleError;
pub use crate::fields::*;
pub use crate::parser::{parse_tle, parse_tle_set, ParseError, TleInput};
pub use crate::schema::FIELDS;

pub mod checksum;
pub mod decode;
pub mod epoch;
pub mod error;
pub mod fields;
pub mod parser;
pub mod schema;

/// Width of a standard element line, checksum included
pub const LINE_LENGTH: usize = 69;

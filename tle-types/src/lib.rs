extern crate nalgebra as na;

pub mod field;
pub mod geo;
pub mod prelude;
pub mod time;
pub mod tle;
pub mod track;

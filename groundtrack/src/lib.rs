//! Ground tracks from two-line element sets
//!
//! `Engine` answers position, crossing, track and bearing queries for TLEs in
//! any of the shapes `tle_format::TleInput` accepts, memoizing every result.

pub extern crate nalgebra as na;

pub use crate::antemeridian::crosses_antemeridian;
pub use crate::bearing::initial_bearing;
pub use crate::cache::{CacheSizes, CrossingHistory};
pub use crate::config::EngineConfig;
pub use crate::engine::Engine;
pub use crate::error::{ConfigError, Error};
pub use crate::propagator::{PropagationError, Propagator, Sgp4Propagator};

pub mod antemeridian;
pub mod bearing;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod propagator;
pub mod track;
pub mod units;
pub mod visibility;

#[cfg(test)]
mod test_util;

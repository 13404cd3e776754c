use crate::{
    propagator::PropagationError,
    units::{Time, Timestamp},
};
use tle_format::TleError;
use tle_types::geo::Observer;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Tle(#[from] TleError),
    #[error("TLE for '{0}' failed validation")]
    Validation(String),
    #[error(transparent)]
    Propagation(#[from] PropagationError),
    #[error("Invalid observer {0}")]
    InvalidObserver(Observer),
    #[error("{at} shifted by {by:?} is outside the supported calendar range")]
    TimeOutOfRange { at: Timestamp, by: Time },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file. {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file. {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid configuration. {0}")]
    Invalid(String),
}

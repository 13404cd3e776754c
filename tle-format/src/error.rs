#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TleError {
    #[error("Invalid TLE input: {0}")]
    InvalidInput(String),
    #[error("Cannot compute a checksum over an empty line body")]
    MalformedLine,
    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidField { field: &'static str, value: String },
}

impl TleError {
    pub(crate) fn invalid_field<S: Into<String>>(field: &'static str, value: S) -> Self {
        TleError::InvalidField {
            field,
            value: value.into(),
        }
    }
}

/// Convenience result type used across heartfield.
pub type HeartfieldResult<T> = Result<T, HeartfieldError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Particle generation itself is total; errors only surface at the configuration
/// and IO boundaries.
#[derive(thiserror::Error, Debug)]
pub enum HeartfieldError {
    /// Invalid user-provided configuration values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while locating or reading a configuration source.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HeartfieldError {
    /// Build a [`HeartfieldError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HeartfieldError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`HeartfieldError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for HeartfieldError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl CoreError {
    /// Builds an `InvalidArgument` error naming the offending parameter.
    #[must_use]
    pub fn invalid_argument(name: &str, reason: &str) -> Self {
        Self::InvalidArgument(format!("`{name}` {reason}"))
    }
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;

use thiserror::Error;

/// Bench harness errors
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(transparent)]
    CoreError(#[from] keystone_core::error::CoreError),
}

pub type BenchResult<T> = std::result::Result<T, BenchError>;

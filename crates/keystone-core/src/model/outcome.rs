//! Closed success/failure outcome type.
//!
//! ## Summary
//! [`Outcome`] replaces fault-based control flow: an operation that can fail
//! returns either `Success` (optionally with a value) or `Failure` carrying an
//! [`Error`]. The unit form `Outcome` stands for an operation without a payload,
//! `Outcome<T>` for one that produces a `T`.
//!
//! A failed outcome never carries a value: [`Outcome::value`] returns `None`
//! for a failure instead of panicking.

use crate::error::{CoreError, CoreResult};
use crate::model::error::Error;

/// Result of an operation: exactly one of a success payload or an [`Error`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub enum Outcome<T = ()> {
    Success(T),
    Failure(Error),
}

impl Outcome {
    /// Successful outcome without a payload.
    pub const fn success() -> Self {
        Self::Success(())
    }
}

impl<T> Outcome<T> {
    /// Successful outcome carrying `value`.
    pub const fn with_value(value: T) -> Self {
        Self::Success(value)
    }

    /// Failed outcome carrying `error`.
    pub const fn failure(error: Error) -> Self {
        Self::Failure(error)
    }

    /// ## Summary
    /// Builds a success from a value that may be absent.
    ///
    /// ## Errors
    /// Returns `InvalidArgument` when `value` is `None`.
    pub fn try_success(value: Option<T>) -> CoreResult<Self> {
        value
            .map(Self::Success)
            .ok_or_else(|| CoreError::invalid_argument("value", "is required for a success"))
    }

    /// ## Summary
    /// Builds a failure from an error that may be absent.
    ///
    /// ## Errors
    /// Returns `InvalidArgument` when `error` is `None`.
    pub fn try_failure(error: Option<Error>) -> CoreResult<Self> {
        error
            .map(Self::Failure)
            .ok_or_else(|| CoreError::invalid_argument("error", "is required for a failure"))
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The error of a failure, `None` on success.
    #[must_use]
    pub const fn error(&self) -> Option<&Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// The payload of a success, `None` on failure.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    #[must_use]
    pub fn into_error(self) -> Option<Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// ## Summary
    /// Converts into a standard `Result` so `?` can be used.
    ///
    /// ## Errors
    /// Returns the carried [`Error`] when the outcome is a failure.
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Transforms the success payload, leaving a failure untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains another fallible step after a success.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T> From<Error> for Outcome<T> {
    fn from(error: Error) -> Self {
        Self::Failure(error)
    }
}

impl<T> From<Result<T, Error>> for Outcome<T> {
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Error> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

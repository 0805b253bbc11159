//! Narrowing errors

use thiserror::Error;

/// Result type for runtime narrowing of an [`Outcome`](crate::domain::outcome::Outcome)
pub type NarrowResult<T> = std::result::Result<T, NarrowError>;

/// Raised when an outcome is narrowed to the variant it does not hold
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NarrowError {
    #[error("expected a success outcome, found a failure")]
    ExpectedSuccess,

    #[error("expected a failure outcome, found a success")]
    ExpectedFailure,
}

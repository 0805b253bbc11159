//! Outcome value - the union of a success and a failure

use super::combinator::{Callbacks, MatchArms};
use super::variant::{Failure, Success};
use crate::domain::shared::error::{NarrowError, NarrowResult};
use tracing::trace;

/// Either a [`Success`] carrying `T` or a [`Failure`] carrying `E`
///
/// Both payloads default to `()`, the marker for "no payload supplied".
/// Matching on the variant narrows the value, and inside each arm only the
/// live payload can be reached:
///
/// ```
/// use status_result::{success, Outcome};
///
/// let res: Outcome<i32, &str> = success(5);
/// match &res {
///     Outcome::Success(ok) => assert_eq!(*ok.data(), 5),
///     Outcome::Failure(fail) => unreachable!("{}", fail.err()),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome<T = (), E = ()> {
    /// Operation produced a value
    Success(Success<T>),
    /// Operation failed
    Failure(Failure<E>),
}

impl<T, E> Outcome<T, E> {
    /// Discriminant: `true` for a success, `false` for a failure
    pub fn success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Success payload, `None` on a failure
    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Success(ok) => Some(ok.data()),
            Outcome::Failure(_) => None,
        }
    }

    /// Failure payload, `None` on a success
    pub fn err(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(fail) => Some(fail.err()),
        }
    }

    pub fn as_success(&self) -> NarrowResult<&Success<T>> {
        match self {
            Outcome::Success(ok) => Ok(ok),
            Outcome::Failure(_) => Err(NarrowError::ExpectedSuccess),
        }
    }

    pub fn as_failure(&self) -> NarrowResult<&Failure<E>> {
        match self {
            Outcome::Success(_) => Err(NarrowError::ExpectedFailure),
            Outcome::Failure(fail) => Ok(fail),
        }
    }

    /// Narrow to the success, handing back the failure otherwise
    pub fn into_success(self) -> Result<Success<T>, Failure<E>> {
        match self {
            Outcome::Success(ok) => Ok(ok),
            Outcome::Failure(fail) => Err(fail),
        }
    }

    /// Narrow to the failure, handing back the success otherwise
    pub fn into_failure(self) -> Result<Failure<E>, Success<T>> {
        match self {
            Outcome::Success(ok) => Err(ok),
            Outcome::Failure(fail) => Ok(fail),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(ok) => Outcome::Success(ok.as_ref()),
            Outcome::Failure(fail) => Outcome::Failure(fail.as_ref()),
        }
    }

    /// Run `f` on the success payload
    ///
    /// Returns `None` without calling `f` on a failure. Use
    /// [`match_with`](Self::match_with) when a result is needed for both
    /// variants.
    pub fn is_ok<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        match self {
            Outcome::Success(ok) => Some(ok.is_ok(f)),
            Outcome::Failure(_) => {
                trace!(target: "status_result::outcome", "is_ok skipped on failure");
                None
            }
        }
    }

    /// Run `f` on the failure payload
    ///
    /// Returns `None` without calling `f` on a success.
    pub fn is_err<R>(&self, f: impl FnOnce(&E) -> R) -> Option<R> {
        match self {
            Outcome::Success(_) => {
                trace!(target: "status_result::outcome", "is_err skipped on success");
                None
            }
            Outcome::Failure(fail) => Some(fail.is_err(f)),
        }
    }

    /// Run exactly one of the two callbacks and return its result
    ///
    /// ```
    /// use status_result::{error, success, Outcome};
    ///
    /// let ok: Outcome<i32, &str> = success(5);
    /// assert_eq!(ok.match_with(|x| x + 1, |_| -1), 6);
    ///
    /// let fail: Outcome<i32, &str> = error("bad");
    /// assert_eq!(fail.match_with(|_| 0, |e| e.len()), 3);
    /// ```
    pub fn match_with<R>(&self, is_ok: impl FnOnce(&T) -> R, is_err: impl FnOnce(&E) -> R) -> R {
        self.as_ref().visit(Callbacks { is_ok, is_err })
    }

    /// Like [`match_with`](Self::match_with), moving the payload into the
    /// callback
    pub fn into_match<R>(self, is_ok: impl FnOnce(T) -> R, is_err: impl FnOnce(E) -> R) -> R {
        self.visit(Callbacks { is_ok, is_err })
    }

    /// Dispatch the outcome to one arm of `arms`
    pub fn visit<A>(self, arms: A) -> A::Output
    where
        A: MatchArms<T, E>,
    {
        trace!(
            target: "status_result::outcome",
            success = self.success(),
            "dispatching outcome to match arms"
        );
        match self {
            Outcome::Success(ok) => arms.is_ok(ok.into_data()),
            Outcome::Failure(fail) => arms.is_err(fail.into_err()),
        }
    }
}

impl<T, E> From<Success<T>> for Outcome<T, E> {
    fn from(ok: Success<T>) -> Self {
        Outcome::Success(ok)
    }
}

impl<T, E> From<Failure<E>> for Outcome<T, E> {
    fn from(fail: Failure<E>) -> Self {
        Outcome::Failure(fail)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Outcome::Success(Success::new(data)),
            Err(err) => Outcome::Failure(Failure::new(err)),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(ok) => Ok(ok.into_data()),
            Outcome::Failure(fail) => Err(fail.into_err()),
        }
    }
}

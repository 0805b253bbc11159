//! The two narrowed variants of an outcome
//!
//! [`Success`] and [`Failure`] are what an [`Outcome`](super::Outcome)
//! narrows to. Each one only carries its own payload. The other side is
//! typed as [`Never`], so reading it gives an `Option<Never>` and a callback
//! for it takes a `Never` argument. Neither can ever hold or receive a value.

use super::combinator::MatchArms;
use crate::domain::shared::never::Never;

/// The success variant
///
/// ```
/// use status_result::Success;
///
/// let ok = Success::new(5);
/// assert!(ok.success());
/// assert_eq!(*ok.data(), 5);
/// assert!(ok.err().is_none());
/// ```
///
/// There is no failure payload to read from a success:
///
/// ```compile_fail
/// use status_result::Success;
///
/// let ok = Success::new("hello!");
/// let len = ok.err().unwrap().len();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Success<T = ()> {
    data: T,
}

impl<T> Success<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// Discriminant, always `true`
    pub const fn success(&self) -> bool {
        true
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn into_data(self) -> T {
        self.data
    }

    /// The failure slot, which a success never fills
    pub fn err(&self) -> Option<Never> {
        None
    }

    pub fn is_ok<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.data)
    }

    /// No-op: `f` can only be called with a `Never`
    pub fn is_err<R>(&self, _f: impl FnOnce(Never) -> R) {}

    pub fn match_with<R, S>(
        &self,
        is_ok: impl FnOnce(&T) -> R,
        _is_err: impl FnOnce(Never) -> S,
    ) -> R {
        is_ok(&self.data)
    }

    /// Consume the success through a set of arms; only `is_ok` runs
    pub fn visit<A>(self, arms: A) -> A::Output
    where
        A: MatchArms<T, Never>,
    {
        arms.is_ok(self.data)
    }

    pub fn into_match<R, S>(
        self,
        is_ok: impl FnOnce(T) -> R,
        _is_err: impl FnOnce(Never) -> S,
    ) -> R {
        is_ok(self.data)
    }

    pub fn as_ref(&self) -> Success<&T> {
        Success { data: &self.data }
    }
}

impl Success<()> {
    /// A success with no payload
    pub const fn empty() -> Self {
        Self { data: () }
    }
}

impl Default for Success<()> {
    fn default() -> Self {
        Self::empty()
    }
}

/// The failure variant
///
/// ```
/// use status_result::Failure;
///
/// let fail = Failure::new("bad");
/// assert!(!fail.success());
/// assert_eq!(*fail.err(), "bad");
/// assert!(fail.data().is_none());
/// ```
///
/// There is no success payload to read from a failure:
///
/// ```compile_fail
/// use status_result::Failure;
///
/// let fail = Failure::new("bad");
/// let greeting = fail.data().unwrap().greeting;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Failure<E = ()> {
    err: E,
}

impl<E> Failure<E> {
    pub fn new(err: E) -> Self {
        Self { err }
    }

    /// Discriminant, always `false`
    pub const fn success(&self) -> bool {
        false
    }

    pub fn err(&self) -> &E {
        &self.err
    }

    pub fn into_err(self) -> E {
        self.err
    }

    /// The success slot, which a failure never fills
    pub fn data(&self) -> Option<Never> {
        None
    }

    /// No-op: `f` can only be called with a `Never`
    pub fn is_ok<R>(&self, _f: impl FnOnce(Never) -> R) {}

    pub fn is_err<R>(&self, f: impl FnOnce(&E) -> R) -> R {
        f(&self.err)
    }

    pub fn match_with<R, S>(
        &self,
        _is_ok: impl FnOnce(Never) -> R,
        is_err: impl FnOnce(&E) -> S,
    ) -> S {
        is_err(&self.err)
    }

    /// Consume the failure through a set of arms; only `is_err` runs
    pub fn visit<A>(self, arms: A) -> A::Output
    where
        A: MatchArms<Never, E>,
    {
        arms.is_err(self.err)
    }

    pub fn into_match<R, S>(
        self,
        _is_ok: impl FnOnce(Never) -> R,
        is_err: impl FnOnce(E) -> S,
    ) -> S {
        is_err(self.err)
    }

    pub fn as_ref(&self) -> Failure<&E> {
        Failure { err: &self.err }
    }
}

impl Failure<()> {
    /// A failure with no payload
    pub const fn empty() -> Self {
        Self { err: () }
    }
}

impl Default for Failure<()> {
    fn default() -> Self {
        Self::empty()
    }
}

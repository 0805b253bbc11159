//! Callback-style consumption of an outcome

/// A pair of arms, one per variant
///
/// Dispatching an outcome against a `MatchArms` runs exactly one arm. The
/// arm for the other variant is dropped without being called.
pub trait MatchArms<T, E> {
    type Output;

    /// Called with the success payload
    fn is_ok(self, data: T) -> Self::Output;

    /// Called with the failure payload
    fn is_err(self, err: E) -> Self::Output;
}

/// Two closures used as match arms
///
/// Field names follow the combinators they mirror, so
/// `Callbacks { is_ok, is_err }` reads like the arms of a match.
#[derive(Debug, Clone, Copy)]
pub struct Callbacks<F, G> {
    pub is_ok: F,
    pub is_err: G,
}

impl<F, G> Callbacks<F, G> {
    pub fn new(is_ok: F, is_err: G) -> Self {
        Self { is_ok, is_err }
    }
}

impl<T, E, R, F, G> MatchArms<T, E> for Callbacks<F, G>
where
    F: FnOnce(T) -> R,
    G: FnOnce(E) -> R,
{
    type Output = R;

    fn is_ok(self, data: T) -> R {
        (self.is_ok)(data)
    }

    fn is_err(self, err: E) -> R {
        (self.is_err)(err)
    }
}

//! The uninhabited type
//!
//! [`Never`] stands in for the payload of the variant an outcome does not
//! hold. A callback taking `Never` can be written but can never run, and an
//! `Option<Never>` is always `None`.

use thiserror::Error;

/// A type with no values
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Error)]
#[error("unreachable: a Never value was observed")]
pub enum Never {}

impl Never {
    /// Turn an impossible value into any type
    pub fn absurd<T>(self) -> T {
        match self {}
    }
}

//! Outcome bounded context - a success or a failure, never both

pub mod combinator;
pub mod factory;
pub mod value;
pub mod variant;

pub use combinator::{Callbacks, MatchArms};
pub use factory::{error, error_empty, success, success_empty};
pub use value::Outcome;
pub use variant::{Failure, Success};

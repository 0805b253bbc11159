//! Domain layer - The outcome model
//!
//! This layer contains:
//! - Outcome: the success/failure union, its variants and constructors
//! - Combinators: callback-style consumption of an outcome
//! - Shared kernel: the uninhabited type and narrowing errors

pub mod outcome;
pub mod shared;

// Re-export commonly used types
pub use outcome::{Failure, Outcome, Success};
pub use shared::{NarrowError, Never};

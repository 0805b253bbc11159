//! Shared kernel - Types used by every part of the outcome model

pub mod error;
pub mod never;

pub use error::{NarrowError, NarrowResult};
pub use never::Never;

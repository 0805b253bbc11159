//! status-result - A tagged success/failure value with compile-time narrowing
//!
//! An [`Outcome`] is either a [`Success`] carrying a payload or a
//! [`Failure`] carrying an error payload. Matching on it narrows the value
//! so that only the live payload can be reached, and the callback
//! combinators (`is_ok`, `is_err`, `match_with`) run only the arm for the
//! variant that is actually held.
//!
//! ```
//! use status_result::{error, success, Outcome};
//!
//! fn foo(flag: bool) -> Outcome<&'static str> {
//!     if flag {
//!         return success!("hello!");
//!     }
//!     error!()
//! }
//!
//! assert_eq!(foo(true).data(), Some(&"hello!"));
//! assert_eq!(foo(false).err(), Some(&()));
//! ```

pub mod config;
pub mod domain;

// Re-export commonly used types
pub use domain::outcome::{
    error, error_empty, success, success_empty, Callbacks, Failure, MatchArms, Outcome, Success,
};
pub use domain::shared::{NarrowError, NarrowResult, Never};

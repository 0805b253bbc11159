//! Outcome construction
//!
//! Each variant has a one-payload and a no-payload constructor. The
//! [`success!`](crate::success!) and [`error!`](crate::error!) macros pick
//! between them by argument count and reject anything beyond one argument:
//!
//! ```compile_fail
//! use status_result::{success, Outcome};
//!
//! let res: Outcome<i32> = success!(1, 2);
//! ```
//!
//! ```compile_fail
//! use status_result::{error, Outcome};
//!
//! let res: Outcome<(), &str> = error!("bad", "worse");
//! ```

use super::value::Outcome;
use super::variant::{Failure, Success};

/// Success carrying `data`
pub fn success<T, E>(data: T) -> Outcome<T, E> {
    Outcome::Success(Success::new(data))
}

/// Success with no payload
pub fn success_empty<E>() -> Outcome<(), E> {
    Outcome::Success(Success::empty())
}

/// Failure carrying `err`
pub fn error<T, E>(err: E) -> Outcome<T, E> {
    Outcome::Failure(Failure::new(err))
}

/// Failure with no payload
pub fn error_empty<T>() -> Outcome<T, ()> {
    Outcome::Failure(Failure::empty())
}

/// Build a success outcome from zero or one payload
///
/// ```
/// use status_result::{success, Outcome};
///
/// let empty: Outcome<(), String> = success!();
/// assert_eq!(empty.data(), Some(&()));
///
/// let full: Outcome<&str, String> = success!("hello!");
/// assert_eq!(full.data(), Some(&"hello!"));
/// ```
#[macro_export]
macro_rules! success {
    () => {
        $crate::domain::outcome::factory::success_empty()
    };
    ($data:expr $(,)?) => {
        $crate::domain::outcome::factory::success($data)
    };
}

/// Build a failure outcome from zero or one payload
///
/// ```
/// use status_result::{error, Outcome};
///
/// let empty: Outcome<i32> = error!();
/// assert_eq!(empty.err(), Some(&()));
///
/// let full: Outcome<i32, &str> = error!("bad");
/// assert_eq!(full.err(), Some(&"bad"));
/// ```
#[macro_export]
macro_rules! error {
    () => {
        $crate::domain::outcome::factory::error_empty()
    };
    ($err:expr $(,)?) => {
        $crate::domain::outcome::factory::error($err)
    };
}

//! Error types for sole-rs.
//!
//! Every fallible holder operation funnels into a single `thiserror`-derived
//! enum.  Factories signal failure through the error channel rather than by
//! panicking, so a holder can leave its slot empty and let a later caller
//! retry creation.

use thiserror::Error;

/// The top-level error type used throughout sole-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A payload factory reported failure.  The holder's slot was left empty,
    /// so a subsequent call may attempt creation again.
    #[error("instance creation failed: {0}")]
    Creation(String),

    /// Precondition violated (raised by [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// General runtime error (raised by [`fail!`](crate::fail)).
    #[error("{0}")]
    Runtime(String),
}

/// Shorthand `Result` type used throughout sole-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// Intended for payload factories that validate their inputs before
/// constructing the instance.
///
/// # Example
/// ```
/// use sole_core::ensure;
///
/// fn capacity(n: usize) -> sole_core::Result<usize> {
///     ensure!(n > 0, "capacity must be non-zero, got {n}");
///     Ok(n)
/// }
/// assert!(capacity(8).is_ok());
/// assert!(capacity(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use sole_core::fail;
///
/// fn unavailable() -> sole_core::Result<()> {
///     fail!("backing resource is gone");
/// }
/// assert!(unavailable().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

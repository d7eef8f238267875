//! Error types for ethiopic-rs.
//!
//! The calendar conversion itself is total: every valid Gregorian date maps
//! to exactly one Ethiopic date.  Errors arise only at the host-calendar
//! boundary, when a `Date` is built from raw year/month/day components
//! (February 30 is rejected there, never inside the converter).

use thiserror::Error;

/// The top-level error type used throughout ethiopic-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Date component out of range (bad month, bad day-of-month, bad year).
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout ethiopic-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ethiopic_core::ensure;
/// fn positive(x: i32) -> ethiopic_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Date(...))` immediately.
///
/// # Example
/// ```
/// use ethiopic_core::fail;
/// fn always_err() -> ethiopic_core::errors::Result<()> {
///     fail!("month {} out of range", 14);
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Date(format!($($msg)*)))
    };
}

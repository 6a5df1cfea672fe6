//! Access violations
//!
//! Reading the wrong side of a container is a programmer error. The panicking
//! accessors ([`Optional::unwrap`], [`Failable::unwrap_ok`],
//! [`Failable::unwrap_err`]) fail immediately; the checked accessors
//! ([`Optional::value`], [`Failable::ok_value`], [`Failable::err_value`])
//! return an [`AccessError`] instead.
//!
//! When the offending `Failure` carries an error type, the violation keeps it
//! as its [`source`](std::error::Error::source), so the causal chain survives.
//!
//! # Examples
//!
//! ```
//! use std::error::Error;
//! use ferret::{AccessError, Failable};
//!
//! let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
//! let err = Failable::<i32, _>::failure(io).ok_value().unwrap_err();
//!
//! assert!(matches!(err, AccessError::NotSuccess(_)));
//! assert_eq!(err.source().unwrap().to_string(), "missing");
//! ```
//!
//! [`Optional::unwrap`]: crate::Optional::unwrap
//! [`Optional::value`]: crate::Optional::value
//! [`Failable::unwrap_ok`]: crate::Failable::unwrap_ok
//! [`Failable::unwrap_err`]: crate::Failable::unwrap_err
//! [`Failable::ok_value`]: crate::Failable::ok_value
//! [`Failable::err_value`]: crate::Failable::err_value

use std::convert::Infallible;

/// A read of a container variant that is not there.
///
/// The type parameter `C` is the cause carried by [`AccessError::NotSuccess`].
/// Accessors that have no cause to report use the default, [`Infallible`].
///
/// `AccessError<C>` implements [`std::error::Error`] whenever `C` does.
///
/// # Examples
///
/// ```
/// use ferret::{AccessError, Optional};
///
/// let err = Optional::<i32>::absent().value().unwrap_err();
/// assert_eq!(err, AccessError::Empty);
/// assert_eq!(err.to_string(), "attempt to get value on Absent");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError<C = Infallible> {
    /// The value of an `Absent` optional was requested.
    #[error("attempt to get value on Absent")]
    Empty,
    /// The success value of a `Failure` was requested.
    #[error("attempt to get ok value on Failure")]
    NotSuccess(#[source] C),
    /// The error value of a `Success` was requested.
    #[error("attempt to get err value on Success")]
    NotFailure,
}

impl<C> AccessError<C> {
    /// The failure payload that caused this violation, if any.
    pub fn cause(&self) -> Option<&C> {
        match self {
            AccessError::NotSuccess(cause) => Some(cause),
            AccessError::Empty | AccessError::NotFailure => None,
        }
    }

    /// Consume the violation and return the failure payload, if any.
    pub fn into_cause(self) -> Option<C> {
        match self {
            AccessError::NotSuccess(cause) => Some(cause),
            AccessError::Empty | AccessError::NotFailure => None,
        }
    }
}

// Panicking accessors log before they unwind so the violation shows up in
// traces even when a caller catches the panic.
#[cold]
#[track_caller]
pub(crate) fn violation(msg: &str) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!("{}", msg);
    panic!("{}", msg)
}

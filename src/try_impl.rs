//! `?` support for `Optional` and `Failable` (nightly, `try_trait` feature).
//!
//! `?` on an `Absent` returns `Absent` from the enclosing function, and `?` on
//! a `Failure(e)` returns `Failure(e.into())`. The standard `Option` and
//! `Result` can be mixed in:
//!
//! ```rust,ignore
//! #![feature(try_trait_v2)]
//! use ferret::Failable;
//!
//! fn parse_positive(s: &str) -> Failable<u32, String> {
//!     let n: i64 = s.parse().map_err(|_| format!("not a number: {}", s))?;
//!     if n > 0 {
//!         Failable::success(n as u32)
//!     } else {
//!         Failable::failure(format!("not positive: {}", n))
//!     }
//! }
//! ```

use std::convert::Infallible;
use std::ops::{ControlFlow, FromResidual, Try};

use crate::{Failable, Optional};

impl<T> Try for Optional<T> {
    type Output = T;
    type Residual = Optional<Infallible>;

    #[inline]
    fn from_output(output: T) -> Self {
        Optional::Present(output)
    }

    #[inline]
    fn branch(self) -> ControlFlow<Self::Residual, T> {
        match self {
            Optional::Present(value) => ControlFlow::Continue(value),
            Optional::Absent => ControlFlow::Break(Optional::Absent),
        }
    }
}

impl<T> FromResidual<Optional<Infallible>> for Optional<T> {
    #[inline]
    fn from_residual(residual: Optional<Infallible>) -> Self {
        match residual {
            Optional::Present(never) => match never {},
            Optional::Absent => Optional::Absent,
        }
    }
}

impl<T> FromResidual<Option<Infallible>> for Optional<T> {
    #[inline]
    fn from_residual(residual: Option<Infallible>) -> Self {
        match residual {
            Some(never) => match never {},
            None => Optional::Absent,
        }
    }
}

impl<T, E> Try for Failable<T, E> {
    type Output = T;
    type Residual = Failable<Infallible, E>;

    #[inline]
    fn from_output(output: T) -> Self {
        Failable::Success(output)
    }

    #[inline]
    fn branch(self) -> ControlFlow<Self::Residual, T> {
        match self {
            Failable::Success(value) => ControlFlow::Continue(value),
            Failable::Failure(error) => ControlFlow::Break(Failable::Failure(error)),
        }
    }
}

impl<T, E, F: From<E>> FromResidual<Failable<Infallible, E>> for Failable<T, F> {
    #[inline]
    fn from_residual(residual: Failable<Infallible, E>) -> Self {
        match residual {
            Failable::Success(never) => match never {},
            Failable::Failure(error) => Failable::Failure(From::from(error)),
        }
    }
}

impl<T, E, F: From<E>> FromResidual<Result<Infallible, E>> for Failable<T, F> {
    #[inline]
    fn from_residual(residual: Result<Infallible, E>) -> Self {
        match residual {
            Ok(never) => match never {},
            Err(error) => Failable::Failure(From::from(error)),
        }
    }
}

// Lets `?` on a Failable work inside functions returning Result.
impl<T, E, F: From<E>> FromResidual<Failable<Infallible, E>> for Result<T, F> {
    #[inline]
    fn from_residual(residual: Failable<Infallible, E>) -> Self {
        match residual {
            Failable::Success(never) => match never {},
            Failable::Failure(error) => Err(From::from(error)),
        }
    }
}

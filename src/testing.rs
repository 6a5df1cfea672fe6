//! Testing helpers for code built on `Optional` and `Failable`.
//!
//! The assertion macros print the unexpected payload when they fail, which
//! plain `assert!(x.is_ok())` does not. With the `proptest` feature enabled,
//! both types also implement [`proptest::arbitrary::Arbitrary`].
//!
//! # Examples
//!
//! ```rust
//! use ferret::{assert_absent, assert_failure, assert_present, assert_success};
//! use ferret::{Failable, Optional};
//!
//! assert_present!(Optional::present(1));
//! assert_absent!(Optional::<i32>::absent());
//!
//! assert_success!(Failable::<_, String>::success(42));
//! assert_failure!(Failable::<i32, _>::failure("error"));
//! ```

/// Assert that an optional is `Present`.
///
/// # Example
///
/// ```rust
/// use ferret::{assert_present, Optional};
///
/// assert_present!(Optional::present("here"));
/// ```
#[macro_export]
macro_rules! assert_present {
    ($optional:expr) => {
        match $optional {
            $crate::Optional::Present(_) => {}
            $crate::Optional::Absent => {
                panic!("Expected Present, got Absent");
            }
        }
    };
}

/// Assert that an optional is `Absent`.
///
/// # Example
///
/// ```rust
/// use ferret::{assert_absent, Optional};
///
/// assert_absent!(Optional::<u8>::absent());
/// ```
#[macro_export]
macro_rules! assert_absent {
    ($optional:expr) => {
        match $optional {
            $crate::Optional::Absent => {}
            $crate::Optional::Present(v) => {
                panic!("Expected Absent, got Present: {:?}", v);
            }
        }
    };
}

/// Assert that a failable is a `Success`.
///
/// # Example
///
/// ```rust
/// use ferret::{assert_success, Failable};
///
/// assert_success!(Failable::<_, Vec<String>>::success(42));
/// ```
#[macro_export]
macro_rules! assert_success {
    ($failable:expr) => {
        match $failable {
            $crate::Failable::Success(_) => {}
            $crate::Failable::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a failable is a `Failure`.
///
/// # Example
///
/// ```rust
/// use ferret::{assert_failure, Failable};
///
/// assert_failure!(Failable::<i32, _>::failure("error"));
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($failable:expr) => {
        match $failable {
            $crate::Failable::Failure(_) => {}
            $crate::Failable::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a failable is a `Failure` with a specific error.
///
/// # Example
///
/// ```rust
/// use ferret::{assert_failure_eq, Failable};
///
/// assert_failure_eq!(Failable::<i32, _>::failure("error"), "error");
/// ```
#[macro_export]
macro_rules! assert_failure_eq {
    ($failable:expr, $expected:expr) => {
        match $failable {
            $crate::Failable::Failure(error) => {
                assert_eq!(error, $expected);
            }
            $crate::Failable::Success(v) => {
                panic!(
                    "Expected Failure with error {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use proptest::strategy::LazyJust;

#[cfg(feature = "proptest")]
use crate::{Failable, Optional};

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Optional<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any_with::<T>(args).prop_map(Optional::present),
            LazyJust::new(Optional::absent),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for Failable<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(Failable::success),
            any_with::<E>(e_params).prop_map(Failable::failure),
        ]
        .boxed()
    }
}

//! Operations that cross between [`Optional`] and [`Failable`].
//!
//! The two types meet whenever a step that may fail runs on a value that may
//! be missing. The rule everywhere in this module is the same:
//!
//! - absence is a perfectly good outcome, so it becomes `Success(Absent)`;
//! - a failure is never swallowed, it comes out as the concrete `Failure(e)`.
//!
//! # Example
//!
//! ```rust
//! use ferret::{Failable, Optional};
//!
//! fn load(id: u32) -> Failable<String, String> {
//!     if id == 0 {
//!         Failable::failure("id 0 is reserved".to_string())
//!     } else {
//!         Failable::success(format!("user-{}", id))
//!     }
//! }
//!
//! assert_eq!(
//!     Optional::present(7).chain_to_failable(load),
//!     Failable::success(Optional::present("user-7".to_string()))
//! );
//! assert_eq!(Optional::absent().chain_to_failable(load), Failable::success(Optional::absent()));
//! assert_eq!(
//!     Optional::present(0).chain_to_failable(load),
//!     Failable::failure("id 0 is reserved".to_string())
//! );
//! ```

use crate::{Failable, Optional};

impl<T> Optional<T> {
    /// Run a failable step on the contained value.
    ///
    /// - `Present(v)` and `f(v) == Success(s)`: `Success(Present(s))`
    /// - `Present(v)` and `f(v) == Failure(e)`: `Failure(e)`
    /// - `Absent`: `Success(Absent)`, and `f` is never called
    #[inline]
    pub fn chain_to_failable<S, E, F>(self, f: F) -> Failable<Optional<S>, E>
    where
        F: FnOnce(T) -> Failable<S, E>,
    {
        match self {
            Optional::Present(value) => f(value).map(Optional::Present),
            Optional::Absent => Failable::Success(Optional::Absent),
        }
    }

    /// Run a failable check on the contained value and keep the value.
    ///
    /// A failure from `f` propagates as the concrete `Failure(e)`; it is
    /// never downgraded to `Absent`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::{Failable, Optional};
    ///
    /// let short = |s: &&str| {
    ///     if s.len() <= 3 { Failable::success(()) } else { Failable::failure("too long") }
    /// };
    ///
    /// assert_eq!(
    ///     Optional::present("abc").chain_to_failable_discard(short),
    ///     Failable::success(Optional::present("abc"))
    /// );
    /// assert_eq!(
    ///     Optional::present("abcd").chain_to_failable_discard(short),
    ///     Failable::failure("too long")
    /// );
    /// ```
    #[inline]
    pub fn chain_to_failable_discard<R, E, F>(self, f: F) -> Failable<Optional<T>, E>
    where
        F: FnOnce(&T) -> Failable<R, E>,
    {
        self.chain_to_failable(|value| f(&value).map(|_| value))
    }

    /// Turn absence into a failure with the given error.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Failable<T, E> {
        match self {
            Optional::Present(value) => Failable::Success(value),
            Optional::Absent => Failable::Failure(error),
        }
    }

    /// Turn absence into a failure with a computed error.
    #[inline]
    pub fn ok_or_else<E, F>(self, f: F) -> Failable<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Optional::Present(value) => Failable::Success(value),
            Optional::Absent => Failable::Failure(f()),
        }
    }
}

impl<T, E> Optional<Failable<T, E>> {
    /// `Optional<Failable<T, E>>` to `Failable<Optional<T>, E>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::{Failable, Optional};
    ///
    /// let x: Optional<Failable<i32, &str>> = Optional::present(Failable::success(5));
    /// assert_eq!(x.transpose(), Failable::success(Optional::present(5)));
    /// ```
    #[inline]
    pub fn transpose(self) -> Failable<Optional<T>, E> {
        self.chain_to_failable(|inner| inner)
    }
}

impl<T, E> Failable<T, E> {
    /// Keep the success value, forgetting the error.
    #[inline]
    pub fn ok(self) -> Optional<T> {
        match self {
            Failable::Success(value) => Optional::Present(value),
            Failable::Failure(_) => Optional::Absent,
        }
    }

    /// Keep the error, forgetting the success value.
    #[inline]
    pub fn err(self) -> Optional<E> {
        match self {
            Failable::Success(_) => Optional::Absent,
            Failable::Failure(error) => Optional::Present(error),
        }
    }

    /// Run a step that may produce nothing on the success value.
    ///
    /// - `Success(v)`: `f(v)` with its value wrapped in `Success`
    /// - `Failure(e)`: `Present(Failure(e))`, and `f` is never called
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::{Failable, Optional};
    ///
    /// let first_char = |s: String| Optional::from_option(s.chars().next());
    ///
    /// let ok: Failable<String, &str> = Failable::success("hey".to_string());
    /// assert_eq!(ok.chain_to_optional(first_char), Optional::present(Failable::success('h')));
    ///
    /// let err: Failable<String, &str> = Failable::failure("io");
    /// assert_eq!(err.chain_to_optional(first_char), Optional::present(Failable::failure("io")));
    /// ```
    #[inline]
    pub fn chain_to_optional<S, F>(self, f: F) -> Optional<Failable<S, E>>
    where
        F: FnOnce(T) -> Optional<S>,
    {
        match self {
            Failable::Success(value) => f(value).map(Failable::Success),
            Failable::Failure(error) => Optional::Present(Failable::Failure(error)),
        }
    }
}

impl<S, E> Failable<Optional<S>, E> {
    /// Run a failable step on the value inside a successful optional.
    ///
    /// - `Success(Present(s))` and `f(s) == Success(u)`: `Success(Present(u))`
    /// - `Success(Present(s))` and `f(s) == Failure(e)`: `Failure(e)`
    /// - `Success(Absent)`: `Success(Absent)`, and `f` is never called
    /// - `Failure(e)`: `Failure(e)`, and `f` is never called
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::{Failable, Optional};
    ///
    /// let double = |x: i32| Failable::<_, &str>::success(x * 2);
    ///
    /// let found: Failable<Optional<i32>, &str> = Failable::success(Optional::present(4));
    /// assert_eq!(found.chain_optional(double), Failable::success(Optional::present(8)));
    ///
    /// let missing: Failable<Optional<i32>, &str> = Failable::success(Optional::absent());
    /// assert_eq!(missing.chain_optional(double), Failable::success(Optional::absent()));
    /// ```
    #[inline]
    pub fn chain_optional<U, F>(self, f: F) -> Failable<Optional<U>, E>
    where
        F: FnOnce(S) -> Failable<U, E>,
    {
        self.chain(|inner| inner.chain_to_failable(f))
    }

    /// `Failable<Optional<S>, E>` to `Optional<Failable<S, E>>`.
    #[inline]
    pub fn transpose(self) -> Optional<Failable<S, E>> {
        self.chain_to_optional(|inner| inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn stringify(x: i32) -> Failable<String, &'static str> {
        Failable::success(x.to_string())
    }

    fn reject(_: i32) -> Failable<String, &'static str> {
        Failable::failure("rejected")
    }

    #[test]
    fn test_chain_to_failable_present_success() {
        assert_eq!(
            Optional::present(2).chain_to_failable(stringify),
            Failable::success(Optional::present("2".to_string()))
        );
    }

    #[test]
    fn test_chain_to_failable_present_failure() {
        assert_eq!(
            Optional::present(2).chain_to_failable(reject),
            Failable::failure("rejected")
        );
    }

    #[test]
    fn test_chain_to_failable_absent_never_calls() {
        let calls = Cell::new(0);
        let result = Optional::<i32>::absent().chain_to_failable(|x| {
            calls.set(calls.get() + 1);
            stringify(x)
        });

        assert_eq!(result, Failable::success(Optional::absent()));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_chain_to_failable_discard() {
        let check = |x: &i32| {
            if *x > 0 {
                Failable::success("ignored")
            } else {
                Failable::failure("not positive")
            }
        };

        assert_eq!(
            Optional::present(3).chain_to_failable_discard(check),
            Failable::success(Optional::present(3))
        );
        assert_eq!(
            Optional::present(-3).chain_to_failable_discard(check),
            Failable::failure("not positive")
        );
        assert_eq!(
            Optional::<i32>::absent().chain_to_failable_discard(check),
            Failable::success(Optional::absent())
        );
    }

    #[test]
    fn test_chain_optional() {
        let found: Failable<Optional<i32>, &str> = Failable::success(Optional::present(5));
        assert_eq!(
            found.chain_optional(stringify),
            Failable::success(Optional::present("5".to_string()))
        );

        let found: Failable<Optional<i32>, &str> = Failable::success(Optional::present(5));
        assert_eq!(found.chain_optional(reject), Failable::failure("rejected"));
    }

    #[test]
    fn test_chain_optional_short_circuits() {
        let calls = Cell::new(0);
        let counted = |x: i32| {
            calls.set(calls.get() + 1);
            stringify(x)
        };

        let missing: Failable<Optional<i32>, &str> = Failable::success(Optional::absent());
        assert_eq!(missing.chain_optional(counted), Failable::success(Optional::absent()));

        let failed: Failable<Optional<i32>, &str> = Failable::failure("upstream");
        assert_eq!(failed.chain_optional(counted), Failable::failure("upstream"));

        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_chain_to_optional() {
        let even = |x: i32| if x % 2 == 0 { Optional::present(x) } else { Optional::absent() };

        let ok: Failable<i32, &str> = Failable::success(4);
        assert_eq!(ok.chain_to_optional(even), Optional::present(Failable::success(4)));

        let odd: Failable<i32, &str> = Failable::success(3);
        assert_eq!(odd.chain_to_optional(even), Optional::absent());

        let err: Failable<i32, &str> = Failable::failure("e");
        assert_eq!(err.chain_to_optional(even), Optional::present(Failable::failure("e")));
    }

    #[test]
    fn test_transpose_roundtrip() {
        let cases: Vec<Optional<Failable<i32, &str>>> = vec![
            Optional::present(Failable::success(1)),
            Optional::present(Failable::failure("e")),
            Optional::absent(),
        ];

        for case in cases {
            assert_eq!(case.transpose().transpose(), case);
        }
    }

    #[test]
    fn test_transpose_values() {
        let absent: Optional<Failable<i32, &str>> = Optional::absent();
        assert_eq!(absent.transpose(), Failable::success(Optional::absent()));

        let failed: Optional<Failable<i32, &str>> = Optional::present(Failable::failure("e"));
        assert_eq!(failed.transpose(), Failable::failure("e"));
    }

    #[test]
    fn test_ok_and_err() {
        let ok: Failable<i32, &str> = Failable::success(1);
        let err: Failable<i32, &str> = Failable::failure("e");

        assert_eq!(ok.ok(), Optional::present(1));
        assert_eq!(ok.err(), Optional::absent());
        assert_eq!(err.ok(), Optional::absent());
        assert_eq!(err.err(), Optional::present("e"));
    }

    #[test]
    fn test_ok_or() {
        assert_eq!(Optional::present(1).ok_or("missing"), Failable::success(1));
        assert_eq!(Optional::<i32>::absent().ok_or("missing"), Failable::failure("missing"));
        assert_eq!(
            Optional::<i32>::absent().ok_or_else(|| "computed"),
            Failable::failure("computed")
        );
    }
}

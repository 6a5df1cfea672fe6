//! Success with a value, or failure with an error.
//!
//! `Failable<T, E>` mirrors [`Optional`](crate::Optional) with `Success` in
//! place of `Present` and `Failure` in place of `Absent`. The difference is
//! that a failure carries a concrete error, and that error travels through
//! every combinator untouched: there is no combinator that rewrites it.
//!
//! # Short-circuiting
//!
//! A `Failure` never calls the supplied function and comes out of every
//! combinator exactly as it went in.
//!
//! ```rust
//! use ferret::Failable;
//!
//! fn parse(s: &str) -> Failable<i32, String> {
//!     Failable::from_result(s.parse::<i32>().map_err(|e| e.to_string()))
//! }
//!
//! fn non_zero(n: i32) -> Failable<i32, String> {
//!     if n == 0 {
//!         Failable::failure("zero".to_string())
//!     } else {
//!         Failable::success(n)
//!     }
//! }
//!
//! assert_eq!(parse("4").chain(non_zero).map(|n| 100 / n), Failable::success(25));
//! assert_eq!(
//!     parse("0").chain(non_zero).map(|n| 100 / n),
//!     Failable::failure("zero".to_string())
//! );
//! ```

use std::convert::Infallible;
use std::fmt;

use crate::error::{violation, AccessError};
use crate::index::TupleIndex;

/// A value that is either `Success(T)` or `Failure(E)`.
///
/// The variant participates in equality and hashing, so `Success(1)` and
/// `Failure(1)` are different values.
///
/// # Example
///
/// ```rust
/// use std::collections::HashSet;
/// use ferret::Failable;
///
/// let set: HashSet<Failable<i32, i32>> = [Failable::success(1), Failable::failure(1)].into();
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Failable<T, E> {
    /// The computation produced a value
    Success(T),
    /// The computation failed with an error
    Failure(E),
}

impl<T, E> Failable<T, E> {
    // ========== Constructors ==========

    /// Create a successful value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::Failable;
    ///
    /// assert!(Failable::<i32, String>::success(42).is_ok());
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Failable::Success(value)
    }

    /// Create a failed value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::Failable;
    ///
    /// assert!(Failable::<i32, &str>::failure("boom").is_err());
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Failable::Failure(error)
    }

    /// Build from a standard `Result`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Failable::Success(value),
            Err(error) => Failable::Failure(error),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` for `Success`.
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Failable::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub fn is_err(&self) -> bool {
        matches!(self, Failable::Failure(_))
    }

    // ========== Extractors ==========

    /// Checked read of the success value.
    ///
    /// On `Failure(e)` the returned [`AccessError::NotSuccess`] carries `e`,
    /// and reports it as its `source()` when `E` is an error type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::error::Error;
    /// use ferret::{AccessError, Failable};
    ///
    /// assert_eq!(Failable::<_, String>::success(1).ok_value(), Ok(1));
    ///
    /// let err = Failable::<i32, _>::failure(std::fmt::Error).ok_value().unwrap_err();
    /// assert_eq!(err, AccessError::NotSuccess(std::fmt::Error));
    /// assert!(err.source().is_some());
    /// ```
    pub fn ok_value(self) -> Result<T, AccessError<E>> {
        match self {
            Failable::Success(value) => Ok(value),
            Failable::Failure(error) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("ok value requested on Failure");
                Err(AccessError::NotSuccess(error))
            }
        }
    }

    /// Checked read of the error value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::{AccessError, Failable};
    ///
    /// assert_eq!(Failable::<i32, _>::failure("bad").err_value(), Ok("bad"));
    /// assert_eq!(Failable::<_, &str>::success(1).err_value(), Err(AccessError::NotFailure));
    /// ```
    pub fn err_value(self) -> Result<E, AccessError> {
        match self {
            Failable::Success(_) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("err value requested on Success");
                Err(AccessError::NotFailure)
            }
            Failable::Failure(error) => Ok(error),
        }
    }

    /// Return the success value.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Failure`, with the error's debug output in
    /// the message.
    #[inline]
    #[track_caller]
    pub fn unwrap_ok(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Failable::Success(value) => value,
            Failable::Failure(error) => violation(&format!(
                "called `Failable::unwrap_ok()` on a `Failure` value: {:?}",
                error
            )),
        }
    }

    /// Return the error value.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Success`.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Failable::Success(value) => violation(&format!(
                "called `Failable::unwrap_err()` on a `Success` value: {:?}",
                value
            )),
            Failable::Failure(error) => error,
        }
    }

    /// Return the success value or `default`.
    #[inline]
    pub fn get_or(self, default: T) -> T {
        match self {
            Failable::Success(value) => value,
            Failable::Failure(_) => default,
        }
    }

    /// Return the success value or compute one from the error.
    #[inline]
    pub fn get_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Failable::Success(value) => value,
            Failable::Failure(error) => f(error),
        }
    }

    /// Convert to `Failable<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Failable<&T, &E> {
        match self {
            Failable::Success(value) => Failable::Success(value),
            Failable::Failure(error) => Failable::Failure(error),
        }
    }

    /// Convert into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Failable::Success(value) => Ok(value),
            Failable::Failure(error) => Err(error),
        }
    }

    // ========== Functor ==========

    /// Transform the success value, passing failures through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::Failable;
    ///
    /// assert_eq!(Failable::<_, &str>::success(200).map(|x| x * 2), Failable::success(400));
    /// assert_eq!(Failable::<i32, _>::failure("200").map(|x| x * 2), Failable::failure("200"));
    /// ```
    #[inline]
    pub fn map<S, F>(self, f: F) -> Failable<S, E>
    where
        F: FnOnce(T) -> S,
    {
        match self {
            Failable::Success(value) => Failable::Success(f(value)),
            Failable::Failure(error) => Failable::Failure(error),
        }
    }

    /// Run `f` on the success value for its side effect and keep the value.
    #[inline]
    pub fn map_discard<R, F>(self, f: F) -> Failable<T, E>
    where
        F: FnOnce(&T) -> R,
    {
        self.map(|value| {
            let _ = f(&value);
            value
        })
    }

    /// [`map`](Self::map) with extra arguments passed after the value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::Failable;
    ///
    /// let ok = Failable::<_, String>::success(200);
    /// assert_eq!(ok.map_with_args(|x, y| x * y, 32), Failable::success(6400));
    /// ```
    #[inline]
    pub fn map_with_args<S, A, F>(self, f: F, args: A) -> Failable<S, E>
    where
        F: FnOnce(T, A) -> S,
    {
        self.map(move |value| f(value, args))
    }

    /// [`map_discard`](Self::map_discard) with extra arguments.
    #[inline]
    pub fn map_with_args_discard<R, A, F>(self, f: F, args: A) -> Failable<T, E>
    where
        F: FnOnce(&T, A) -> R,
    {
        self.map_discard(move |value| f(value, args))
    }

    /// Transform element `I` of the contained tuple.
    ///
    /// # Panics
    ///
    /// Panics if `I` is out of range for a contained array or vector.
    #[inline]
    #[track_caller]
    pub fn map_indexed<const I: usize, S, F>(self, f: F) -> Failable<S, E>
    where
        T: TupleIndex<I>,
        F: FnOnce(<T as TupleIndex<I>>::Element) -> S,
    {
        self.map(|value| f(value.into_element()))
    }

    /// Run `f` on element `I` of the contained tuple and keep the whole tuple.
    #[inline]
    #[track_caller]
    pub fn map_indexed_discard<const I: usize, R, F>(self, f: F) -> Failable<T, E>
    where
        T: TupleIndex<I>,
        F: FnOnce(&<T as TupleIndex<I>>::Element) -> R,
    {
        self.map_discard(|value| f(value.element()))
    }

    // ========== Monad ==========

    /// Chain a computation that may fail.
    ///
    /// For `Success(v)` the result is `f(v)`. A `Failure` is returned as is
    /// and `f` is never called. The error type stays the same through the
    /// whole chain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::Failable;
    ///
    /// let ok = Failable::<_, &str>::success(1);
    /// assert_eq!(ok.chain(|x| Failable::success(x * 2)), Failable::success(2));
    /// assert_eq!(ok.chain(|_| Failable::<i32, _>::failure("nope")), Failable::failure("nope"));
    /// ```
    #[inline]
    pub fn chain<S, F>(self, f: F) -> Failable<S, E>
    where
        F: FnOnce(T) -> Failable<S, E>,
    {
        match self {
            Failable::Success(value) => f(value),
            Failable::Failure(error) => Failable::Failure(error),
        }
    }

    /// Use `f` as a check while keeping the original success value.
    ///
    /// If `f` succeeds, the original `Success(v)` comes back. If `f` fails,
    /// its failure replaces the success.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::Failable;
    ///
    /// let positive = |x: &i32| {
    ///     if *x > 0 { Failable::success(()) } else { Failable::failure("not positive") }
    /// };
    ///
    /// assert_eq!(Failable::success(5).chain_discard(positive), Failable::success(5));
    /// assert_eq!(Failable::success(-5).chain_discard(positive), Failable::failure("not positive"));
    /// ```
    #[inline]
    pub fn chain_discard<R, F>(self, f: F) -> Failable<T, E>
    where
        F: FnOnce(&T) -> Failable<R, E>,
    {
        self.chain(|value| f(&value).map(|_| value))
    }

    /// [`chain`](Self::chain) with extra arguments passed after the value.
    #[inline]
    pub fn chain_with_args<S, A, F>(self, f: F, args: A) -> Failable<S, E>
    where
        F: FnOnce(T, A) -> Failable<S, E>,
    {
        self.chain(move |value| f(value, args))
    }

    /// [`chain_discard`](Self::chain_discard) with extra arguments.
    #[inline]
    pub fn chain_with_args_discard<R, A, F>(self, f: F, args: A) -> Failable<T, E>
    where
        F: FnOnce(&T, A) -> Failable<R, E>,
    {
        self.chain_discard(move |value| f(value, args))
    }

    /// Chain on element `I` of the contained tuple.
    #[inline]
    #[track_caller]
    pub fn chain_indexed<const I: usize, S, F>(self, f: F) -> Failable<S, E>
    where
        T: TupleIndex<I>,
        F: FnOnce(<T as TupleIndex<I>>::Element) -> Failable<S, E>,
    {
        self.chain(|value| f(value.into_element()))
    }

    /// Check element `I` of the contained tuple, keeping the whole tuple.
    #[inline]
    #[track_caller]
    pub fn chain_indexed_discard<const I: usize, R, F>(self, f: F) -> Failable<T, E>
    where
        T: TupleIndex<I>,
        F: FnOnce(&<T as TupleIndex<I>>::Element) -> Failable<R, E>,
    {
        self.chain_discard(|value| f(value.element()))
    }

    // ========== Applicative ==========

    /// Apply a wrapped function to the wrapped value.
    ///
    /// A failure of `self` wins over a failure of `f`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::Failable;
    ///
    /// let inc = Failable::<_, &str>::success(|x: i32| x + 1);
    /// assert_eq!(Failable::success(1).apply(inc), Failable::success(2));
    ///
    /// let broken = Failable::<fn(i32) -> i32, _>::failure("no function");
    /// assert_eq!(Failable::success(1).apply(broken), Failable::failure("no function"));
    /// ```
    #[inline]
    pub fn apply<S, F>(self, f: Failable<F, E>) -> Failable<S, E>
    where
        F: FnOnce(T) -> S,
    {
        match (self, f) {
            (Failable::Success(value), Failable::Success(f)) => Failable::Success(f(value)),
            (Failable::Failure(error), _) => Failable::Failure(error),
            (_, Failable::Failure(error)) => Failable::Failure(error),
        }
    }

    // ========== Iterator Support ==========

    /// Iterate over the success value, if any.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_ref().into_result().ok().into_iter()
    }
}

impl<T, E> Failable<Failable<T, E>, E> {
    /// Remove one level of nesting.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::Failable;
    ///
    /// let nested: Failable<Failable<i32, &str>, &str> = Failable::success(Failable::failure("inner"));
    /// assert_eq!(nested.flatten(), Failable::failure("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Failable<T, E> {
        self.chain(|inner| inner)
    }
}

impl<T> Failable<T, Infallible> {
    /// Extract the value of a `Failable` that cannot fail.
    #[inline]
    pub fn into_ok(self) -> T {
        match self {
            Failable::Success(value) => value,
            Failable::Failure(never) => match never {},
        }
    }
}

// ========== Trait Implementations ==========

impl<T, E> From<Result<T, E>> for Failable<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Failable::from_result(result)
    }
}

impl<T, E> From<Failable<T, E>> for Result<T, E> {
    fn from(failable: Failable<T, E>) -> Self {
        failable.into_result()
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Failable<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failable::Success(value) => write!(f, "Success({})", value),
            Failable::Failure(error) => write!(f, "Failure({})", error),
        }
    }
}

impl<T, E> IntoIterator for Failable<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_result().ok().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Failable<T, E> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_result().ok().into_iter()
    }
}

impl<T, E> FromIterator<Failable<T, E>> for Failable<Vec<T>, E> {
    /// Collect every success value, stopping at the first failure.
    fn from_iter<I: IntoIterator<Item = Failable<T, E>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Failable::into_result)
            .collect::<Result<Vec<T>, E>>()
            .into()
    }
}

// ========== Collection Utilities ==========

/// Split an iterator of failables into success values and errors.
///
/// # Example
///
/// ```rust
/// use ferret::failable::{partition, Failable};
///
/// let items = vec![
///     Failable::success(1),
///     Failable::failure("a"),
///     Failable::success(2),
/// ];
///
/// let (values, errors) = partition(items);
/// assert_eq!(values, vec![1, 2]);
/// assert_eq!(errors, vec!["a"]);
/// ```
pub fn partition<T, E, I>(iter: I) -> (Vec<T>, Vec<E>)
where
    I: IntoIterator<Item = Failable<T, E>>,
{
    let mut values = Vec::new();
    let mut errors = Vec::new();

    for item in iter {
        match item {
            Failable::Success(value) => values.push(value),
            Failable::Failure(error) => errors.push(error),
        }
    }

    (values, errors)
}

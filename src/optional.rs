//! A value that may or may not be there.
//!
//! `Optional<T>` is either `Present(T)` or `Absent`. Every combinator has a
//! `Present` branch that does the work and an `Absent` branch that does
//! nothing: absence propagates and the supplied function is never called.
//!
//! # The combinator families
//!
//! | combinator       | function receives | function returns | result            |
//! |------------------|-------------------|------------------|-------------------|
//! | `map`            | `T`               | `S`              | `Optional<S>`     |
//! | `map_discard`    | `&T`              | anything         | original `T`      |
//! | `chain`          | `T`               | `Optional<S>`    | `Optional<S>`     |
//! | `chain_discard`  | `&T`              | `Optional<_>`    | original `T`      |
//!
//! Each family also comes in a `_with_args` form, which passes extra
//! arguments after the value, and an `_indexed` form, which passes one
//! element of a contained tuple (see [`TupleIndex`]).
//!
//! # Examples
//!
//! ```rust
//! use ferret::Optional;
//!
//! fn parse(s: &str) -> Optional<i32> {
//!     Optional::from_option(s.parse().ok())
//! }
//!
//! let doubled = Optional::present("21")
//!     .chain(parse)
//!     .map(|n| n * 2);
//! assert_eq!(doubled, Optional::present(42));
//!
//! let nothing = Optional::present("twenty-one")
//!     .chain(parse)
//!     .map(|n| n * 2);
//! assert_eq!(nothing, Optional::absent());
//! ```

use std::fmt;

use crate::error::{violation, AccessError};
use crate::index::TupleIndex;

/// Presence or absence of a value.
///
/// The variant is fixed when the value is built; combinators never mutate
/// it, they build a new `Optional` (or hand back the original one for the
/// `_discard` family).
///
/// Equality and hashing take the variant into account, so `Present(x)` is
/// never equal to `Absent`.
///
/// # Example
///
/// ```rust
/// use ferret::Optional;
///
/// let some = Optional::present(1);
/// let none: Optional<i32> = Optional::absent();
///
/// assert_ne!(some, none);
/// assert_eq!(some.get_or(100), 1);
/// assert_eq!(none.get_or(100), 100);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// A value is present
    Present(T),
    /// No value
    Absent,
}

impl<T> Optional<T> {
    // ========== Constructors ==========

    /// Wrap a value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::Optional;
    ///
    /// assert!(Optional::present(42).is_present());
    /// ```
    #[inline]
    pub fn present(value: T) -> Self {
        Optional::Present(value)
    }

    /// The absent value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::Optional;
    ///
    /// assert!(Optional::<i32>::absent().is_absent());
    /// ```
    #[inline]
    pub fn absent() -> Self {
        Optional::Absent
    }

    /// Build from a standard `Option`: `Some` becomes `Present`, `None` becomes `Absent`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::Optional;
    ///
    /// assert_eq!(Optional::from_option(Some(1)), Optional::present(1));
    /// assert_eq!(Optional::<i32>::from_option(None), Optional::absent());
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        match option {
            Some(value) => Optional::Present(value),
            None => Optional::Absent,
        }
    }

    // ========== Predicates ==========

    /// Returns `true` for `Present`.
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// Returns `true` for `Absent`.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Optional::Absent)
    }

    // ========== Extractors ==========

    /// Return the contained value.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Absent`. Use [`value`](Self::value) for a
    /// checked read.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::Optional;
    ///
    /// assert_eq!(Optional::present("hello").unwrap(), "hello");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => violation("called `Optional::unwrap()` on an `Absent` value"),
        }
    }

    /// Return the contained value with a custom panic message.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the value is `Absent`.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => violation(msg),
        }
    }

    /// Checked form of [`unwrap`](Self::unwrap).
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::{AccessError, Optional};
    ///
    /// assert_eq!(Optional::present(1).value(), Ok(1));
    /// assert_eq!(Optional::<i32>::absent().value(), Err(AccessError::Empty));
    /// ```
    pub fn value(self) -> Result<T, AccessError> {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Absent => {
                #[cfg(feature = "tracing")]
                tracing::debug!("value requested on Absent");
                Err(AccessError::Empty)
            }
        }
    }

    /// Return the contained value or `default`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::Optional;
    ///
    /// assert_eq!(Optional::present(1).get_or(100), 1);
    /// assert_eq!(Optional::absent().get_or(100), 100);
    /// ```
    #[inline]
    pub fn get_or(self, default: T) -> T {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => default,
        }
    }

    /// Return the contained value or compute one.
    #[inline]
    pub fn get_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => f(),
        }
    }

    /// Convert to `Optional<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Convert into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }

    // ========== Functor ==========

    /// Transform the contained value.
    ///
    /// `f` is only called for `Present`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::Optional;
    ///
    /// assert_eq!(Optional::present(21).map(|x| x * 2), Optional::present(42));
    /// assert_eq!(Optional::<i32>::absent().map(|x| x * 2), Optional::absent());
    /// ```
    #[inline]
    pub fn map<S, F>(self, f: F) -> Optional<S>
    where
        F: FnOnce(T) -> S,
    {
        match self {
            Optional::Present(value) => Optional::Present(f(value)),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Run `f` on the contained value for its side effect and keep the value.
    ///
    /// Whatever `f` returns is dropped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::Optional;
    ///
    /// let mut seen = Vec::new();
    /// let kept = Optional::present(7).map_discard(|x| seen.push(*x));
    ///
    /// assert_eq!(kept, Optional::present(7));
    /// assert_eq!(seen, vec![7]);
    /// ```
    #[inline]
    pub fn map_discard<R, F>(self, f: F) -> Optional<T>
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
    /// Several arguments are passed as a tuple.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::Optional;
    ///
    /// fn scale(x: i32, (factor, offset): (i32, i32)) -> i32 {
    ///     x * factor + offset
    /// }
    ///
    /// assert_eq!(Optional::present(2).map_with_args(scale, (10, 1)), Optional::present(21));
    /// ```
    #[inline]
    pub fn map_with_args<S, A, F>(self, f: F, args: A) -> Optional<S>
    where
        F: FnOnce(T, A) -> S,
    {
        self.map(move |value| f(value, args))
    }

    /// [`map_discard`](Self::map_discard) with extra arguments.
    #[inline]
    pub fn map_with_args_discard<R, A, F>(self, f: F, args: A) -> Optional<T>
    where
        F: FnOnce(&T, A) -> R,
    {
        self.map_discard(move |value| f(value, args))
    }

    /// Transform element `I` of the contained tuple.
    ///
    /// The rest of the tuple is dropped. For arrays and vectors the index is
    /// checked at run time.
    ///
    /// # Panics
    ///
    /// Panics if `I` is out of range for a contained array or vector.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::Optional;
    ///
    /// let row = Optional::present(("id", 42));
    /// assert_eq!(row.map_indexed::<1, _, _>(|n: i32| n + 1), Optional::present(43));
    /// ```
    #[inline]
    #[track_caller]
    pub fn map_indexed<const I: usize, S, F>(self, f: F) -> Optional<S>
    where
        T: TupleIndex<I>,
        F: FnOnce(<T as TupleIndex<I>>::Element) -> S,
    {
        self.map(|value| f(value.into_element()))
    }

    /// Run `f` on element `I` of the contained tuple and keep the whole tuple.
    #[inline]
    #[track_caller]
    pub fn map_indexed_discard<const I: usize, R, F>(self, f: F) -> Optional<T>
    where
        T: TupleIndex<I>,
        F: FnOnce(&<T as TupleIndex<I>>::Element) -> R,
    {
        self.map_discard(|value| f(value.element()))
    }

    // ========== Monad ==========

    /// Chain a computation that may itself be absent.
    ///
    /// For `Present(v)` the result is `f(v)`, so `f` decides whether the
    /// result is present. For `Absent`, `f` is never called.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::Optional;
    ///
    /// let halve = |x: i32| if x % 2 == 0 { Optional::present(x / 2) } else { Optional::absent() };
    ///
    /// assert_eq!(Optional::present(8).chain(halve).chain(halve), Optional::present(2));
    /// assert_eq!(Optional::present(6).chain(halve).chain(halve), Optional::absent());
    /// ```
    #[inline]
    pub fn chain<S, F>(self, f: F) -> Optional<S>
    where
        F: FnOnce(T) -> Optional<S>,
    {
        match self {
            Optional::Present(value) => f(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Use `f` as a presence check while keeping the original value.
    ///
    /// If `f` returns `Present`, the original `Present(v)` comes back
    /// unchanged. If `f` returns `Absent`, so does this. The carried value is
    /// never replaced.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::Optional;
    ///
    /// let non_empty = |s: &String| if s.is_empty() { Optional::absent() } else { Optional::present(()) };
    ///
    /// assert_eq!(
    ///     Optional::present("ok".to_string()).chain_discard(non_empty),
    ///     Optional::present("ok".to_string())
    /// );
    /// assert_eq!(Optional::present(String::new()).chain_discard(non_empty), Optional::absent());
    /// ```
    #[inline]
    pub fn chain_discard<R, F>(self, f: F) -> Optional<T>
    where
        F: FnOnce(&T) -> Optional<R>,
    {
        self.chain(|value| f(&value).map(|_| value))
    }

    /// [`chain`](Self::chain) with extra arguments passed after the value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::Optional;
    ///
    /// fn lookup(key: &str, table: &[(&str, i32)]) -> Optional<i32> {
    ///     table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v).into()
    /// }
    ///
    /// let table = [("a", 1), ("b", 2)];
    /// assert_eq!(Optional::present("b").chain_with_args(lookup, &table[..]), Optional::present(2));
    /// assert_eq!(Optional::present("z").chain_with_args(lookup, &table[..]), Optional::absent());
    /// ```
    #[inline]
    pub fn chain_with_args<S, A, F>(self, f: F, args: A) -> Optional<S>
    where
        F: FnOnce(T, A) -> Optional<S>,
    {
        self.chain(move |value| f(value, args))
    }

    /// [`chain_discard`](Self::chain_discard) with extra arguments.
    #[inline]
    pub fn chain_with_args_discard<R, A, F>(self, f: F, args: A) -> Optional<T>
    where
        F: FnOnce(&T, A) -> Optional<R>,
    {
        self.chain_discard(move |value| f(value, args))
    }

    /// Chain on element `I` of the contained tuple.
    ///
    /// # Panics
    ///
    /// Panics if `I` is out of range for a contained array or vector.
    #[inline]
    #[track_caller]
    pub fn chain_indexed<const I: usize, S, F>(self, f: F) -> Optional<S>
    where
        T: TupleIndex<I>,
        F: FnOnce(<T as TupleIndex<I>>::Element) -> Optional<S>,
    {
        self.chain(|value| f(value.into_element()))
    }

    /// Presence check on element `I`, keeping the whole tuple.
    #[inline]
    #[track_caller]
    pub fn chain_indexed_discard<const I: usize, R, F>(self, f: F) -> Optional<T>
    where
        T: TupleIndex<I>,
        F: FnOnce(&<T as TupleIndex<I>>::Element) -> Optional<R>,
    {
        self.chain_discard(|value| f(value.element()))
    }

    // ========== Applicative ==========

    /// Apply a wrapped function to the wrapped value.
    ///
    /// Present only when both the value and the function are present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::Optional;
    ///
    /// let inc = Optional::present(|x: i32| x + 1);
    /// assert_eq!(Optional::present(1).apply(inc), Optional::present(2));
    /// assert_eq!(Optional::<i32>::absent().apply(inc), Optional::absent());
    /// ```
    #[inline]
    pub fn apply<S, F>(self, f: Optional<F>) -> Optional<S>
    where
        F: FnOnce(T) -> S,
    {
        match (self, f) {
            (Optional::Present(value), Optional::Present(f)) => Optional::Present(f(value)),
            _ => Optional::Absent,
        }
    }

    // ========== Alternatives ==========

    /// Keep the value only if `predicate` holds for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Optional<T>
    where
        P: FnOnce(&T) -> bool,
    {
        self.chain(|value| {
            if predicate(&value) {
                Optional::Present(value)
            } else {
                Optional::Absent
            }
        })
    }

    /// Return `self` if present, `other` otherwise.
    #[inline]
    pub fn or(self, other: Optional<T>) -> Optional<T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => other,
        }
    }

    /// Return `self` if present, otherwise compute a fallback.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Optional<T>
    where
        F: FnOnce() -> Optional<T>,
    {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => f(),
        }
    }

    // ========== Iterator Support ==========

    /// Iterate over the contained value, if any.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_ref().into_option().into_iter()
    }
}

impl<T> Optional<Optional<T>> {
    /// Remove one level of nesting.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ferret::Optional;
    ///
    /// assert_eq!(Optional::present(Optional::present(1)).flatten(), Optional::present(1));
    /// assert_eq!(Optional::present(Optional::<i32>::absent()).flatten(), Optional::absent());
    /// ```
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        self.chain(|inner| inner)
    }
}

// ========== Trait Implementations ==========

impl<T> Default for Optional<T> {
    /// Returns `Absent`.
    fn default() -> Self {
        Optional::Absent
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(option: Option<T>) -> Self {
        Optional::from_option(option)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Present(value) => write!(f, "Present({})", value),
            Optional::Absent => f.write_str("Absent"),
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_option().into_iter()
    }
}

impl<T> FromIterator<Optional<T>> for Optional<Vec<T>> {
    /// Collect every value, or `Absent` as soon as one is missing.
    fn from_iter<I: IntoIterator<Item = Optional<T>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Optional::into_option)
            .collect::<Option<Vec<T>>>()
            .into()
    }
}

// ========== Collection Utilities ==========

/// Yield the value of every `Present` item, skipping `Absent` ones.
///
/// # Example
///
/// ```rust
/// use ferret::optional::{present_values, Optional};
///
/// let items = vec![Optional::present(1), Optional::absent(), Optional::present(3)];
/// assert_eq!(present_values(items).collect::<Vec<_>>(), vec![1, 3]);
/// ```
pub fn present_values<T, I>(iter: I) -> impl Iterator<Item = T>
where
    I: IntoIterator<Item = Optional<T>>,
{
    iter.into_iter().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashSet;

    #[test]
    fn test_constructors() {
        assert!(Optional::present(42).is_present());
        assert!(Optional::<i32>::absent().is_absent());
        assert_eq!(Optional::<i32>::default(), Optional::Absent);
    }

    #[test]
    fn test_predicates_are_exclusive() {
        let some = Optional::present(1);
        let none: Optional<i32> = Optional::absent();

        assert!(some.is_present() && !some.is_absent());
        assert!(none.is_absent() && !none.is_present());
    }

    #[test]
    fn test_equality() {
        assert_eq!(Optional::present(1), Optional::present(1));
        assert_ne!(Optional::present(1), Optional::present(2));
        assert_ne!(Optional::present(1), Optional::absent());
        assert_eq!(Optional::<i32>::absent(), Optional::absent());
    }

    #[test]
    fn test_hash_includes_variant() {
        let set: HashSet<Optional<i32>> = [
            Optional::present(1),
            Optional::present(1),
            Optional::present(2),
            Optional::absent(),
            Optional::absent(),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_map() {
        assert_eq!(Optional::present(1).map(|x| x + 1), Optional::present(2));
        assert_eq!(
            Optional::present(3).map(|x| x.to_string()),
            Optional::present("3".to_string())
        );
    }

    #[test]
    fn test_map_absent_skips_function() {
        let calls = Cell::new(0);
        let result = Optional::<i32>::absent().map(|x| {
            calls.set(calls.get() + 1);
            x * 2
        });

        assert_eq!(result, Optional::absent());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_map_discard_calls_once_and_keeps_value() {
        let calls = Cell::new(0);
        let result = Optional::present(5).map_discard(|x| {
            calls.set(calls.get() + 1);
            x * 100
        });

        assert_eq!(result, Optional::present(5));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_map_discard_absent() {
        let calls = Cell::new(0);
        let result = Optional::<i32>::absent().map_discard(|_| calls.set(calls.get() + 1));

        assert_eq!(result, Optional::absent());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_map_with_args() {
        let multiply = |x: i32, y: i32| x * y;
        assert_eq!(Optional::present(1).map_with_args(multiply, 3), Optional::present(3));
        assert_eq!(
            Optional::<i32>::absent().map_with_args(multiply, 3),
            Optional::absent()
        );
    }

    #[test]
    fn test_map_with_args_tuple() {
        let describe = |name: &str, (greeting, punct): (&str, char)| {
            format!("{}, {}{}", greeting, name, punct)
        };

        assert_eq!(
            Optional::present("Ada").map_with_args(describe, ("Hello", '!')),
            Optional::present("Hello, Ada!".to_string())
        );
    }

    #[test]
    fn test_map_with_args_discard() {
        let log = std::cell::RefCell::new(Vec::new());
        let result = Optional::present(2).map_with_args_discard(
            |x, tag| log.borrow_mut().push(format!("{}={}", tag, x)),
            "n",
        );

        assert_eq!(result, Optional::present(2));
        assert_eq!(*log.borrow(), vec!["n=2".to_string()]);
    }

    #[test]
    fn test_map_indexed() {
        let pair = Optional::present((3, "three"));
        assert_eq!(pair.map_indexed::<0, _, _>(|n: i32| n * 2), Optional::present(6));
        assert_eq!(pair.map_indexed::<1, _, _>(|s: &str| s.len()), Optional::present(5));

        let none: Optional<(i32, &str)> = Optional::absent();
        assert_eq!(none.map_indexed::<0, _, _>(|n: i32| n * 2), Optional::absent());
    }

    #[test]
    fn test_map_indexed_discard_keeps_tuple() {
        let seen = Cell::new(0);
        let triple = Optional::present((1, 2, 3));
        let result = triple.map_indexed_discard::<2, _, _>(|n: &i32| seen.set(*n));

        assert_eq!(result, Optional::present((1, 2, 3)));
        assert_eq!(seen.get(), 3);
    }

    #[test]
    fn test_map_indexed_vec() {
        let v = Optional::present(vec![10, 20, 30]);
        assert_eq!(v.map_indexed::<1, _, _>(|n: i32| n + 1), Optional::present(21));
    }

    #[test]
    #[should_panic(expected = "tuple index 5 out of range for container of length 2")]
    fn test_map_indexed_out_of_range_panics() {
        let _ = Optional::present([1, 2]).map_indexed::<5, _, _>(|n: i32| n);
    }

    #[test]
    fn test_map_indexed_out_of_range_on_absent_is_fine() {
        let none: Optional<[i32; 2]> = Optional::absent();
        assert_eq!(none.map_indexed::<5, _, _>(|n: i32| n), Optional::absent());
    }

    #[test]
    fn test_chain() {
        let double = |x: i32| Optional::present(x * 2);
        assert_eq!(Optional::present(1).chain(double), Optional::present(2));
        assert_eq!(
            Optional::present(1).chain(|_| Optional::<i32>::absent()),
            Optional::absent()
        );
    }

    #[test]
    fn test_chain_absent_skips_function() {
        let calls = Cell::new(0);
        let result = Optional::<i32>::absent().chain(|x| {
            calls.set(calls.get() + 1);
            Optional::present(x)
        });

        assert_eq!(result, Optional::absent());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_chain_discard() {
        let present = |_: &i32| Optional::present("anything");
        let absent = |_: &i32| Optional::<&str>::absent();

        assert_eq!(Optional::present(9).chain_discard(present), Optional::present(9));
        assert_eq!(Optional::present(9).chain_discard(absent), Optional::absent());
        assert_eq!(Optional::<i32>::absent().chain_discard(present), Optional::absent());
    }

    #[test]
    fn test_chain_with_args() {
        let multiply = |x: i32, y: i32| Optional::present(x * y);
        assert_eq!(Optional::present(1).chain_with_args(multiply, 3), Optional::present(3));
        assert_eq!(
            Optional::<i32>::absent().chain_with_args(multiply, 3),
            Optional::absent()
        );
    }

    #[test]
    fn test_chain_with_args_discard() {
        let at_least = |x: &i32, min: i32| {
            if *x >= min {
                Optional::present(())
            } else {
                Optional::absent()
            }
        };

        assert_eq!(Optional::present(5).chain_with_args_discard(at_least, 3), Optional::present(5));
        assert_eq!(Optional::present(1).chain_with_args_discard(at_least, 3), Optional::absent());
    }

    #[test]
    fn test_chain_indexed() {
        let pair = Optional::present(("key", 0));
        let non_zero = |n: i32| if n == 0 { Optional::absent() } else { Optional::present(n) };

        assert_eq!(pair.chain_indexed::<1, _, _>(non_zero), Optional::absent());
        assert_eq!(
            pair.chain_indexed::<0, _, _>(|k: &str| Optional::present(k.to_uppercase())),
            Optional::present("KEY".to_string())
        );
    }

    #[test]
    fn test_chain_indexed_discard() {
        let pair = Optional::present(("key", 7));
        let positive = |n: &i32| if *n > 0 { Optional::present(()) } else { Optional::absent() };

        assert_eq!(pair.chain_indexed_discard::<1, _, _>(positive), Optional::present(("key", 7)));
        assert_eq!(
            Optional::present(("key", -7)).chain_indexed_discard::<1, _, _>(positive),
            Optional::absent()
        );
    }

    #[test]
    fn test_apply() {
        let f = Optional::present(|x: i32| x * 10);
        assert_eq!(Optional::present(2).apply(f), Optional::present(20));

        let no_f: Optional<fn(i32) -> i32> = Optional::absent();
        assert_eq!(Optional::present(2).apply(no_f), Optional::absent());
    }

    #[test]
    fn test_unwrap() {
        assert_eq!(Optional::present("hello").unwrap(), "hello");
    }

    #[test]
    #[should_panic(expected = "called `Optional::unwrap()` on an `Absent` value")]
    fn test_unwrap_absent_panics() {
        Optional::<i32>::absent().unwrap();
    }

    #[test]
    #[should_panic(expected = "needed a port")]
    fn test_expect_absent_panics() {
        Optional::<u16>::absent().expect("needed a port");
    }

    #[test]
    fn test_value() {
        assert_eq!(Optional::present(1).value(), Ok(1));
        assert_eq!(Optional::<i32>::absent().value(), Err(AccessError::Empty));
    }

    #[test]
    fn test_get_or() {
        assert_eq!(Optional::absent().get_or(100), 100);
        assert_eq!(Optional::present(1).get_or(100), 1);
        assert_eq!(Optional::absent().get_or_else(|| 7), 7);
    }

    #[test]
    fn test_filter() {
        assert_eq!(Optional::present(4).filter(|x| x % 2 == 0), Optional::present(4));
        assert_eq!(Optional::present(3).filter(|x| x % 2 == 0), Optional::absent());
    }

    #[test]
    fn test_or() {
        assert_eq!(Optional::present(1).or(Optional::present(2)), Optional::present(1));
        assert_eq!(Optional::absent().or(Optional::present(2)), Optional::present(2));
        assert_eq!(Optional::absent().or_else(|| Optional::present(3)), Optional::present(3));
    }

    #[test]
    fn test_flatten() {
        assert_eq!(Optional::present(Optional::present(1)).flatten(), Optional::present(1));
        assert_eq!(
            Optional::present(Optional::<i32>::absent()).flatten(),
            Optional::absent()
        );
        assert_eq!(Optional::<Optional<i32>>::absent().flatten(), Optional::absent());
    }

    #[test]
    fn test_option_conversion() {
        let from: Optional<i32> = Some(1).into();
        assert_eq!(from, Optional::present(1));

        let back: Option<i32> = Optional::present(1).into();
        assert_eq!(back, Some(1));

        let none: Option<i32> = Optional::absent().into();
        assert_eq!(none, None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Optional::present(1).to_string(), "Present(1)");
        assert_eq!(Optional::<i32>::absent().to_string(), "Absent");
    }

    #[test]
    fn test_iter() {
        let some = Optional::present(1);
        assert_eq!(some.iter().collect::<Vec<_>>(), vec![&1]);
        assert_eq!((&some).into_iter().count(), 1);
        assert_eq!(Optional::<i32>::absent().into_iter().count(), 0);
    }

    #[test]
    fn test_collect() {
        let all: Optional<Vec<i32>> = vec![Optional::present(1), Optional::present(2)]
            .into_iter()
            .collect();
        assert_eq!(all, Optional::present(vec![1, 2]));

        let gap: Optional<Vec<i32>> = vec![Optional::present(1), Optional::absent()]
            .into_iter()
            .collect();
        assert_eq!(gap, Optional::absent());
    }

    #[test]
    fn test_present_values() {
        let items = vec![Optional::present(1), Optional::absent(), Optional::present(3)];
        assert_eq!(present_values(items).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_end_to_end_chain() {
        let result = Optional::present(1)
            .chain(|x| Optional::present(x * 2))
            .chain(|x| Optional::present(x.to_string()));
        assert_eq!(result, Optional::present("2".to_string()));
    }

    #[test]
    fn test_end_to_end_short_circuit() {
        let calls = Cell::new(0);
        let result = Optional::present(1)
            .chain(|_| Optional::<i32>::absent())
            .chain(|x| {
                calls.set(calls.get() + 1);
                Optional::present(x.to_string())
            });

        assert_eq!(result, Optional::absent());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_functor_identity() {
        assert_eq!(Optional::present(42).map(|v| v), Optional::present(42));
    }
}

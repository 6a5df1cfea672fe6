//! Tuple-indexed access, the one deliberately loose corner of the API.
//!
//! The `*_indexed` combinators on [`Optional`](crate::Optional) and
//! [`Failable`](crate::Failable) apply a function to a single element of a
//! contained product value. They exist for pipelines that carry a tuple along
//! and only need one part of it at a given step.
//!
//! Tuples up to arity 8 are checked at compile time: asking for element 3 of
//! a pair does not build. Arrays and vectors are only checked at run time and
//! an out-of-range index panics immediately.
//!
//! # Examples
//!
//! ```
//! use ferret::Optional;
//!
//! let pair = Optional::present((7, "seven"));
//! assert_eq!(pair.map_indexed::<1, _, _>(|name: &str| name.len()), Optional::present(5));
//! ```

/// Access to element `I` of a fixed-shape value.
pub trait TupleIndex<const I: usize> {
    /// The type of element `I`.
    type Element;

    /// Take element `I`, dropping the rest.
    fn into_element(self) -> Self::Element;

    /// Borrow element `I`.
    fn element(&self) -> &Self::Element;
}

macro_rules! impl_tuple_index {
    ([$($T:ident),+] $($idx:tt => $E:ident),+) => {
        impl_tuple_index!(@each [$($T),+] $($idx => $E),+);
    };
    (@each $types:tt $($idx:tt => $E:ident),+) => {
        $(impl_tuple_index!(@one $types $idx => $E);)+
    };
    (@one [$($T:ident),+] $idx:tt => $E:ident) => {
        impl<$($T),+> TupleIndex<$idx> for ($($T,)+) {
            type Element = $E;

            #[inline]
            fn into_element(self) -> $E {
                self.$idx
            }

            #[inline]
            fn element(&self) -> &$E {
                &self.$idx
            }
        }
    };
}

impl_tuple_index!([A] 0 => A);
impl_tuple_index!([A, B] 0 => A, 1 => B);
impl_tuple_index!([A, B, C] 0 => A, 1 => B, 2 => C);
impl_tuple_index!([A, B, C, D] 0 => A, 1 => B, 2 => C, 3 => D);
impl_tuple_index!([A, B, C, D, F] 0 => A, 1 => B, 2 => C, 3 => D, 4 => F);
impl_tuple_index!([A, B, C, D, F, G] 0 => A, 1 => B, 2 => C, 3 => D, 4 => F, 5 => G);
impl_tuple_index!([A, B, C, D, F, G, H] 0 => A, 1 => B, 2 => C, 3 => D, 4 => F, 5 => G, 6 => H);
impl_tuple_index!([A, B, C, D, F, G, H, J] 0 => A, 1 => B, 2 => C, 3 => D, 4 => F, 5 => G, 6 => H, 7 => J);

impl<T, const I: usize, const N: usize> TupleIndex<I> for [T; N] {
    type Element = T;

    fn into_element(self) -> T {
        match self.into_iter().nth(I) {
            Some(element) => element,
            None => shape_violation(I, N),
        }
    }

    fn element(&self) -> &T {
        match self.get(I) {
            Some(element) => element,
            None => shape_violation(I, N),
        }
    }
}

impl<T, const I: usize> TupleIndex<I> for Vec<T> {
    type Element = T;

    fn into_element(self) -> T {
        let len = self.len();
        match self.into_iter().nth(I) {
            Some(element) => element,
            None => shape_violation(I, len),
        }
    }

    fn element(&self) -> &T {
        match self.get(I) {
            Some(element) => element,
            None => shape_violation(I, self.len()),
        }
    }
}

#[track_caller]
fn shape_violation(index: usize, len: usize) -> ! {
    crate::error::violation(&format!(
        "tuple index {} out of range for container of length {}",
        index, len
    ))
}

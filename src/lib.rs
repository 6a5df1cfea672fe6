//! # Ferret
//!
//! Two small containers and the combinators that go with them:
//!
//! - [`Optional<T>`]: a value that is `Present` or `Absent`
//! - [`Failable<T, E>`]: a computation that ended in `Success` or `Failure`
//!
//! Both are closed two-variant enums. Every combinator takes a plain function,
//! leaves its input untouched and hands back a new container. The empty side
//! (`Absent`, `Failure`) short-circuits: the function is not called and the
//! empty value flows through as is.
//!
//! ## Quick Example
//!
//! ```rust
//! use ferret::{Failable, Optional};
//!
//! fn find_port(name: &str) -> Optional<&'static str> {
//!     match name {
//!         "http" => Optional::present("80"),
//!         "https" => Optional::present("443"),
//!         _ => Optional::absent(),
//!     }
//! }
//!
//! fn parse_port(raw: &str) -> Failable<u16, String> {
//!     Failable::from_result(raw.parse::<u16>().map_err(|e| e.to_string()))
//! }
//!
//! // A lookup that may find nothing, followed by a parse that may fail.
//! assert_eq!(
//!     find_port("https").chain_to_failable(parse_port),
//!     Failable::success(Optional::present(443))
//! );
//!
//! // Nothing to parse is not an error.
//! assert_eq!(
//!     find_port("gopher").chain_to_failable(parse_port),
//!     Failable::success(Optional::absent())
//! );
//! ```
//!
//! ## Combinator families
//!
//! | family            | on the happy path                                   |
//! |-------------------|-----------------------------------------------------|
//! | `map`             | transform the value                                 |
//! | `map_discard`     | run a side effect, keep the value                   |
//! | `chain`           | run a step that may itself be empty                 |
//! | `chain_discard`   | run a check that may empty the result, keep value   |
//! | `*_with_args`     | same, with extra arguments after the value          |
//! | `*_indexed`       | same, on one element of a contained tuple           |
//!
//! Operations that cross between the two types live in [`bridge`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![cfg_attr(feature = "try_trait", feature(try_trait_v2))]

pub mod bridge;
pub mod error;
pub mod failable;
pub mod index;
pub mod optional;
pub mod testing;
#[cfg(feature = "try_trait")]
mod try_impl;

// Re-exports
pub use error::AccessError;
pub use failable::Failable;
pub use index::TupleIndex;
pub use optional::Optional;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::AccessError;
    pub use crate::failable::Failable;
    pub use crate::index::TupleIndex;
    pub use crate::optional::Optional;
}

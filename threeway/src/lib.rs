//! Three-way comparison with ordering categories.
//!
//! A three-way comparator answers one question about two values, producing an [`Outcome`]
//! of `Less`, `Equal`, `Greater`, or (for partial orders) `Unordered`. Each comparator also
//! declares the [`Category`] of order it implements, and the six relational predicates are
//! all derived from the one outcome.
//!
//! **Comparison**: The [`order`] module defines the [`ThreeWay`] trait, the carrier traits
//! [`TotalOrder`] and [`StrongOrder`], and implementations for primitive types, references,
//! options, tuples, and sequences.
//!
//! **Composition**: The [`fields`] module compares structs field by field, either from a
//! runtime list of accessors or through the [`fieldwise_order!`] macro. The [`derived`]
//! module compares types that extend a base type, including bases that only offer `==` and
//! `<`.
//!
//! **Conversion**: The [`hetero`] module compares a domain value against a foreign
//! representation by converting first, and the [`integer`] module compares integers of
//! mixed signedness by value.
//!
//! **Sorting**: The [`sort`] module sorts by total orders, and by partial orders with an
//! explicit policy for unordered elements. Sorts may be logged through the [`logging`]
//! module, which builds on the `threeway_logging` crate.
//!
//! # Examples
//!
//! ```
//! use threeway::{Category, Money, Outcome, ThreeWay};
//!
//! let wallet = Money::new(42, 50).unwrap();
//! assert_eq!(wallet.compare(&Money::new(42, 51).unwrap()), Outcome::Less);
//! assert_eq!(<Money as ThreeWay>::CATEGORY, Category::Strong);
//!
//! // Any floating point field makes a composite partial.
//! assert_eq!(<(Money, f64) as ThreeWay>::CATEGORY, Category::Partial);
//! assert_eq!((wallet, f64::NAN).compare(&(wallet, 0.0)), Outcome::Unordered);
//! ```

#![forbid(missing_docs)]

pub use order::{Category, Outcome, StrongOrder, ThreeWay, TotalOrder, TotalF32, TotalF64};
pub use error::InvalidValue;
pub use money::Money;
pub use sort::{Sorter, UnorderedPolicy};
#[cfg(feature = "getopts")]
pub use config::Config;

/// Re-export of the `threeway_logging` crate.
pub mod logging_core {
    pub use threeway_logging::*;
}

pub mod order;
pub mod fields;
pub mod derived;
pub mod hetero;
pub mod integer;
pub mod money;
pub mod error;
pub mod sort;
pub mod logging;
#[cfg(feature = "getopts")]
pub mod config;

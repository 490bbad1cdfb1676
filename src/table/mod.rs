//! Digit-selection tables: which digit may be chosen where.
//!
//! A [`DigitTable`] splits the x axis into partitions ([`DigitSet`]) and
//! gives each partition an ordered list of `(digit, predicate)` rules.
//! Ready-made tables for the reference variants live in [`builtin`].

pub mod builtin;
mod digit_set;
mod error;
mod radix;

pub use digit_set::{DigitRule, DigitSet, DigitTable};
pub use error::TableError;
pub use radix::{DigitPair, Operation, Radix};

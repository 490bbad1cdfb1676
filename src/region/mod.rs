//! Digit regions over the grid.
//!
//! [`evaluate`] applies a [`DigitTable`](crate::table::DigitTable) to every
//! grid point and returns one mask per digit. [`overlaps`] intersects those
//! masks pairwise to show the redundant zones between neighbouring digits.

mod membership;
mod overlap;

pub use membership::{evaluate, MembershipMap, PointClass};
pub use overlap::{non_adjacent_overlaps, non_adjacent_pairs, overlaps};

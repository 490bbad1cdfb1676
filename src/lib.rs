//! digit-selection - quotient and root digit selection for radix-2/4
//! digit-recurrence division and square root.
//!
//! A digit table describes, for every quantized operand estimate `x`
//! (divisor or partial root) and scaled partial remainder `t`, which signed
//! digits are valid. Because the digit sets are redundant, neighbouring
//! digits overlap. This crate evaluates such tables on a quantized grid,
//! reports the overlaps and table defects, and moves every shared boundary
//! so that each column becomes a disjoint list of `t` spans, ready to be
//! written out as a lookup table.
//!
//! ```
//! use digit_selection::Variant;
//!
//! let selection = Variant::Radix4Division.derive().unwrap();
//! assert!(selection.is_complete());
//! assert_eq!(selection.digit_at(8, 30), Some(2));
//! ```

pub mod grid;
pub mod predicate;
pub mod region;
pub mod selection;
pub mod span;
pub mod table;

pub use grid::{Grid, GridConfig};
pub use selection::{derive, SelectionError, SelectionTable, Variant};
pub use span::{ColumnSpans, MalformedTable, Span};
pub use table::{DigitTable, Radix};

/// A signed digit of the recurrence, `-2 ..= 2` at most.
pub type Digit = i8;

//! Column spans and overlap removal.
//!
//! [`ColumnSpans::extract`] reads one column of a
//! [`MembershipMap`](crate::region::MembershipMap) into a list of digit
//! spans, which may overlap where the digit set is redundant.
//! [`remove_overlaps`] moves each shared boundary so that the spans
//! partition the column.

mod closed;
mod column;
mod error;
mod transform;

pub use closed::Span;
pub use column::{ColumnSpans, DigitSpan};
pub use error::{BoundaryError, MalformedTable};
pub use transform::{granularity, remove_overlaps, resolve_boundary, MAX_OVERLAP_DIFF};

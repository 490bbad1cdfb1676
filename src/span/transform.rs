//! Overlap removal: turns overlapping column spans into a partition.
//!
//! Neighbouring spans in column order meet at one shared boundary. With
//! `lower_max` the top of the lower span and `upper_min` the bottom of the
//! upper one, `diff = lower_max - upper_min` classifies the boundary:
//!
//! | `diff`    | meaning                     | outcome                          |
//! |-----------|-----------------------------|----------------------------------|
//! | `< -1`    | uncovered values between    | [`BoundaryError::Gap`]           |
//! | `-1`      | spans already abut          | unchanged                        |
//! | `0`       | one shared point            | split by parity of the point     |
//! | `1..=14`  | overlap of `diff + 1` points| split on a grid of `M` values    |
//! | `> 14`    | overlap too wide            | [`BoundaryError::OverlapTooWide`]|
//!
//! For a real overlap the boundary is moved to the midpoint or the end of
//! the `M`-aligned block just below `upper_min`, so it lands on a value
//! with as many trailing zero bits as the overlap allows.

use std::collections::BTreeSet;

use log::trace;
use num_integer::Integer;

use super::closed::Span;
use super::column::{ColumnSpans, DigitSpan};
use super::error::{BoundaryError, MalformedTable};
use crate::table::DigitPair;

/// Largest `diff` that can be resolved.
pub const MAX_OVERLAP_DIFF: i64 = 14;

/// Alignment used to split an overlap with the given `diff`, or `None`
/// when there is no overlap to split or it is too wide.
pub const fn granularity(diff: i64) -> Option<i64> {
    match diff {
        1..=2 => Some(4),
        3..=6 => Some(8),
        7..=MAX_OVERLAP_DIFF => Some(16),
        _ => None,
    }
}

/// Resolves one shared boundary.
///
/// Returns `(new_lower_max, new_upper_min)`; on success they always differ
/// by exactly one.
///
/// # Examples
///
/// ```
/// use digit_selection::span::resolve_boundary;
///
/// assert_eq!(resolve_boundary(5, 3), Ok((3, 4)));
/// assert_eq!(resolve_boundary(7, 7), Ok((7, 8)));
/// assert_eq!(resolve_boundary(4, 5), Ok((4, 5)));
/// ```
pub fn resolve_boundary(lower_max: i64, upper_min: i64) -> Result<(i64, i64), BoundaryError> {
    let diff = lower_max - upper_min;
    match diff {
        -1 => Ok((lower_max, upper_min)),
        d if d < -1 => Err(BoundaryError::Gap { gap: -1 - d }),
        0 if lower_max.is_odd() => Ok((lower_max, lower_max + 1)),
        0 => Ok((lower_max - 1, lower_max)),
        _ => {
            let m = granularity(diff).ok_or(BoundaryError::OverlapTooWide {
                diff,
                max: MAX_OVERLAP_DIFF,
            })?;
            let base = (upper_min - 1).div_floor(&m) * m;
            let threshold = base + m - 1;
            if lower_max < threshold {
                Ok((base + m / 2 - 1, base + m / 2))
            } else {
                Ok((base + m - 1, base + m))
            }
        }
    }
}

/// Adjusts every shared boundary of `column` in one pass, highest first.
///
/// Only neighbours in column order are compared. The input is left as is.
pub fn remove_overlaps(column: &ColumnSpans) -> Result<ColumnSpans, MalformedTable> {
    let x = column.x();
    if column.is_empty() {
        return Err(MalformedTable::EmptyColumn { x });
    }
    let mut seen = BTreeSet::new();
    if let Some(s) = column.spans().iter().find(|s| !seen.insert(s.digit)) {
        return Err(MalformedTable::RepeatedDigit { x, digit: s.digit });
    }

    let mut bounds: Vec<(i64, i64)> = column
        .spans()
        .iter()
        .map(|s| (s.span.min(), s.span.max()))
        .collect();

    for (i, pair) in column.spans().windows(2).enumerate() {
        let (upper, lower) = (&pair[0], &pair[1]);
        let lower_max = bounds[i + 1].1;
        let upper_min = bounds[i].0;
        let digits = DigitPair::new(upper.digit, lower.digit);

        let (new_lower_max, new_upper_min) =
            resolve_boundary(lower_max, upper_min).map_err(|e| e.at(x, digits))?;
        trace!(
            "x = {}: boundary {} ({}, {}) -> ({}, {})",
            x,
            digits,
            lower_max,
            upper_min,
            new_lower_max,
            new_upper_min
        );
        bounds[i + 1].1 = new_lower_max;
        bounds[i].0 = new_upper_min;
    }

    let spans = column
        .spans()
        .iter()
        .zip(bounds)
        .map(|(s, (min, max))| {
            Span::try_new(min, max)
                .map(|span| DigitSpan::new(s.digit, span))
                .ok_or(MalformedTable::EmptySpan { x, digit: s.digit })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ColumnSpans::new(x, spans))
}

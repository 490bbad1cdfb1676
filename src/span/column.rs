//! Per-column digit spans and their extraction from membership masks.

use std::fmt::Display;

use super::closed::Span;
use super::error::MalformedTable;
use crate::region::{MembershipMap, PointClass};
use crate::Digit;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One digit and its `t` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DigitSpan {
    pub digit: Digit,
    pub span: Span,
}

impl DigitSpan {
    pub const fn new(digit: Digit, span: Span) -> Self {
        Self { digit, span }
    }
}

/// The digits of one column with their spans, highest `t` first.
///
/// For `x >= 0` that is descending digit order, for `x < 0` ascending,
/// since the selection regions flip with the sign of the divisor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColumnSpans {
    x: i64,
    spans: Vec<DigitSpan>,
}

impl ColumnSpans {
    /// Wraps spans already in column order.
    pub fn new(x: i64, spans: Vec<DigitSpan>) -> Self {
        Self { x, spans }
    }

    /// Reads the span of every digit in column `x` of `map` and checks the
    /// column for table defects.
    ///
    /// Points between the lowest and highest `t` of any digit (the column
    /// hull) must be covered by one digit or by two adjacent ones. Points
    /// outside the hull are not checked.
    pub fn extract(map: &MembershipMap, x: i64) -> Result<Self, MalformedTable> {
        let mut spans = Vec::new();
        for (digit, _) in map.masks() {
            let ts = map.column_of(digit, x);
            let (Some(&min), Some(&max)) = (ts.first(), ts.last()) else {
                continue;
            };
            if (max - min + 1) as usize != ts.len() {
                return Err(MalformedTable::NonContiguousRegion { x, digit });
            }
            spans.push(DigitSpan::new(digit, Span::new(min, max)));
        }

        let column = Self::in_column_order(x, spans);
        let hull = column.hull().ok_or(MalformedTable::EmptyColumn { x })?;

        for t in hull.values() {
            match map.classify(x, t) {
                PointClass::Unique(_) | PointClass::Redundant { .. } => {}
                PointClass::Undefined => return Err(MalformedTable::NoDigit { x, t }),
                PointClass::Conflict(digits) => {
                    return Err(match *digits.as_slice() {
                        [lower, upper] => MalformedTable::NonAdjacentOverlap { x, t, upper, lower },
                        _ => MalformedTable::TooManyDigits {
                            x,
                            t,
                            digits: digits.clone(),
                        },
                    });
                }
            }
        }

        Ok(column)
    }

    /// Sorts `spans` into column order for `x`.
    pub fn in_column_order(x: i64, mut spans: Vec<DigitSpan>) -> Self {
        if x >= 0 {
            spans.sort_by(|a, b| b.digit.cmp(&a.digit));
        } else {
            spans.sort_by(|a, b| a.digit.cmp(&b.digit));
        }
        Self { x, spans }
    }

    pub const fn x(&self) -> i64 {
        self.x
    }

    pub fn spans(&self) -> &[DigitSpan] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Digits in column order.
    pub fn digits(&self) -> Vec<Digit> {
        self.spans.iter().map(|s| s.digit).collect()
    }

    pub fn span_of(&self, digit: Digit) -> Option<Span> {
        self.spans
            .iter()
            .find(|s| s.digit == digit)
            .map(|s| s.span)
    }

    /// From the lowest to the highest `t` of any span.
    pub fn hull(&self) -> Option<Span> {
        self.spans
            .iter()
            .map(|s| s.span)
            .reduce(|acc, span| acc.hull(&span))
    }

    /// The first digit in column order whose span contains `t`.
    pub fn digit_at(&self, t: i64) -> Option<Digit> {
        self.spans
            .iter()
            .find(|s| s.span.contains(t))
            .map(|s| s.digit)
    }

    /// True when the spans are pairwise disjoint and cover their hull with
    /// no gap.
    pub fn is_partition(&self) -> bool {
        let Some(hull) = self.hull() else {
            return false;
        };
        let disjoint = self.spans.iter().enumerate().all(|(i, a)| {
            self.spans[i + 1..]
                .iter()
                .all(|b| !a.span.overlaps(&b.span))
        });
        let total: u64 = self.spans.iter().map(|s| s.span.len()).sum();
        disjoint && total == hull.len()
    }
}

impl Display for ColumnSpans {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x = {}:", self.x)?;
        for s in &self.spans {
            write!(f, " {} {}", s.digit, s.span)?;
        }
        Ok(())
    }
}

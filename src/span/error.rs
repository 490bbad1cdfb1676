use thiserror::Error;

use crate::table::DigitPair;
use crate::Digit;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Defects of a digit table found in one column.
///
/// Fatal for that column only; other columns are still derived.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum MalformedTable {
    #[error("Column x = {x}: no digit holds at t = {t}")]
    NoDigit { x: i64, t: i64 },

    #[error("Column x = {x}: digits {digits:?} all hold at t = {t}")]
    TooManyDigits { x: i64, t: i64, digits: Vec<Digit> },

    #[error("Column x = {x}: non-adjacent digits {upper} and {lower} overlap at t = {t}")]
    NonAdjacentOverlap {
        x: i64,
        t: i64,
        upper: Digit,
        lower: Digit,
    },

    #[error("Column x = {x}: region of digit {digit} is not contiguous")]
    NonContiguousRegion { x: i64, digit: Digit },

    #[error("Column x = {x}: digits {pair} overlap by {diff}, wider than the widest resolvable overlap")]
    OverlapTooWide { x: i64, pair: DigitPair, diff: i64 },

    #[error("Column x = {x}: gap of {gap} between digits {pair}")]
    Gap { x: i64, pair: DigitPair, gap: i64 },

    #[error("Column x = {x}: span of digit {digit} is empty after overlap removal")]
    EmptySpan { x: i64, digit: Digit },

    #[error("Column x = {x}: no digit holds anywhere")]
    EmptyColumn { x: i64 },

    #[error("Column x = {x}: digit {digit} has more than one span")]
    RepeatedDigit { x: i64, digit: Digit },
}

impl MalformedTable {
    /// The offending column.
    pub fn x(&self) -> i64 {
        match *self {
            MalformedTable::NoDigit { x, .. }
            | MalformedTable::TooManyDigits { x, .. }
            | MalformedTable::NonAdjacentOverlap { x, .. }
            | MalformedTable::NonContiguousRegion { x, .. }
            | MalformedTable::OverlapTooWide { x, .. }
            | MalformedTable::Gap { x, .. }
            | MalformedTable::EmptySpan { x, .. }
            | MalformedTable::EmptyColumn { x }
            | MalformedTable::RepeatedDigit { x, .. } => x,
        }
    }
}

/// Why a single shared boundary could not be resolved.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryError {
    #[error("Spans leave {gap} uncovered value(s) between them")]
    Gap { gap: i64 },

    #[error("Overlap diff {diff} exceeds {max}")]
    OverlapTooWide { diff: i64, max: i64 },
}

impl BoundaryError {
    /// Attaches the column and digit pair.
    pub(crate) fn at(self, x: i64, pair: DigitPair) -> MalformedTable {
        match self {
            BoundaryError::Gap { gap } => MalformedTable::Gap { x, pair, gap },
            BoundaryError::OverlapTooWide { diff, .. } => {
                MalformedTable::OverlapTooWide { x, pair, diff }
            }
        }
    }
}

//! Radix, operation and signed-digit helpers.

use std::fmt::Display;
use std::ops::RangeInclusive;

use crate::Digit;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Radix of the recurrence and, with it, the signed digit set.
///
/// Both radices use the minimally redundant set `{-r/2, .., r/2}`:
/// `{-1, 0, 1}` for radix 2 and `{-2, .., 2}` for radix 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Radix {
    Two,
    Four,
}

impl Radix {
    pub const fn value(&self) -> u32 {
        match self {
            Radix::Two => 2,
            Radix::Four => 4,
        }
    }

    /// Largest digit magnitude.
    pub const fn max_digit(&self) -> Digit {
        match self {
            Radix::Two => 1,
            Radix::Four => 2,
        }
    }

    pub fn digits(&self) -> RangeInclusive<Digit> {
        -self.max_digit()..=self.max_digit()
    }

    pub fn contains(&self, digit: Digit) -> bool {
        self.digits().contains(&digit)
    }

    /// Value-adjacent digit pairs, highest first:
    /// `(2,1), (1,0), (0,-1), (-1,-2)` for radix 4.
    pub fn adjacent_pairs(&self) -> Vec<DigitPair> {
        self.digits()
            .rev()
            .zip(self.digits().rev().skip(1))
            .map(|(upper, lower)| DigitPair::new(upper, lower))
            .collect()
    }
}

impl Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "radix-{}", self.value())
    }
}

/// Which recurrence a digit table drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Operation {
    /// Quotient digit selection over `(D, T)`.
    Division,
    /// Root digit selection over `(S, T)`.
    SquareRoot,
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Division => write!(f, "division"),
            Operation::SquareRoot => write!(f, "square root"),
        }
    }
}

/// An ordered pair of digits, `upper > lower`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DigitPair {
    upper: Digit,
    lower: Digit,
}

impl DigitPair {
    /// Creates the pair, ordering the two digits.
    ///
    /// # Panics
    ///
    /// Panics if both digits are equal.
    pub fn new(a: Digit, b: Digit) -> Self {
        assert!(a != b, "DigitPair needs two distinct digits");
        Self {
            upper: a.max(b),
            lower: a.min(b),
        }
    }

    pub const fn upper(&self) -> Digit {
        self.upper
    }

    pub const fn lower(&self) -> Digit {
        self.lower
    }

    /// True when the digits differ by exactly one.
    pub const fn is_adjacent(&self) -> bool {
        self.upper - self.lower == 1
    }
}

impl Display for DigitPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.upper, self.lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_sets() {
        assert_eq!(Radix::Two.digits().collect::<Vec<_>>(), vec![-1, 0, 1]);
        assert_eq!(Radix::Four.digits().count(), 5);
        assert!(Radix::Four.contains(-2));
        assert!(!Radix::Two.contains(2));
    }

    #[test]
    fn adjacent_pairs_descend() {
        let pairs = Radix::Four.adjacent_pairs();
        assert_eq!(
            pairs,
            vec![
                DigitPair::new(2, 1),
                DigitPair::new(1, 0),
                DigitPair::new(0, -1),
                DigitPair::new(-1, -2),
            ]
        );
        assert!(pairs.iter().all(DigitPair::is_adjacent));
        assert_eq!(Radix::Two.adjacent_pairs().len(), 2);
    }

    #[test]
    fn pair_orders_digits() {
        let pair = DigitPair::new(-2, 0);
        assert_eq!(pair.upper(), 0);
        assert_eq!(pair.lower(), -2);
        assert!(!pair.is_adjacent());
        assert_eq!(pair.to_string(), "(0, -2)");
    }

    #[test]
    #[should_panic]
    fn pair_of_equal_digits_panics() {
        let _ = DigitPair::new(1, 1);
    }

    #[test]
    fn display() {
        assert_eq!(Radix::Four.to_string(), "radix-4");
        assert_eq!(Operation::SquareRoot.to_string(), "square root");
    }
}

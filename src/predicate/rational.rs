//! Exact rational coefficients.
//!
//! Digit-selection boundaries have slopes such as `8/3` or `10/3` (radix-4
//! redundancy factor `2/3`) and offsets such as `1/48`. Comparing them with
//! integer grid points in floating point is only accidentally right, so all
//! coefficients are kept as reduced fractions.

use std::fmt::Display;
use std::ops::{Add, Mul, Neg, Sub};

use num_integer::Integer;

/// Reduced fraction `num / den` with `den > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    num: i64,
    den: i64,
}

impl Rational {
    pub const ZERO: Rational = Rational { num: 0, den: 1 };
    pub const ONE: Rational = Rational { num: 1, den: 1 };

    /// Creates `num / den` in lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if `den == 0`.
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "Rational denominator must be non-zero");
        let g = num.gcd(&den);
        let (mut num, mut den) = (num / g, den / g);
        if den < 0 {
            num = -num;
            den = -den;
        }
        Self { num, den }
    }

    pub const fn integer(value: i64) -> Self {
        Self { num: value, den: 1 }
    }

    pub const fn numer(&self) -> i64 {
        self.num
    }

    pub const fn denom(&self) -> i64 {
        self.den
    }

    pub const fn is_zero(&self) -> bool {
        self.num == 0
    }

    /// Numerator after rescaling to the (multiple) denominator `den`.
    pub(crate) fn scaled_to(&self, den: i64) -> i64 {
        debug_assert!(den % self.den == 0);
        self.num * (den / self.den)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        let den = self.den.lcm(&rhs.den);
        Rational::new(self.scaled_to(den) + rhs.scaled_to(den), den)
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        self + (-rhs)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        Rational::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_reduces() {
        let r = Rational::new(16, 6);
        assert_eq!(r.numer(), 8);
        assert_eq!(r.denom(), 3);
    }

    #[test]
    fn negative_denominator_moves_sign() {
        let r = Rational::new(4, -3);
        assert_eq!(r, Rational::new(-4, 3));
        assert_eq!(r.denom(), 3);
    }

    #[test]
    fn zero_is_canonical() {
        assert_eq!(Rational::new(0, -7), Rational::ZERO);
        assert!(Rational::new(0, 5).is_zero());
    }

    #[test]
    #[should_panic]
    fn zero_denominator_panics() {
        let _ = Rational::new(1, 0);
    }

    #[test]
    fn arithmetic() {
        let a = Rational::new(4, 3);
        let b = Rational::new(1, 48);
        assert_eq!(a * b, Rational::new(1, 36));
        assert_eq!(a - b, Rational::new(63, 48));
        assert_eq!(a + Rational::ONE, Rational::new(7, 3));
        assert_eq!(-a, Rational::new(-4, 3));
    }

    #[test]
    fn display() {
        assert_eq!(Rational::new(10, 3).to_string(), "10/3");
        assert_eq!(Rational::new(-6, 3).to_string(), "-2");
    }
}

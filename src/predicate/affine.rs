//! Affine forms in `(x, t)` and the exact inequalities built from them.

use std::fmt::{Display, Write};
use std::ops::{Add, Mul, Neg, Not, Sub};

use num_integer::Integer;

use super::rational::Rational;
use super::traits::Predicate;

/// `x·X + t·T + c` with rational coefficients.
///
/// Built with ordinary arithmetic:
///
/// ```
/// use digit_selection::predicate::{LinearForm, Rational};
///
/// let x = LinearForm::x();
/// let t = LinearForm::t();
/// // (8/3)(x + 1) <= t
/// let lower = ((x + 1) * Rational::new(8, 3)).le(t);
/// assert!(lower.holds(8, 24));
/// assert!(!lower.holds(8, 23));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinearForm {
    x: Rational,
    t: Rational,
    c: Rational,
}

impl LinearForm {
    pub const fn new(x: Rational, t: Rational, c: Rational) -> Self {
        Self { x, t, c }
    }

    /// The operand-estimate coordinate.
    pub const fn x() -> Self {
        Self::new(Rational::ONE, Rational::ZERO, Rational::ZERO)
    }

    /// The partial-remainder coordinate.
    pub const fn t() -> Self {
        Self::new(Rational::ZERO, Rational::ONE, Rational::ZERO)
    }

    pub const fn constant(c: Rational) -> Self {
        Self::new(Rational::ZERO, Rational::ZERO, c)
    }

    /// `self <= rhs`
    pub fn le(self, rhs: impl Into<LinearForm>) -> Inequality {
        Inequality::from_form(rhs.into() - self, Relation::NonNegative)
    }

    /// `self < rhs`
    pub fn lt(self, rhs: impl Into<LinearForm>) -> Inequality {
        Inequality::from_form(rhs.into() - self, Relation::Positive)
    }

    /// `self >= rhs`
    pub fn ge(self, rhs: impl Into<LinearForm>) -> Inequality {
        Inequality::from_form(self - rhs.into(), Relation::NonNegative)
    }

    /// `self > rhs`
    pub fn gt(self, rhs: impl Into<LinearForm>) -> Inequality {
        Inequality::from_form(self - rhs.into(), Relation::Positive)
    }
}

impl From<Rational> for LinearForm {
    fn from(c: Rational) -> Self {
        Self::constant(c)
    }
}

impl From<i64> for LinearForm {
    fn from(c: i64) -> Self {
        Self::constant(Rational::integer(c))
    }
}

impl Add for LinearForm {
    type Output = LinearForm;

    fn add(self, rhs: LinearForm) -> LinearForm {
        LinearForm::new(self.x + rhs.x, self.t + rhs.t, self.c + rhs.c)
    }
}

impl Sub for LinearForm {
    type Output = LinearForm;

    fn sub(self, rhs: LinearForm) -> LinearForm {
        self + (-rhs)
    }
}

macro_rules! impl_constant_ops {
    ($($ty:ty),*) => {$(
        impl Add<$ty> for LinearForm {
            type Output = LinearForm;

            fn add(self, rhs: $ty) -> LinearForm {
                self + LinearForm::from(rhs)
            }
        }

        impl Sub<$ty> for LinearForm {
            type Output = LinearForm;

            fn sub(self, rhs: $ty) -> LinearForm {
                self - LinearForm::from(rhs)
            }
        }
    )*};
}

impl_constant_ops!(i64, Rational);

impl Mul<Rational> for LinearForm {
    type Output = LinearForm;

    fn mul(self, k: Rational) -> LinearForm {
        LinearForm::new(self.x * k, self.t * k, self.c * k)
    }
}

impl Mul<i64> for LinearForm {
    type Output = LinearForm;

    fn mul(self, k: i64) -> LinearForm {
        self * Rational::integer(k)
    }
}

impl Neg for LinearForm {
    type Output = LinearForm;

    fn neg(self) -> LinearForm {
        LinearForm::new(-self.x, -self.t, -self.c)
    }
}

/// How an [`Inequality`] compares its form with zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `form >= 0`
    NonNegative,
    /// `form > 0`
    Positive,
}

/// `a·x + b·t + c >= 0` (or `> 0`) with integer coefficients.
///
/// Constructed from a [`LinearForm`] by clearing denominators, so evaluating
/// it on integer grid points is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Inequality {
    a: i64,
    b: i64,
    c: i64,
    relation: Relation,
}

impl Inequality {
    fn from_form(form: LinearForm, relation: Relation) -> Self {
        let den = form.x.denom().lcm(&form.t.denom()).lcm(&form.c.denom());
        let (a, b, c) = (
            form.x.scaled_to(den),
            form.t.scaled_to(den),
            form.c.scaled_to(den),
        );
        let g = a.gcd(&b).gcd(&c).max(1);
        Self {
            a: a / g,
            b: b / g,
            c: c / g,
            relation,
        }
    }

    /// Integer coefficients `(a, b, c)` of `a·x + b·t + c`.
    pub const fn coefficients(&self) -> (i64, i64, i64) {
        (self.a, self.b, self.c)
    }

    pub const fn relation(&self) -> Relation {
        self.relation
    }

    pub fn holds(&self, x: i64, t: i64) -> bool {
        let value = self.a as i128 * x as i128 + self.b as i128 * t as i128 + self.c as i128;
        match self.relation {
            Relation::NonNegative => value >= 0,
            Relation::Positive => value > 0,
        }
    }
}

impl Not for Inequality {
    type Output = Inequality;

    /// `!(v >= 0)` is `-v > 0`, and `!(v > 0)` is `-v >= 0`.
    fn not(self) -> Inequality {
        Inequality {
            a: -self.a,
            b: -self.b,
            c: -self.c,
            relation: match self.relation {
                Relation::NonNegative => Relation::Positive,
                Relation::Positive => Relation::NonNegative,
            },
        }
    }
}

impl Predicate for Inequality {
    fn holds(&self, x: i64, t: i64) -> bool {
        Inequality::holds(self, x, t)
    }

    fn stringify(&self) -> String {
        self.to_string()
    }
}

impl Display for Inequality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = String::new();
        for (coef, name) in [(self.b, "t"), (self.a, "x")] {
            if coef == 0 {
                continue;
            }
            let sign = if coef < 0 { "-" } else { "+" };
            if out.is_empty() {
                if coef < 0 {
                    out.push('-');
                }
            } else {
                write!(out, " {} ", sign)?;
            }
            match coef.abs() {
                1 => out.push_str(name),
                k => write!(out, "{}·{}", k, name)?,
            }
        }
        if self.c != 0 || out.is_empty() {
            if out.is_empty() {
                write!(out, "{}", self.c)?;
            } else if self.c < 0 {
                write!(out, " - {}", -self.c)?;
            } else {
                write!(out, " + {}", self.c)?;
            }
        }
        let op = match self.relation {
            Relation::NonNegative => ">=",
            Relation::Positive => ">",
        };
        write!(f, "{} {} 0", out, op)
    }
}

//! Core predicate trait for digit-selection regions.

use std::fmt::Debug;

/// Pure test of whether a grid point `(x, t)` lies in a region.
///
/// Predicates compose via combinators ([`PredicateNode`](crate::predicate::PredicateNode))
/// to form trees of AND/OR/NOT logic.
///
/// # Contract
///
/// Implementations must be side-effect free and deterministic: the same
/// point always gives the same answer.
pub trait Predicate: Send + Sync + Debug {
    /// Returns true if `(x, t)` satisfies this predicate.
    fn holds(&self, x: i64, t: i64) -> bool;

    /// Returns a string representation of this predicate.
    fn stringify(&self) -> String;
}

/// A predicate backed by a plain function, for regions that are easier to
/// write as code than as affine inequalities.
pub struct FnPredicate<F> {
    label: String,
    f: F,
}

impl<F> FnPredicate<F>
where
    F: Fn(i64, i64) -> bool + Send + Sync,
{
    pub fn new(label: impl Into<String>, f: F) -> Self {
        Self {
            label: label.into(),
            f,
        }
    }
}

impl<F> Debug for FnPredicate<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnPredicate")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl<F> Predicate for FnPredicate<F>
where
    F: Fn(i64, i64) -> bool + Send + Sync,
{
    fn holds(&self, x: i64, t: i64) -> bool {
        (self.f)(x, t)
    }

    fn stringify(&self) -> String {
        self.label.clone()
    }
}

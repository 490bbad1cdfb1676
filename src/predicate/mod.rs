//! Digit-region predicates.
//!
//! A digit's validity region is a boolean combination of affine
//! inequalities in the grid coordinates `x` and `t`:
//!
//! - [`Rational`] - exact coefficients such as `8/3`
//! - [`LinearForm`] - `a·x + b·t + c` built with ordinary arithmetic
//! - [`Inequality`] - a form compared with zero, evaluated exactly on integers
//! - [`PredicateNode`] - AND/OR/NOT trees over any [`Predicate`]

mod affine;
mod node;
mod rational;
mod traits;

pub use affine::{Inequality, LinearForm, Relation};
pub use node::PredicateNode;
pub use rational::Rational;
pub use traits::{FnPredicate, Predicate};

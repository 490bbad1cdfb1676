//! Digit tables: x-partitions with ordered `(digit, predicate)` rules.

use std::collections::{BTreeMap, HashSet};
use std::fmt::Write;

use super::error::TableError;
use super::radix::{Operation, Radix};
use crate::grid::Grid;
use crate::predicate::PredicateNode;
use crate::Digit;

/// One digit and the region of the `(x, t)` plane where it may be selected.
#[derive(Debug, Clone)]
pub struct DigitRule {
    pub digit: Digit,
    pub predicate: PredicateNode,
}

impl DigitRule {
    pub fn new(digit: Digit, predicate: impl Into<PredicateNode>) -> Self {
        Self {
            digit,
            predicate: predicate.into(),
        }
    }

    pub fn holds(&self, x: i64, t: i64) -> bool {
        self.predicate.evaluate(x, t)
    }
}

/// A named slice of the x axis and the digit rules that apply on it.
///
/// Tables are usually split by the sign of `x` (divisor estimates), since
/// the rules are mirrored there.
#[derive(Debug, Clone)]
pub struct DigitSet {
    name: String,
    x_values: Vec<i64>,
    rules: Vec<DigitRule>,
}

impl DigitSet {
    pub fn new(name: impl Into<String>, x_values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            name: name.into(),
            x_values: x_values.into_iter().collect(),
            rules: Vec::new(),
        }
    }

    /// Appends a rule; order is kept.
    pub fn rule(mut self, digit: Digit, predicate: impl Into<PredicateNode>) -> Self {
        self.rules.push(DigitRule::new(digit, predicate));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x_values(&self) -> &[i64] {
        &self.x_values
    }

    pub fn rules(&self) -> &[DigitRule] {
        &self.rules
    }

    pub fn applies_to(&self, x: i64) -> bool {
        self.x_values.contains(&x)
    }
}

/// Complete digit-selection table for one radix and operation.
#[derive(Debug, Clone)]
pub struct DigitTable {
    name: String,
    radix: Radix,
    operation: Operation,
    partitions: Vec<DigitSet>,
}

impl DigitTable {
    pub fn new(name: impl Into<String>, radix: Radix, operation: Operation) -> Self {
        Self {
            name: name.into(),
            radix,
            operation,
            partitions: Vec::new(),
        }
    }

    /// Appends an x-partition.
    pub fn partition(mut self, set: DigitSet) -> Self {
        self.partitions.push(set);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn radix(&self) -> Radix {
        self.radix
    }

    pub const fn operation(&self) -> Operation {
        self.operation
    }

    pub fn partitions(&self) -> &[DigitSet] {
        &self.partitions
    }

    /// The partition covering column `x`, if any.
    pub fn partition_of(&self, x: i64) -> Option<&DigitSet> {
        self.partitions.iter().find(|p| p.applies_to(x))
    }

    /// All covered columns, ascending.
    pub fn columns(&self) -> Vec<i64> {
        let mut xs: Vec<i64> = self
            .partitions
            .iter()
            .flat_map(|p| p.x_values.iter().copied())
            .collect();
        xs.sort_unstable();
        xs.dedup();
        xs
    }

    /// Checks the table's structure against `grid`.
    ///
    /// Reports the first defect found; nothing is evaluated.
    pub fn validate(&self, grid: &Grid) -> Result<(), TableError> {
        let mut names = HashSet::new();
        let mut owner: BTreeMap<i64, &str> = BTreeMap::new();

        for part in &self.partitions {
            if !names.insert(part.name.as_str()) {
                return Err(TableError::DuplicatePartition(part.name.clone()));
            }
            if part.x_values.is_empty() {
                return Err(TableError::EmptyPartition(part.name.clone()));
            }
            if part.rules.is_empty() {
                return Err(TableError::NoRules(part.name.clone()));
            }

            for &x in &part.x_values {
                if !grid.x().contains(x) {
                    return Err(TableError::ValueOutsideGrid {
                        partition: part.name.clone(),
                        x,
                    });
                }
                if let Some(first) = owner.insert(x, part.name.as_str()) {
                    return Err(TableError::SharedColumn {
                        x,
                        first: first.to_string(),
                        second: part.name.clone(),
                    });
                }
            }

            let mut seen = HashSet::new();
            for rule in &part.rules {
                if !self.radix.contains(rule.digit) {
                    return Err(TableError::DigitOutOfRange {
                        partition: part.name.clone(),
                        digit: rule.digit,
                        radix: self.radix.value(),
                    });
                }
                if !seen.insert(rule.digit) {
                    return Err(TableError::DuplicateDigit {
                        partition: part.name.clone(),
                        digit: rule.digit,
                    });
                }
            }
        }
        Ok(())
    }

    /// Multi-line description of every partition and rule tree.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} ({} {})",
            self.name, self.radix, self.operation
        );
        for part in &self.partitions {
            let (lo, hi) = (
                part.x_values.iter().min().copied().unwrap_or_default(),
                part.x_values.iter().max().copied().unwrap_or_default(),
            );
            let _ = writeln!(out, "{}: x in [{}, {}]", part.name, lo, hi);
            for rule in &part.rules {
                let _ = writeln!(out, "  digit {}", rule.digit);
                out.push_str(&rule.predicate.render_tree(2));
            }
        }
        out
    }
}

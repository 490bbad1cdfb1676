//! End-to-end derivation of disjoint digit-selection tables.
//!
//! [`derive`] validates a [`DigitTable`], evaluates it on a [`Grid`], reads
//! every covered column into spans and removes the overlaps. Each column
//! succeeds or fails on its own; the [`SelectionTable`] keeps both kinds so
//! a caller can tell a complete table from a partial one.

use std::collections::BTreeMap;

use log::{debug, info, warn};

use crate::grid::Grid;
use crate::region::evaluate;
use crate::span::{remove_overlaps, ColumnSpans, MalformedTable};
use crate::table::{DigitTable, Operation, Radix};
use crate::Digit;

mod error;
mod variant;


pub use error::SelectionError;
pub use variant::Variant;

/// Outcome of one derivation: resolved spans or the defect, per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTable {
    name: String,
    radix: Radix,
    operation: Operation,
    grid: Grid,
    raw: BTreeMap<i64, ColumnSpans>,
    columns: BTreeMap<i64, Result<ColumnSpans, MalformedTable>>,
}

impl SelectionTable {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn radix(&self) -> Radix {
        self.radix
    }

    pub const fn operation(&self) -> Operation {
        self.operation
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of columns covered by the table.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// True when every column was resolved.
    pub fn is_complete(&self) -> bool {
        self.columns.values().all(Result::is_ok)
    }

    /// Per-column results, ascending by `x`.
    pub fn columns(&self) -> impl Iterator<Item = (i64, &Result<ColumnSpans, MalformedTable>)> + '_ {
        self.columns.iter().map(|(&x, r)| (x, r))
    }

    pub fn column(&self, x: i64) -> Option<&Result<ColumnSpans, MalformedTable>> {
        self.columns.get(&x)
    }

    /// Spans of column `x` before overlap removal, if they could be read.
    pub fn raw_column(&self, x: i64) -> Option<&ColumnSpans> {
        self.raw.get(&x)
    }

    /// Resolved columns only.
    pub fn resolved(&self) -> impl Iterator<Item = &ColumnSpans> + '_ {
        self.columns.values().filter_map(|r| r.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &MalformedTable> + '_ {
        self.columns.values().filter_map(|r| r.as_ref().err())
    }

    /// The digit selected at `(x, t)`, or `None` outside every resolved span.
    pub fn digit_at(&self, x: i64, t: i64) -> Option<Digit> {
        match self.columns.get(&x)? {
            Ok(column) => column.digit_at(t),
            Err(_) => None,
        }
    }

    /// Every `(x, t, digit)` of the resolved columns, ascending by `x` then
    /// descending by `t`.
    pub fn selected_points(&self) -> impl Iterator<Item = (i64, i64, Digit)> + '_ {
        self.resolved().flat_map(|column| {
            let x = column.x();
            column
                .spans()
                .iter()
                .flat_map(move |s| s.span.values().rev().map(move |t| (x, t, s.digit)))
        })
    }

    /// Resolved columns keyed by `x`, or every failure.
    pub fn into_complete(self) -> Result<BTreeMap<i64, ColumnSpans>, SelectionError> {
        let total = self.columns.len();
        let mut resolved = BTreeMap::new();
        let mut failures = Vec::new();
        for (x, result) in self.columns {
            match result {
                Ok(column) => {
                    resolved.insert(x, column);
                }
                Err(e) => failures.push(e),
            }
        }
        if failures.is_empty() {
            Ok(resolved)
        } else {
            Err(SelectionError::Incomplete { total, failures })
        }
    }
}

/// Derives the disjoint selection table of `table` on `grid`.
///
/// Fails early only when the table itself is structurally invalid; column
/// defects are recorded in the result.
pub fn derive(grid: &Grid, table: &DigitTable) -> Result<SelectionTable, SelectionError> {
    table.validate(grid)?;
    let map = evaluate(grid, table);

    let mut raw = BTreeMap::new();
    let mut columns = BTreeMap::new();
    for &x in map.columns() {
        let result = ColumnSpans::extract(&map, x).and_then(|spans| {
            let resolved = remove_overlaps(&spans);
            raw.insert(x, spans);
            resolved
        });
        match &result {
            Ok(column) => debug!("{}", column),
            Err(e) => warn!("{}: {}", table.name(), e),
        }
        columns.insert(x, result);
    }

    let selection = SelectionTable {
        name: table.name().to_string(),
        radix: table.radix(),
        operation: table.operation(),
        grid: *grid,
        raw,
        columns,
    };
    info!(
        "Derived {}: {} columns, {} malformed",
        selection.name,
        selection.len(),
        selection.failures().count()
    );
    Ok(selection)
}

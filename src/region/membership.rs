//! Region Evaluator: which digits hold at every grid point.

use std::collections::BTreeMap;

use log::debug;

use crate::grid::{Grid, GridMask};
use crate::table::{DigitTable, Radix};
use crate::Digit;

/// How many digits hold at one point, and which.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointClass {
    /// No digit holds.
    Undefined,
    Unique(Digit),
    /// Two value-adjacent digits hold; either is a valid choice.
    Redundant { upper: Digit, lower: Digit },
    /// Two non-adjacent digits, or three or more. Ascending.
    Conflict(Vec<Digit>),
}

impl PointClass {
    fn from_digits(digits: &[Digit]) -> Self {
        match *digits {
            [] => PointClass::Undefined,
            [d] => PointClass::Unique(d),
            [lower, upper] if upper - lower == 1 => PointClass::Redundant { upper, lower },
            _ => PointClass::Conflict(digits.to_vec()),
        }
    }

    /// At least one digit holds and the choice is unambiguous or redundant.
    pub fn is_selectable(&self) -> bool {
        matches!(self, PointClass::Unique(_) | PointClass::Redundant { .. })
    }
}

/// Per-digit membership masks over one grid.
///
/// Every digit of the table's radix has a mask, possibly empty. Points in
/// columns no partition covers are never set.
#[derive(Debug, Clone)]
pub struct MembershipMap {
    grid: Grid,
    radix: Radix,
    columns: Vec<i64>,
    masks: BTreeMap<Digit, GridMask>,
}

impl MembershipMap {
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn radix(&self) -> Radix {
        self.radix
    }

    /// Columns covered by some partition, ascending.
    pub fn columns(&self) -> &[i64] {
        &self.columns
    }

    pub fn mask(&self, digit: Digit) -> Option<&GridMask> {
        self.masks.get(&digit)
    }

    /// `(digit, mask)` pairs, ascending by digit.
    pub fn masks(&self) -> impl Iterator<Item = (Digit, &GridMask)> + '_ {
        self.masks.iter().map(|(&d, m)| (d, m))
    }

    /// Digits holding at `(x, t)`, ascending.
    pub fn digits_at(&self, x: i64, t: i64) -> Vec<Digit> {
        match self.grid.index(x, t) {
            Some(i) => self
                .masks
                .iter()
                .filter(|(_, m)| m.get(i))
                .map(|(&d, _)| d)
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn classify(&self, x: i64, t: i64) -> PointClass {
        PointClass::from_digits(&self.digits_at(x, t))
    }

    /// Union of all digit masks.
    pub fn covered(&self) -> GridMask {
        let mut union = GridMask::empty(&self.grid);
        for mask in self.masks.values() {
            union.or_assign(mask);
        }
        union
    }

    /// Ascending `t` values where `digit` holds in column `x`.
    pub fn column_of(&self, digit: Digit, x: i64) -> Vec<i64> {
        self.masks
            .get(&digit)
            .map(|m| m.column(&self.grid, x).collect())
            .unwrap_or_default()
    }
}

/// Evaluates every rule of `table` on the columns its partition covers.
///
/// Nothing is reported for undefined points; use [`MembershipMap::classify`]
/// or the column extraction in [`crate::span`] to diagnose them. Partition
/// values outside the grid are skipped.
pub fn evaluate(grid: &Grid, table: &DigitTable) -> MembershipMap {
    let mut masks: BTreeMap<Digit, GridMask> = table
        .radix()
        .digits()
        .map(|d| (d, GridMask::empty(grid)))
        .collect();

    for partition in table.partitions() {
        for &x in partition.x_values() {
            if !grid.x().contains(x) {
                continue;
            }
            for rule in partition.rules() {
                let mask = masks
                    .entry(rule.digit)
                    .or_insert_with(|| GridMask::empty(grid));
                for t in grid.t().values() {
                    if rule.holds(x, t) {
                        if let Some(i) = grid.index(x, t) {
                            mask.set(i);
                        }
                    }
                }
            }
        }
    }

    let columns: Vec<i64> = table
        .columns()
        .into_iter()
        .filter(|&x| grid.x().contains(x))
        .collect();

    debug!(
        "Evaluated {} over {} columns: {}",
        table.name(),
        columns.len(),
        masks
            .iter()
            .map(|(d, m)| format!("{}:{}", d, m.count()))
            .collect::<Vec<_>>()
            .join(" ")
    );

    MembershipMap {
        grid: *grid,
        radix: table.radix(),
        columns,
        masks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridConfig;
    use crate::predicate::LinearForm;
    use crate::table::{builtin, DigitSet, Operation};

    fn division() -> (Grid, MembershipMap) {
        let grid = GridConfig::radix4_division().build().unwrap();
        let map = evaluate(&grid, &builtin::radix4_division(&grid));
        (grid, map)
    }

    #[test]
    fn every_digit_has_a_mask() {
        let (_, map) = division();
        assert_eq!(map.masks().map(|(d, _)| d).collect::<Vec<_>>(), vec![-2, -1, 0, 1, 2]);
        assert_eq!(map.radix(), Radix::Four);
    }

    #[test]
    fn uncovered_columns_stay_empty() {
        let (grid, map) = division();
        assert!(map.digits_at(0, 0).is_empty());
        assert_eq!(map.classify(-8, 0), PointClass::Undefined);
        assert!(!map.covered().contains(&grid, 7, 0));
        assert_eq!(map.columns().len(), 16);
    }

    #[test]
    fn classify_points() {
        let (_, map) = division();
        assert_eq!(map.classify(8, 30), PointClass::Unique(2));
        assert_eq!(
            map.classify(8, 24),
            PointClass::Redundant { upper: 2, lower: 1 }
        );
        assert_eq!(
            map.classify(8, -8),
            PointClass::Redundant { upper: 0, lower: -1 }
        );
        // above the topmost digit
        assert_eq!(map.classify(8, 100), PointClass::Undefined);
        assert!(!map.classify(8, 100).is_selectable());
    }

    #[test]
    fn column_of_lists_t_values() {
        let (_, map) = division();
        let ts = map.column_of(2, 8);
        assert_eq!(ts.first(), Some(&24));
        assert_eq!(ts.last(), Some(&47));
        assert_eq!(ts.len(), 24);
        assert!(map.column_of(2, 0).is_empty());
    }

    #[test]
    fn conflicts_are_reported() {
        let grid = GridConfig::radix2_square_root().build().unwrap();
        let t = LinearForm::t();
        let table = DigitTable::new("overlapping", Radix::Two, Operation::SquareRoot).partition(
            DigitSet::new("s", [2])
                .rule(1, t.ge(LinearForm::from(0)))
                .rule(0, t.ge(LinearForm::from(0)))
                .rule(-1, t.ge(LinearForm::from(5))),
        );
        let map = evaluate(&grid, &table);
        assert_eq!(map.classify(2, 0), PointClass::Redundant { upper: 1, lower: 0 });
        assert_eq!(map.classify(2, 5), PointClass::Conflict(vec![-1, 0, 1]));
        assert_eq!(map.classify(2, -1), PointClass::Undefined);
    }

    #[test]
    fn non_adjacent_pair_is_a_conflict() {
        assert_eq!(
            PointClass::from_digits(&[-1, 1]),
            PointClass::Conflict(vec![-1, 1])
        );
    }
}

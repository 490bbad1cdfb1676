//! Reference digit tables.
//!
//! Bounds are written in grid units: `x` is the scaled operand estimate
//! (divisor `D` or partial root `S`) and `t` the scaled partial-remainder
//! estimate. Each table derives its partitions from the grid it is built
//! for, so the same rules work on any grid whose x axis has the expected
//! shape.

use super::digit_set::{DigitSet, DigitTable};
use super::radix::{Operation, Radix};
use crate::grid::Grid;
use crate::predicate::{Inequality, LinearForm, PredicateNode, Rational};

fn third(n: i64) -> Rational {
    Rational::new(n, 3)
}

/// `lo` and `hi` together.
fn band(lo: Inequality, hi: Inequality) -> PredicateNode {
    PredicateNode::all([lo, hi])
}

/// `band` restricted by extra conditions on `x`.
fn guarded(
    guard: impl IntoIterator<Item = Inequality>,
    lo: Inequality,
    hi: Inequality,
) -> PredicateNode {
    PredicateNode::all(guard.into_iter().chain([lo, hi]))
}

/// Radix-4 SRT division over a two's-complement divisor estimate.
///
/// Normalized divisors have `|D| >= 1/2`: the positive partition is
/// `max/2 + 1/2 ..= max` and the negative one `min ..= min/2 - 1`. The
/// negative rules mirror the positive ones under `x -> -1 - x`.
pub fn radix4_division(grid: &Grid) -> DigitTable {
    let x = LinearForm::x();
    let t = LinearForm::t();
    let (min, max) = (grid.x().min(), grid.x().max());

    let positive = DigitSet::new("positive_x", (max + 1) / 2..=max)
        .rule(
            2,
            band(((x + 1) * third(8)).le(t), t.lt((x + 1) * third(16))),
        )
        .rule(
            1,
            band(((x + 1) * third(2)).le(t), t.le(x * third(10) - 2)),
        )
        .rule(0, band((x * third(-4)).le(t), t.le(x * third(4) - 2)))
        .rule(
            -1,
            band(
                (x * third(-10)).le(t),
                t.le((x + 1) * third(-2) - 2),
            ),
        )
        .rule(
            -2,
            band(
                ((x + 1) * third(-16) - 2).lt(t),
                t.le((x + 1) * third(-8) - 2),
            ),
        );

    let negative = DigitSet::new("negative_x", min..=min / 2 - 1)
        .rule(2, band((x * third(16) - 2).lt(t), t.le(x * third(8) - 2)))
        .rule(
            1,
            band(((x + 1) * third(10)).le(t), t.le(x * third(2) - 2)),
        )
        .rule(
            0,
            band(
                ((x + 1) * third(4)).le(t),
                t.le((x + 1) * third(-4) - 2),
            ),
        )
        .rule(
            -1,
            band(
                (x * third(-2)).le(t),
                t.le((x + 1) * third(-10) - 2),
            ),
        )
        .rule(-2, band((x * third(-8)).le(t), t.le(x * third(-16))));

    DigitTable::new("radix-4 division", Radix::Four, Operation::Division)
        .partition(positive)
        .partition(negative)
}

/// Radix-2 square root over a magnitude root estimate `1/2 <= S <= 1`.
///
/// The column `S = 1` cannot select `+1` and has its own bounds for `0`
/// and `-1`.
pub fn radix2_square_root(grid: &Grid) -> DigitTable {
    let x = LinearForm::x();
    let t = LinearForm::t();
    let top = grid.x().max();
    let below_top = x.le(LinearForm::from(top - 1));
    let at_top = [
        x.ge(LinearForm::from(top)),
        x.le(LinearForm::from(top)),
    ];

    let set = DigitSet::new("s", top / 2..=top)
        .rule(
            1,
            guarded(
                [below_top],
                LinearForm::from(0).le(t),
                t.lt((x + 1) * 4),
            ),
        )
        .rule(
            0,
            PredicateNode::any([
                guarded([below_top], ((x - 1) * -2).le(t), t.le(x * 2 - 2)),
                guarded(at_top, ((x - 1) * -2).le(t), t.le(LinearForm::from(-1))),
            ]),
        )
        .rule(
            -1,
            PredicateNode::any([
                guarded(
                    [below_top],
                    ((x + 1) * -4 - 2).lt(t),
                    t.le(LinearForm::from(-2)),
                ),
                guarded(at_top, (x * -4 - 2).lt(t), t.le(LinearForm::from(-2))),
            ]),
        );

    DigitTable::new("radix-2 square root", Radix::Two, Operation::SquareRoot).partition(set)
}

/// Radix-4 square root over a magnitude root estimate `1/2 <= S <= 1`.
///
/// Below the top column the positive digits share the division bounds;
/// the non-positive bounds are shifted by small fractions of `S` to keep
/// the partial remainder in range. At `S = 1` only `0, -1, -2` remain.
pub fn radix4_square_root(grid: &Grid) -> DigitTable {
    let x = LinearForm::x();
    let t = LinearForm::t();
    let top = grid.x().max();
    let below_top = x.le(LinearForm::from(top - 1));
    let at_top = [
        x.ge(LinearForm::from(top)),
        x.le(LinearForm::from(top)),
    ];

    let set = DigitSet::new("s", top / 2..=top)
        .rule(
            2,
            guarded(
                [below_top],
                ((x + 1) * third(8)).le(t),
                t.lt((x + 1) * third(16)),
            ),
        )
        .rule(
            1,
            guarded(
                [below_top],
                ((x + 1) * third(2)).le(t),
                t.le(x * third(10) - 2),
            ),
        )
        .rule(
            0,
            PredicateNode::any([
                guarded(
                    [below_top],
                    ((x - Rational::new(1, 48)) * third(-4)).le(t),
                    t.le(x * third(4) - 2),
                ),
                guarded(
                    at_top,
                    ((x - third(1)) * third(-4)).le(t),
                    t.le(LinearForm::from(-1)),
                ),
            ]),
        )
        .rule(
            -1,
            PredicateNode::any([
                guarded(
                    [below_top],
                    ((x - Rational::new(5, 96)) * third(-10)).le(t),
                    t.le((x + 1) * third(-2) - 2),
                ),
                guarded(
                    at_top,
                    ((x - Rational::new(5, 6)) * third(-10)).le(t),
                    t.le(x * third(-2) - 2),
                ),
            ]),
        )
        .rule(
            -2,
            PredicateNode::any([
                guarded(
                    [below_top],
                    ((x + 1) * third(-16) - 2).lt(t),
                    t.le((x + 1) * third(-8) - 2),
                ),
                guarded(
                    at_top,
                    (x * third(-16) - 2).lt(t),
                    t.le(x * third(-8) - 2),
                ),
            ]),
        );

    DigitTable::new("radix-4 square root", Radix::Four, Operation::SquareRoot).partition(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridConfig;
    use crate::Digit;

    /// Inclusive `t` range where `digit` holds in column `x`.
    fn raw_span(table: &DigitTable, grid: &Grid, x: i64, digit: Digit) -> Option<(i64, i64)> {
        let rule = table
            .partition_of(x)?
            .rules()
            .iter()
            .find(|r| r.digit == digit)?;
        let ts: Vec<i64> = grid.t().values().filter(|&t| rule.holds(x, t)).collect();
        Some((*ts.first()?, *ts.last()?))
    }

    #[test]
    fn builtins_validate() {
        let grid = GridConfig::radix4_division().build().unwrap();
        assert_eq!(radix4_division(&grid).validate(&grid), Ok(()));

        let grid = GridConfig::radix2_square_root().build().unwrap();
        assert_eq!(radix2_square_root(&grid).validate(&grid), Ok(()));

        let grid = GridConfig::radix4_square_root().build().unwrap();
        assert_eq!(radix4_square_root(&grid).validate(&grid), Ok(()));
    }

    #[test]
    fn division_partitions_follow_grid() {
        let grid = GridConfig::radix4_division().build().unwrap();
        let table = radix4_division(&grid);
        let columns = table.columns();
        assert_eq!(columns.first(), Some(&-16));
        assert_eq!(columns.len(), 16);
        assert!(table.partition_of(-9).is_some());
        assert!(table.partition_of(-8).is_none());
        assert!(table.partition_of(7).is_none());
        assert_eq!(table.partition_of(8).map(DigitSet::name), Some("positive_x"));
    }

    #[test]
    fn division_raw_bounds() {
        let grid = GridConfig::radix4_division().build().unwrap();
        let table = radix4_division(&grid);
        assert_eq!(raw_span(&table, &grid, 8, 2), Some((24, 47)));
        assert_eq!(raw_span(&table, &grid, 8, 1), Some((6, 24)));
        assert_eq!(raw_span(&table, &grid, 8, 0), Some((-10, 8)));
        assert_eq!(raw_span(&table, &grid, 8, -1), Some((-26, -8)));
        assert_eq!(raw_span(&table, &grid, 8, -2), Some((-49, -26)));
        assert_eq!(raw_span(&table, &grid, -9, 2), Some((-49, -26)));
        assert_eq!(raw_span(&table, &grid, -9, -2), Some((24, 48)));
    }

    #[test]
    fn radix2_root_top_column() {
        let grid = GridConfig::radix2_square_root().build().unwrap();
        let table = radix2_square_root(&grid);
        assert_eq!(raw_span(&table, &grid, 4, 1), None);
        assert_eq!(raw_span(&table, &grid, 4, 0), Some((-6, -1)));
        assert_eq!(raw_span(&table, &grid, 4, -1), Some((-17, -2)));
        assert_eq!(raw_span(&table, &grid, 2, 1), Some((0, 11)));
    }

    #[test]
    fn radix4_root_fractional_offsets() {
        let grid = GridConfig::radix4_square_root().build().unwrap();
        let table = radix4_square_root(&grid);
        assert_eq!(raw_span(&table, &grid, 9, 0), Some((-11, 10)));
        assert_eq!(raw_span(&table, &grid, 9, -1), Some((-29, -9)));
        assert_eq!(raw_span(&table, &grid, 16, 0), Some((-20, -1)));
        assert_eq!(raw_span(&table, &grid, 16, 2), None);
    }

    #[test]
    fn describe_mentions_every_partition() {
        let grid = GridConfig::radix4_division().build().unwrap();
        let text = radix4_division(&grid).describe();
        assert!(text.contains("positive_x: x in [8, 15]"));
        assert!(text.contains("negative_x: x in [-16, -9]"));
    }
}

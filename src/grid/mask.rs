//! Boolean masks over a [`Grid`].

use super::lattice::Grid;

/// One flag per grid point, in [`Grid`] storage order.
///
/// A mask does not carry its grid; callers pair it with the grid it was
/// created for. Binary operations require equal lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMask(Vec<bool>);

impl GridMask {
    /// All-false mask sized for `grid`.
    pub fn empty(grid: &Grid) -> Self {
        Self(vec![false; grid.len()])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no point is set.
    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|&b| b)
    }

    /// Number of set points.
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&b| b).count()
    }

    pub fn get(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    pub fn set(&mut self, index: usize) {
        self.0[index] = true;
    }

    /// Whether `(x, t)` is set; points outside the grid are never set.
    pub fn contains(&self, grid: &Grid, x: i64, t: i64) -> bool {
        grid.index(x, t).is_some_and(|i| self.get(i))
    }

    /// Pointwise AND.
    ///
    /// # Panics
    ///
    /// Panics if the masks have different lengths.
    pub fn and(&self, other: &GridMask) -> GridMask {
        assert_eq!(self.len(), other.len(), "GridMask length mismatch");
        GridMask(self.0.iter().zip(&other.0).map(|(&a, &b)| a && b).collect())
    }

    /// Pointwise OR, in place.
    ///
    /// # Panics
    ///
    /// Panics if the masks have different lengths.
    pub fn or_assign(&mut self, other: &GridMask) {
        assert_eq!(self.len(), other.len(), "GridMask length mismatch");
        for (a, &b) in self.0.iter_mut().zip(&other.0) {
            *a |= b;
        }
    }

    /// Set points as `(x, t)` pairs.
    pub fn points<'a>(&'a self, grid: &'a Grid) -> impl Iterator<Item = (i64, i64)> + 'a {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .map(move |(i, _)| grid.point(i))
    }

    /// Set `t` values of column `x`, ascending.
    pub fn column<'a>(&'a self, grid: &'a Grid, x: i64) -> impl Iterator<Item = i64> + 'a {
        grid.t()
            .values()
            .filter(move |&t| self.contains(grid, x, t))
    }
}

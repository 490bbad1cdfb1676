//! Integer axes and the dense rectangular lattice built from them.

use std::fmt::Display;
use std::ops::RangeInclusive;

use super::config::{AxisConfig, AxisKind};

/// One quantized axis: its configuration and the integer range it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axis {
    config: AxisConfig,
    min: i64,
    max: i64,
}

#[allow(clippy::len_without_is_empty)]
impl Axis {
    /// Derives the integer range of an already validated configuration.
    pub(crate) fn from_config(config: AxisConfig) -> Self {
        let half = 1i64 << (config.bits - 1);
        let (min, max) = match config.kind {
            AxisKind::TwosComplement => (-half, half - 1),
            AxisKind::Magnitude => (0, half),
        };
        Self { config, min, max }
    }

    pub const fn config(&self) -> AxisConfig {
        self.config
    }

    pub const fn min(&self) -> i64 {
        self.min
    }

    pub const fn max(&self) -> i64 {
        self.max
    }

    pub const fn len(&self) -> usize {
        (self.max - self.min + 1) as usize
    }

    pub fn values(&self) -> RangeInclusive<i64> {
        self.min..=self.max
    }

    pub const fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Real value of an integer code: `value / 2^fractional_bits`.
    pub fn to_real(&self, value: i64) -> f64 {
        value as f64 / (1u64 << self.config.fractional_bits) as f64
    }

    /// Fixed-point bit pattern of `value`, e.g. `"1.0110"` for `-10` on a
    /// 5.4 two's-complement axis.
    ///
    /// Negative values wrap to their two's-complement encoding. With no
    /// fractional bits the binary point is omitted.
    pub fn format_binary(&self, value: i64) -> String {
        let bits = self.config.bits as usize;
        let fractional = self.config.fractional_bits as usize;
        let encoded = if value < 0 {
            (1i64 << bits) + value
        } else {
            value
        };
        let digits = format!("{:0width$b}", encoded, width = bits);
        if fractional == 0 {
            return digits;
        }
        let split = digits.len() - fractional;
        format!("{}.{}", &digits[..split], &digits[split..])
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}] ({}.{} bits)",
            self.min,
            self.max,
            self.config.bits - self.config.fractional_bits,
            self.config.fractional_bits
        )
    }
}

/// Dense `(x, t)` lattice. Every integer pair inside both axis ranges is a
/// grid point; there are no holes.
///
/// Points are stored column-major: all `t` values of the lowest `x` come
/// first, so a column is a contiguous run of indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    x: Axis,
    t: Axis,
}

#[allow(clippy::len_without_is_empty)]
impl Grid {
    pub(crate) fn new(x: Axis, t: Axis) -> Self {
        Self { x, t }
    }

    pub const fn x(&self) -> &Axis {
        &self.x
    }

    pub const fn t(&self) -> &Axis {
        &self.t
    }

    /// Number of grid points.
    pub const fn len(&self) -> usize {
        self.x.len() * self.t.len()
    }

    pub const fn contains(&self, x: i64, t: i64) -> bool {
        self.x.contains(x) && self.t.contains(t)
    }

    /// Linear index of `(x, t)`, or `None` outside the grid.
    pub fn index(&self, x: i64, t: i64) -> Option<usize> {
        if !self.contains(x, t) {
            return None;
        }
        let column = (x - self.x.min) as usize;
        let row = (t - self.t.min) as usize;
        Some(column * self.t.len() + row)
    }

    /// Point at a linear index produced by [`Grid::index`].
    pub fn point(&self, index: usize) -> (i64, i64) {
        let rows = self.t.len();
        (
            self.x.min + (index / rows) as i64,
            self.t.min + (index % rows) as i64,
        )
    }

    /// All points in storage order.
    pub fn points(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.x
            .values()
            .flat_map(move |x| self.t.values().map(move |t| (x, t)))
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x {} × t {}", self.x, self.t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridConfig;

    fn division_grid() -> Grid {
        GridConfig::radix4_division().build().unwrap()
    }

    #[test]
    fn axis_ranges() {
        let grid = division_grid();
        assert_eq!(grid.x().min(), -16);
        assert_eq!(grid.x().max(), 15);
        assert_eq!(grid.x().len(), 32);
        assert_eq!(grid.t().len(), 256);
        assert_eq!(grid.len(), 32 * 256);
    }

    #[test]
    fn magnitude_axis_includes_one() {
        let grid = GridConfig::radix4_square_root().build().unwrap();
        assert_eq!(grid.x().values(), 0..=16);
        assert_eq!(grid.x().to_real(16), 1.0);
    }

    #[test]
    fn index_and_point_agree() {
        let grid = division_grid();
        for (i, (x, t)) in grid.points().enumerate() {
            assert_eq!(grid.index(x, t), Some(i));
            assert_eq!(grid.point(i), (x, t));
        }
    }

    #[test]
    fn index_outside_grid() {
        let grid = division_grid();
        assert_eq!(grid.index(16, 0), None);
        assert_eq!(grid.index(0, -129), None);
        assert_eq!(grid.index(-16, -128), Some(0));
    }

    #[test]
    fn format_binary_wraps_negatives() {
        let grid = division_grid();
        assert_eq!(grid.x().format_binary(-16), "1.0000");
        assert_eq!(grid.x().format_binary(-10), "1.0110");
        assert_eq!(grid.x().format_binary(8), "0.1000");
        assert_eq!(grid.t().format_binary(-1), "111.11111");
        assert_eq!(grid.t().format_binary(32), "001.00000");
    }

    #[test]
    fn format_binary_magnitude_top() {
        let grid = GridConfig::radix2_square_root().build().unwrap();
        assert_eq!(grid.x().format_binary(4), "1.00");
        assert_eq!(grid.x().format_binary(3), "0.11");
    }

    #[test]
    fn format_binary_without_fraction() {
        let axis = Axis::from_config(AxisConfig::twos_complement(4, 0));
        assert_eq!(axis.format_binary(-1), "1111");
        assert_eq!(axis.format_binary(5), "0101");
    }

    #[test]
    fn to_real_scales_by_fraction() {
        let grid = division_grid();
        assert_eq!(grid.x().to_real(8), 0.5);
        assert_eq!(grid.t().to_real(-48), -1.5);
    }
}

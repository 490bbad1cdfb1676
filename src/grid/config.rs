//! Bit-width configuration of the two grid axes.

use super::error::ConfigurationError;
use super::lattice::{Axis, Grid};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Widest axis accepted by [`GridConfig::build`].
pub const MAX_AXIS_BITS: u32 = 24;

/// Narrowest axis accepted by [`GridConfig::build`].
///
/// Partition bounds of the digit tables sit at `2^(bits-2)`, so anything
/// narrower has no room for them.
pub const MIN_AXIS_BITS: u32 = 2;

/// Most combined `x` and `t` bits accepted by [`GridConfig::build`].
///
/// Every digit needs a dense mask over the whole grid, so the point count
/// is bounded as well as each axis.
pub const MAX_GRID_BITS: u32 = 24;

/// How the integer range of an axis is derived from its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AxisKind {
    /// Signed two's-complement values `-(2^(bits-1)) ..= 2^(bits-1) - 1`.
    TwosComplement,
    /// Non-negative values `0 ..= 2^(bits-1)`; the top value is exactly 1.0.
    Magnitude,
}

/// Width and scaling of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisConfig {
    /// Total number of bits, sign bit included.
    pub bits: u32,
    /// Bits right of the binary point.
    pub fractional_bits: u32,
    pub kind: AxisKind,
}

impl AxisConfig {
    pub const fn twos_complement(bits: u32, fractional_bits: u32) -> Self {
        Self {
            bits,
            fractional_bits,
            kind: AxisKind::TwosComplement,
        }
    }

    pub const fn magnitude(bits: u32, fractional_bits: u32) -> Self {
        Self {
            bits,
            fractional_bits,
            kind: AxisKind::Magnitude,
        }
    }

    fn validate(&self, axis: &'static str) -> Result<(), ConfigurationError> {
        if self.bits == 0 {
            return Err(ConfigurationError::ZeroWidth { axis });
        }
        if self.bits < MIN_AXIS_BITS {
            return Err(ConfigurationError::TooNarrow {
                axis,
                bits: self.bits,
                min: MIN_AXIS_BITS,
            });
        }
        if self.bits > MAX_AXIS_BITS {
            return Err(ConfigurationError::TooWide {
                axis,
                bits: self.bits,
                max: MAX_AXIS_BITS,
            });
        }
        if self.fractional_bits > self.bits {
            return Err(ConfigurationError::FractionalExceedsWidth {
                axis,
                bits: self.bits,
                fractional_bits: self.fractional_bits,
            });
        }
        Ok(())
    }
}

/// Configuration of the `(x, t)` lattice a digit table is evaluated on.
///
/// `x` is the truncated divisor or partial-root estimate, `t` the truncated
/// scaled partial remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridConfig {
    pub x: AxisConfig,
    pub t: AxisConfig,
}

impl GridConfig {
    pub const fn new(x: AxisConfig, t: AxisConfig) -> Self {
        Self { x, t }
    }

    /// Radix-4 division: `D` as 5.4 bits, `T` as 8.5 bits.
    pub const fn radix4_division() -> Self {
        Self::new(
            AxisConfig::twos_complement(5, 4),
            AxisConfig::twos_complement(8, 5),
        )
    }

    /// Radix-2 square root: `S` as 3.2 bits, `T` as 6.2 bits.
    pub const fn radix2_square_root() -> Self {
        Self::new(AxisConfig::magnitude(3, 2), AxisConfig::twos_complement(6, 2))
    }

    /// Radix-4 square root: `S` as 5.4 bits, `T` as 8.4 bits.
    pub const fn radix4_square_root() -> Self {
        Self::new(AxisConfig::magnitude(5, 4), AxisConfig::twos_complement(8, 4))
    }

    /// Checks both axes and the total point count without building anything.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.x.validate("x")?;
        self.t.validate("t")?;
        let bits = self.x.bits + self.t.bits;
        if bits > MAX_GRID_BITS {
            return Err(ConfigurationError::GridTooLarge {
                bits,
                max: MAX_GRID_BITS,
            });
        }
        Ok(())
    }

    /// Validates the configuration and builds the dense grid it describes.
    pub fn build(&self) -> Result<Grid, ConfigurationError> {
        self.validate()?;
        Ok(Grid::new(Axis::from_config(self.x), Axis::from_config(self.t)))
    }
}

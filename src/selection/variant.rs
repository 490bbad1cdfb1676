use std::fmt::Display;

use super::{derive, SelectionError, SelectionTable};
use crate::grid::{Grid, GridConfig};
use crate::table::{builtin, DigitTable};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The reference designs: a grid configuration and its built-in table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Variant {
    Radix4Division,
    Radix2SquareRoot,
    Radix4SquareRoot,
}

impl Variant {
    pub const ALL: [Variant; 3] = [
        Variant::Radix4Division,
        Variant::Radix2SquareRoot,
        Variant::Radix4SquareRoot,
    ];

    pub const fn config(&self) -> GridConfig {
        match self {
            Variant::Radix4Division => GridConfig::radix4_division(),
            Variant::Radix2SquareRoot => GridConfig::radix2_square_root(),
            Variant::Radix4SquareRoot => GridConfig::radix4_square_root(),
        }
    }

    pub fn table(&self, grid: &Grid) -> DigitTable {
        match self {
            Variant::Radix4Division => builtin::radix4_division(grid),
            Variant::Radix2SquareRoot => builtin::radix2_square_root(grid),
            Variant::Radix4SquareRoot => builtin::radix4_square_root(grid),
        }
    }

    /// Builds the reference grid and derives the table on it.
    pub fn derive(&self) -> Result<SelectionTable, SelectionError> {
        let grid = self.config().build()?;
        derive(&grid, &self.table(&grid))
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Radix4Division => write!(f, "radix-4 division"),
            Variant::Radix2SquareRoot => write!(f, "radix-2 square root"),
            Variant::Radix4SquareRoot => write!(f, "radix-4 square root"),
        }
    }
}

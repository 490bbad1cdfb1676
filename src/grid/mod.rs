//! Quantized `(x, t)` grids.
//!
//! A [`GridConfig`] describes the bit widths of the operand-estimate axis
//! `x` (divisor `D` or partial root `S`) and of the scaled partial remainder
//! `t`. [`GridConfig::build`] validates it and produces the dense [`Grid`]
//! every digit table is evaluated on. Nothing here is global: each
//! derivation builds its own grid.

mod config;
mod error;
mod lattice;
mod mask;

pub use config::{AxisConfig, AxisKind, GridConfig, MAX_AXIS_BITS, MAX_GRID_BITS, MIN_AXIS_BITS};
pub use error::ConfigurationError;
pub use lattice::{Axis, Grid};
pub use mask::GridMask;

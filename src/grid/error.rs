use thiserror::Error;

/// Inconsistent bit-width parameters, reported before any grid is built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Axis {axis} has zero width")]
    ZeroWidth { axis: &'static str },

    #[error("Axis {axis} is {bits} bits wide, at least {min} are required")]
    TooNarrow {
        axis: &'static str,
        bits: u32,
        min: u32,
    },

    #[error("Axis {axis} is {bits} bits wide, at most {max} are supported")]
    TooWide {
        axis: &'static str,
        bits: u32,
        max: u32,
    },

    #[error("Axis {axis} has {fractional_bits} fractional bits but is only {bits} bits wide")]
    FractionalExceedsWidth {
        axis: &'static str,
        bits: u32,
        fractional_bits: u32,
    },

    #[error("Grid needs {bits} bits of points, at most {max} are supported")]
    GridTooLarge { bits: u32, max: u32 },
}

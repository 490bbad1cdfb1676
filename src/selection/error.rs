use thiserror::Error;

use crate::grid::ConfigurationError;
use crate::span::MalformedTable;
use crate::table::TableError;

/// Everything that can stop a derivation, or make its result partial.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Invalid grid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Invalid digit table: {0}")]
    Table(#[from] TableError),

    #[error("{} of {total} columns are malformed", .failures.len())]
    Incomplete {
        total: usize,
        failures: Vec<MalformedTable>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        let e: SelectionError = ConfigurationError::ZeroWidth { axis: "x" }.into();
        assert_eq!(e.to_string(), "Invalid grid configuration: Axis x has zero width");

        let e: SelectionError = TableError::NoRules("s".to_string()).into();
        assert!(matches!(e, SelectionError::Table(_)));
    }

    #[test]
    fn incomplete_display() {
        let e = SelectionError::Incomplete {
            total: 16,
            failures: vec![
                MalformedTable::EmptyColumn { x: 3 },
                MalformedTable::NoDigit { x: 4, t: 0 },
            ],
        };
        assert_eq!(e.to_string(), "2 of 16 columns are malformed");
    }
}

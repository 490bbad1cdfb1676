use thiserror::Error;

use crate::Digit;

/// Structural defects of a digit table, detected before any evaluation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Partition name used twice: {0}")]
    DuplicatePartition(String),

    #[error("Partition {0} has no x values")]
    EmptyPartition(String),

    #[error("Partition {0} has no digit rules")]
    NoRules(String),

    #[error("Partition {partition} lists x = {x}, which is outside the grid")]
    ValueOutsideGrid { partition: String, x: i64 },

    #[error("Column x = {x} is claimed by both {first} and {second}")]
    SharedColumn {
        x: i64,
        first: String,
        second: String,
    },

    #[error("Partition {partition} uses digit {digit}, outside the radix-{radix} digit set")]
    DigitOutOfRange {
        partition: String,
        digit: Digit,
        radix: u32,
    },

    #[error("Partition {partition} lists digit {digit} twice")]
    DuplicateDigit { partition: String, digit: Digit },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_column_display() {
        let e = TableError::SharedColumn {
            x: -9,
            first: "negative_x".to_string(),
            second: "positive_x".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Column x = -9 is claimed by both negative_x and positive_x"
        );
    }

    #[test]
    fn digit_out_of_range_display() {
        let e = TableError::DigitOutOfRange {
            partition: "s".to_string(),
            digit: 2,
            radix: 2,
        };
        assert!(e.to_string().contains("radix-2"));
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the internal self-consistency checks.
//!
//! There is no untrusted input anywhere in this program, so there is no
//! recoverable-error taxonomy. The only failures are the two arithmetic
//! cross-checks; each one indicates a defect in the implementation itself
//! and is fatal at the binary boundary.

use num::BigUint;
use std::error::Error;
use std::fmt;

/// A failed self-consistency check.
///
/// Both variants carry the expected and computed values so the diagnostic
/// pinpoints how far off the arithmetic was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyFailure {
    /// The binomial table entries did not sum to 2^column_size.
    BinomialSumMismatch {
        column_size: usize,
        expected: BigUint,
        actual: BigUint,
    },

    /// The combined residue totals did not sum to 2^(MODULUS * column_size),
    /// i.e. the enumeration lost or double-counted subsets.
    GrandTotalMismatch {
        column_size: usize,
        expected: BigUint,
        actual: BigUint,
    },
}

impl fmt::Display for ConsistencyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsistencyFailure::BinomialSumMismatch {
                column_size,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "binomial table for column size {} sums to {}, expected {}",
                    column_size, actual, expected
                )
            }
            ConsistencyFailure::GrandTotalMismatch {
                column_size,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "residue totals for column size {} sum to {}, expected {}",
                    column_size, actual, expected
                )
            }
        }
    }
}

impl Error for ConsistencyFailure {}

#[cfg(test)]
mod tests {
    use super::*;
    use num::One;

    #[test]
    fn test_display_names_the_failed_check() {
        let failure = ConsistencyFailure::BinomialSumMismatch {
            column_size: 4,
            expected: BigUint::one() << 4usize,
            actual: BigUint::one(),
        };
        assert_eq!(
            failure.to_string(),
            "binomial table for column size 4 sums to 1, expected 16"
        );
    }
}

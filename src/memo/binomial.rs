// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact binomial coefficient table.
//!
//! Computes C(k, n) for k = 0..n by the multiplicative recurrence
//!
//! ```text
//! C(0) = 1
//! C(k) = C(k-1) * (n - k + 1) / k
//! ```
//!
//! in arbitrary-precision integer arithmetic. Every division in the
//! recurrence is exact: C(k-1) * (n - k + 1) equals C(k) * k, so each step
//! is an integer operation with no rounding anywhere.
//!
//! # Verification
//!
//! The table is only handed out after its entries have been summed and
//! compared against 2^n (the subsets of an n-element set, partitioned by
//! size). A mismatch means the recurrence implementation is defective and
//! construction fails with [`ConsistencyFailure::BinomialSumMismatch`].
//!
//! # Memory
//!
//! n + 1 heap-allocated integers; the middle coefficients of C(k, 400) run
//! to about 120 decimal digits, so the whole table stays in the tens of
//! kilobytes.

use crate::errors::ConsistencyFailure;
use num::{BigUint, One, Zero};

/// Immutable table of the binomial coefficients C(k, column_size).
///
/// Part of the MEMO tier: built once, read-only thereafter.
#[derive(Debug, Clone)]
pub struct BinomialTable {
    column_size: usize,
    coefficients: Vec<BigUint>,
    sum: BigUint,
}

impl BinomialTable {
    /// Build and verify the table for one column of `column_size` numbers.
    ///
    /// Fails with [`ConsistencyFailure::BinomialSumMismatch`] if the entries
    /// do not sum to 2^column_size exactly.
    pub fn build(column_size: usize) -> Result<Self, ConsistencyFailure> {
        let mut coefficients = Vec::with_capacity(column_size + 1);

        let mut accum = BigUint::one();
        coefficients.push(accum.clone());
        for k in 1..=column_size {
            let numerator = BigUint::from(column_size - k + 1);
            let denominator = BigUint::from(k);
            // exact: the running product is always a multiple of k here
            accum = &accum * numerator / denominator;
            coefficients.push(accum.clone());
        }

        let sum = coefficients
            .iter()
            .fold(BigUint::zero(), |total, coefficient| total + coefficient);
        let expected = BigUint::one() << column_size;
        if sum != expected {
            return Err(ConsistencyFailure::BinomialSumMismatch {
                column_size,
                expected,
                actual: sum,
            });
        }

        log::debug!(
            "binomial table built: {} entries, largest {} decimal digits",
            coefficients.len(),
            coefficients[column_size / 2].to_string().len()
        );

        Ok(Self {
            column_size,
            coefficients,
            sum,
        })
    }

    /// The column height n this table was built for.
    pub fn column_size(&self) -> usize {
        self.column_size
    }

    /// Number of entries (column_size + 1).
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// C(k, column_size).
    pub fn get(&self, k: usize) -> &BigUint {
        &self.coefficients[k]
    }

    /// All entries in order of k.
    pub fn entries(&self) -> impl Iterator<Item = &BigUint> {
        self.coefficients.iter()
    }

    /// The verified total, 2^column_size.
    pub fn sum(&self) -> &BigUint {
        &self.sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_table_matches_pascal_row() {
        let table = BinomialTable::build(10).unwrap();
        let row = [1u32, 10, 45, 120, 210, 252, 210, 120, 45, 10, 1];
        assert_eq!(table.len(), row.len());
        for (k, expected) in row.iter().enumerate() {
            assert_eq!(table.get(k), &BigUint::from(*expected), "C({}, 10)", k);
        }
    }

    #[test]
    fn test_single_row_column() {
        let table = BinomialTable::build(1).unwrap();
        assert_eq!(table.get(0), &BigUint::one());
        assert_eq!(table.get(1), &BigUint::one());
        assert_eq!(table.sum(), &BigUint::from(2u32));
    }

    #[test]
    fn test_full_table_is_symmetric() {
        let table = BinomialTable::build(400).unwrap();
        for k in 0..table.len() {
            assert_eq!(table.get(k), table.get(400 - k), "C({}, 400)", k);
        }
    }

    #[test]
    fn test_full_table_sums_to_power_of_two() {
        let table = BinomialTable::build(400).unwrap();
        assert_eq!(table.sum(), &(BigUint::one() << 400usize));
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Column-residue matrix.
//!
//! One residue column holds `column_size` numbers that are all congruent to
//! some r mod 5. Selecting exactly k of them contributes k*r mod 5 to the
//! subset sum, and there are C(k, column_size) ways to do it. Binning the
//! binomial table by that contribution gives, per base residue r, the count
//! of column subsets producing each contribution residue c:
//!
//! ```text
//! matrix[r][c] = sum over { C(k, column_size) : k*r = c (mod 5) }
//! ```
//!
//! Each row partitions all 2^column_size subsets of its column, so every
//! row sums to 2^column_size. The five rows correspond exactly to the five
//! residue classes that partition {1,...,5*column_size}; which literal
//! values land in which class never enters the arithmetic.

use crate::constants::MODULUS;
use crate::memo::BinomialTable;
use num::{BigUint, Zero};
use std::array;

/// Immutable 5x5 grid of column subset counts, indexed by
/// [base residue][contribution residue].
///
/// Part of the MEMO tier: built once from a verified [`BinomialTable`],
/// read-only thereafter.
#[derive(Debug, Clone)]
pub struct ResidueMatrix {
    column_size: usize,
    cells: [[BigUint; MODULUS]; MODULUS],
}

impl ResidueMatrix {
    /// Bin the binomial table by contribution residue, one row per base
    /// residue 0..MODULUS.
    ///
    /// Pure arithmetic over an already-verified table; cannot fail.
    pub fn build(binomial: &BinomialTable) -> Self {
        let mut cells: [[BigUint; MODULUS]; MODULUS] =
            array::from_fn(|_| array::from_fn(|_| BigUint::zero()));

        for residue in 0..MODULUS {
            for (k, ways) in binomial.entries().enumerate() {
                let contribution = (k * residue) % MODULUS;
                cells[residue][contribution] += ways;
            }
        }

        log::debug!(
            "residue matrix built from {} binomial entries per row",
            binomial.len()
        );

        Self {
            column_size: binomial.column_size(),
            cells,
        }
    }

    /// The column height the underlying binomial table was built for.
    pub fn column_size(&self) -> usize {
        self.column_size
    }

    /// Count of subsets of a residue-`row` column contributing
    /// `contribution` mod 5 to the sum.
    pub fn get(&self, row: usize, contribution: usize) -> &BigUint {
        &self.cells[row][contribution]
    }

    /// Per-row totals. Every row covers all subsets of one column, so each
    /// total must equal 2^column_size; exposed so that property can be
    /// checked independently of the grand-total verification.
    pub fn row_sums(&self) -> [BigUint; MODULUS] {
        array::from_fn(|row| {
            self.cells[row]
                .iter()
                .fold(BigUint::zero(), |total, cell| total + cell)
        })
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable, accumulated during combination).
//!
//! - [`ResidueTotals`] - subset counts indexed by final sum residue
//! - [`statistics`] - counters describing the enumeration

pub mod statistics;

use crate::constants::MODULUS;
use crate::errors::ConsistencyFailure;
use num::{BigUint, One, Zero};
use std::array;

/// Subset counts of the full set, indexed by sum residue 0..MODULUS.
///
/// Accumulated by the cross-column combiner; after a full run the entries
/// partition all 2^(MODULUS * column_size) subsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidueTotals {
    totals: [BigUint; MODULUS],
}

impl ResidueTotals {
    /// All-zero totals, ready for accumulation.
    pub fn new() -> Self {
        Self {
            totals: array::from_fn(|_| BigUint::zero()),
        }
    }

    /// Add `count` subsets whose sums share `residue`.
    pub fn add(&mut self, residue: usize, count: BigUint) {
        self.totals[residue] += count;
    }

    /// Count of subsets with sum congruent to `residue`.
    pub fn get(&self, residue: usize) -> &BigUint {
        &self.totals[residue]
    }

    /// Count of subsets whose sum is divisible by MODULUS - the answer.
    pub fn divisible_count(&self) -> &BigUint {
        &self.totals[0]
    }

    /// Sum over all residues.
    pub fn grand_total(&self) -> BigUint {
        self.totals
            .iter()
            .fold(BigUint::zero(), |total, entry| total + entry)
    }

    /// Check that the entries cover every subset of {1,...,MODULUS *
    /// column_size} exactly once, i.e. sum to 2^(MODULUS * column_size).
    pub fn verify(&self, column_size: usize) -> Result<(), ConsistencyFailure> {
        let expected = BigUint::one() << (MODULUS * column_size);
        let actual = self.grand_total();
        if actual != expected {
            return Err(ConsistencyFailure::GrandTotalMismatch {
                column_size,
                expected,
                actual,
            });
        }
        Ok(())
    }
}

impl Default for ResidueTotals {
    fn default() -> Self {
        Self::new()
    }
}

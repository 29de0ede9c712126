// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compute context combining MEMO and DYNAMIC state.
//!
//! The [`ComputeContext`] is the core data structure that combines:
//! - Tier 1 (MEMO): immutable precomputed tables
//! - Tier 2 (DYNAMIC): the mutable residue totals and statistics
//!
//! There are no globals: the tables are explicitly constructed values,
//! passed by reference into the aggregation and combination code.

use crate::combine;
use crate::errors::ConsistencyFailure;
use crate::memo::{BinomialTable, ResidueMatrix};
use crate::state::statistics::Statistics;
use crate::state::ResidueTotals;
use num::BigUint;

/// Immutable precomputed tables (Tier 1: MEMO).
///
/// Built once at context creation and never mutated afterwards. Both tables
/// derive from the column height alone; construction verifies the binomial
/// sum before the matrix is derived from it.
#[derive(Debug, Clone)]
pub struct MemoizedTables {
    /// C(k, column_size) for k = 0..column_size, verified against
    /// 2^column_size.
    binomial: BinomialTable,

    /// Per-column subset counts binned by contribution residue.
    column_sums: ResidueMatrix,
}

impl MemoizedTables {
    /// Build both tables for columns of `column_size` numbers.
    ///
    /// Fails with [`ConsistencyFailure::BinomialSumMismatch`] if the
    /// binomial recurrence produced an inconsistent table.
    pub fn new(column_size: usize) -> Result<Self, ConsistencyFailure> {
        let binomial = BinomialTable::build(column_size)?;
        log::info!(
            "binomial table ready ({} entries, sum verified)",
            binomial.len()
        );

        let column_sums = ResidueMatrix::build(&binomial);
        log::info!("column-residue matrix ready");

        Ok(Self {
            binomial,
            column_sums,
        })
    }

    pub fn binomial(&self) -> &BinomialTable {
        &self.binomial
    }

    pub fn column_sums(&self) -> &ResidueMatrix {
        &self.column_sums
    }
}

/// Everything one full computation needs: the MEMO tables plus the DYNAMIC
/// accumulation state.
#[derive(Debug)]
pub struct ComputeContext {
    /// Tier 1: immutable precomputed tables.
    pub memo: MemoizedTables,

    /// Tier 2: totals accumulated by the combiner.
    pub totals: ResidueTotals,

    /// Tier 2: enumeration statistics.
    pub statistics: Statistics,
}

impl ComputeContext {
    /// Build the MEMO tables for `column_size` and zero the DYNAMIC state.
    pub fn new(column_size: usize) -> Result<Self, ConsistencyFailure> {
        Ok(Self {
            memo: MemoizedTables::new(column_size)?,
            totals: ResidueTotals::new(),
            statistics: Statistics::new(),
        })
    }

    /// Run the cross-column combination, leaving the verified totals in
    /// `self.totals`.
    pub fn run(&mut self) -> Result<(), ConsistencyFailure> {
        combine::accumulate_totals(&self.memo, &mut self.totals, &mut self.statistics)
    }

    /// The answer: subsets whose sum is divisible by the modulus.
    pub fn divisible_count(&self) -> &BigUint {
        self.totals.divisible_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::One;

    #[test]
    fn test_context_pipeline_covers_all_subsets() {
        let mut ctx = ComputeContext::new(2).unwrap();
        ctx.run().unwrap();
        // 10-element set: totals partition all 2^10 subsets
        assert_eq!(ctx.totals.grand_total(), BigUint::one() << 10usize);
    }
}

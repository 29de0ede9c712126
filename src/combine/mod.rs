// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cross-column combiner.
//!
//! A subset of the full set is an independent choice within each of the 5
//! residue columns, and each column's choice is already summarized by one
//! row of the [`ResidueMatrix`]: for column `level` there are
//! `matrix[level][n]` ways to contribute n mod 5 to the overall sum. The
//! combiner walks every way of picking one contribution residue per column
//! (5^5 = 3125 leaves), multiplying the matrix entries along the path and
//! adding each leaf's product into the totals slot for the path's residue
//! sum.
//!
//! # Recursion discipline
//!
//! Each invocation receives its own (level, product, residue) by value, so
//! sibling branches share no mutable state and there is nothing to save or
//! restore on return. A branch whose running product is exactly zero is
//! abandoned at once; multiplying non-negative integers can never make it
//! nonzero again, so pruning only skips work and never changes the totals.
//!
//! # Verification
//!
//! The leaves partition all 2^(5 * column_size) subsets, so after the walk
//! the totals must sum to exactly that power of two; a mismatch fails with
//! [`ConsistencyFailure::GrandTotalMismatch`].

use crate::constants::MODULUS;
use crate::context::MemoizedTables;
use crate::errors::ConsistencyFailure;
use crate::memo::ResidueMatrix;
use crate::state::statistics::{Counters, Statistics};
use crate::state::ResidueTotals;
use num::{BigUint, One, Zero};

/// Walk the cross-column enumeration, accumulating into `totals`.
///
/// Fails with [`ConsistencyFailure::GrandTotalMismatch`] if the accumulated
/// totals do not cover every subset exactly once.
pub fn accumulate_totals(
    memo: &MemoizedTables,
    totals: &mut ResidueTotals,
    statistics: &mut Statistics,
) -> Result<(), ConsistencyFailure> {
    descend(
        memo.column_sums(),
        0,
        BigUint::one(),
        0,
        totals,
        statistics,
    );
    totals.verify(memo.column_sums().column_size())?;

    log::info!(
        "cross-column enumeration complete: {} leaf combinations, {} zero branches pruned",
        statistics.get(Counters::LeafCombinations),
        statistics.get(Counters::ZeroBranchesPruned)
    );
    Ok(())
}

/// One level of the enumeration: branch over the contribution residues of
/// column `level`, carrying the running product and residue sum by value.
fn descend(
    matrix: &ResidueMatrix,
    level: usize,
    product: BigUint,
    residue: usize,
    totals: &mut ResidueTotals,
    statistics: &mut Statistics,
) {
    if product.is_zero() {
        statistics.increment(Counters::ZeroBranchesPruned);
        return;
    }

    if level == MODULUS {
        // all 5 columns decided; the product counts this combination's subsets
        statistics.increment(Counters::LeafCombinations);
        totals.add(residue, product);
        return;
    }

    for contribution in 0..MODULUS {
        let branch = &product * matrix.get(level, contribution);
        descend(
            matrix,
            level + 1,
            branch,
            (residue + contribution) % MODULUS,
            totals,
            statistics,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(column_size: usize) -> (ResidueTotals, Statistics) {
        let memo = MemoizedTables::new(column_size).unwrap();
        let mut totals = ResidueTotals::new();
        let mut statistics = Statistics::new();
        accumulate_totals(&memo, &mut totals, &mut statistics).unwrap();
        (totals, statistics)
    }

    #[test]
    fn test_single_row_totals() {
        // {1,2,3,4,5}: 8 subsets sum to 0 mod 5, 6 to each other residue.
        let (totals, _) = run(1);
        assert_eq!(totals.divisible_count(), &BigUint::from(8u32));
        for residue in 1..MODULUS {
            assert_eq!(totals.get(residue), &BigUint::from(6u32), "residue {}", residue);
        }
    }

    #[test]
    fn test_zero_pruning_skips_impossible_contributions() {
        // The residue-0 column only ever contributes 0, so 4 of the 5
        // top-level branches die immediately and 5^4 leaves remain.
        let (_, statistics) = run(400);
        assert_eq!(statistics.get(Counters::LeafCombinations), 625);
        assert_eq!(statistics.get(Counters::ZeroBranchesPruned), 4);
    }

    #[test]
    fn test_single_row_pruning() {
        // With one number per column most matrix cells are zero: the
        // residue-0 column always contributes 0 and each other column has
        // two realizable contributions, leaving 2^4 live leaves.
        let (_, statistics) = run(1);
        assert_eq!(statistics.get(Counters::LeafCombinations), 16);
        assert_eq!(statistics.get(Counters::ZeroBranchesPruned), 49);
    }
}

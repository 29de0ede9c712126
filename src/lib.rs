// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact count of the subsets of {1,...,2000} whose sum is divisible by 5.
//!
//! The set {1,...,2000} splits into 5 residue columns of 400 numbers each
//! (all numbers in a column are congruent mod 5). A subset is an independent
//! selection within each column, and only the *number* of elements taken from
//! a column matters for the sum's residue. That reduces the whole problem to
//! binomial coefficients and a tiny cross-column enumeration, all carried out
//! in exact arbitrary-precision arithmetic.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed data that never changes once built:
//! - [`memo::BinomialTable`] - C(k, 400) for k = 0..400, built by the exact
//!   multiplicative recurrence and verified against 2^400
//! - [`memo::ResidueMatrix`] - a 5x5 grid binning each column's 2^400 subsets
//!   by the residue they contribute to the overall sum
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! State accumulated while combining the columns:
//! - [`state::ResidueTotals`] - subset counts indexed by final sum residue
//! - [`state::statistics::Statistics`] - counters for the enumeration
//!
//! # Computation
//!
//! The pipeline runs once, in three phases:
//!
//! 1. Build the binomial table (verified: entries sum to 2^400)
//! 2. Bin the table into the column-residue matrix (each row sums to 2^400)
//! 3. Recursively enumerate one contribution residue per column (5^5 = 3125
//!    leaf combinations), multiplying matrix entries into a running product
//!    and accumulating each leaf into the totals (verified: totals sum
//!    to 2^2000)
//!
//! The answer is the totals entry for residue 0.
//!
//! Both verifications are internal self-consistency checks: a mismatch means
//! the arithmetic itself is defective, and the caller is expected to abort
//! rather than print a silently wrong answer.

pub mod combine;
pub mod constants;
pub mod context;
pub mod errors;
pub mod memo;
pub mod state;

// Re-export commonly used types
pub use context::{ComputeContext, MemoizedTables};
pub use errors::ConsistencyFailure;
pub use memo::{BinomialTable, ResidueMatrix};
pub use state::ResidueTotals;

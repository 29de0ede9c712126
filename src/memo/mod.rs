// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, precomputed).
//!
//! The two lookup tables everything else reads from:
//! - [`BinomialTable`] - exact binomial coefficients C(k, column_size)
//! - [`ResidueMatrix`] - per-column subset counts binned by contribution
//!   residue
//!
//! Both are built once at context creation and never mutated afterwards.

pub mod binomial;
pub mod residues;

pub use binomial::BinomialTable;
pub use residues::ResidueMatrix;

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the subset count.
//!
//! The problem instance is fixed: subsets of {1,...,2000} with sums taken
//! mod 5. The set is viewed as a 400x5 grid,
//!
//! ```text
//!     1,    2,    3,    4,    5
//!     6,    7,    8,    9,   10
//!   ...
//!  1996, 1997, 1998, 1999, 2000
//! ```
//!
//! so each of the 5 columns holds 400 numbers sharing one residue mod 5.
//! All derived quantities follow from [`MODULUS`] and [`COLUMN_SIZE`].
//!
//! The library itself takes the column height as a runtime parameter so the
//! test suite can run the same pipeline on the one-row set {1,2,3,4,5};
//! the binary always uses [`COLUMN_SIZE`].

/// The divisor applied to subset sums, and equally the number of residue
/// columns the set splits into.
pub const MODULUS: usize = 5;

/// Numbers per residue column.
pub const COLUMN_SIZE: usize = 400;

/// Size of the full set {1,...,SET_SIZE} (2000 for the shipped constants).
pub const SET_SIZE: usize = MODULUS * COLUMN_SIZE;

/// Leaves visited by an unpruned cross-column enumeration: one contribution
/// residue chosen per column, MODULUS^MODULUS combinations in total.
pub const LEAF_COMBINATIONS: usize = {
    let mut total = 1;
    let mut level = 0;
    while level < MODULUS {
        total *= MODULUS;
        level += 1;
    }
    total
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_size() {
        assert_eq!(SET_SIZE, 2000);
        assert_eq!(SET_SIZE, MODULUS * COLUMN_SIZE);
    }

    #[test]
    fn test_leaf_combinations() {
        assert_eq!(LEAF_COMBINATIONS, 3125);
        assert_eq!(LEAF_COMBINATIONS, MODULUS.pow(MODULUS as u32));
    }
}

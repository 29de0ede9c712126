// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use num::{BigUint, One};

/// Closed-form count of the subsets of {1,...,5*column_size} whose sum is
/// divisible by 5, via the roots-of-unity filter over the generating
/// function: the trivial character contributes 2^(5*column_size) and each of
/// the 4 nontrivial characters contributes
/// (product over residues r of (1 + w^r))^column_size = 2^column_size.
///
/// This derivation shares no code with the recursive combiner, so it serves
/// as an independent cross-check of the full pipeline.
pub fn closed_form_count(column_size: usize) -> BigUint {
    let trivial = BigUint::one() << (5 * column_size);
    let nontrivial = BigUint::from(4u32) * (BigUint::one() << column_size);
    (trivial + nontrivial) / BigUint::from(5u32)
}

/// Brute-force count of the subsets of {1,...,n} whose sum is divisible by
/// `modulus`, enumerating all 2^n subsets. Only usable for small n.
pub fn brute_force_count(n: usize, modulus: usize) -> u64 {
    assert!(n < 25, "brute force is exponential in n");
    let mut count = 0;
    for selection in 0u32..(1 << n) {
        let mut sum = 0usize;
        for bit in 0..n {
            if selection & (1 << bit) != 0 {
                sum += bit + 1;
            }
        }
        if sum % modulus == 0 {
            count += 1;
        }
    }
    count
}

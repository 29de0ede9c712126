// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context and incremented by the combiner as
//! it walks the cross-column enumeration.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Copy, Clone)]
#[repr(u8)]
pub enum Counters {
    /// Complete per-column contribution choices reached (at most 5^5).
    LeafCombinations,
    /// Branches abandoned because the running product was exactly zero.
    ZeroBranchesPruned,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        assert_eq!(stats.get(Counters::LeafCombinations), 0);
        assert_eq!(stats.get(Counters::ZeroBranchesPruned), 0);
    }

    #[test]
    fn test_increment_is_per_counter() {
        let mut stats = Statistics::new();
        stats.increment(Counters::LeafCombinations);
        stats.increment(Counters::LeafCombinations);
        stats.increment(Counters::ZeroBranchesPruned);
        assert_eq!(stats.get(Counters::LeafCombinations), 2);
        assert_eq!(stats.get(Counters::ZeroBranchesPruned), 1);
    }
}

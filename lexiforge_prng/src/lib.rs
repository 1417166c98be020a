// Deterministic, portable pseudo-random number generator for word synthesis.
//
// Implements xoshiro256++ (Blackman & Vigna, 2019) with SplitMix64 seeding.
// Hand-rolled with no RNG crate dependency so that the same seed yields the
// same words on every platform and compiler version.
//
// `lexiforge_lang` threads a `&mut WordRng` through every random decision in
// word generation (pattern choice, phoneme draws, cluster fallback, article
// choice). Each caller owns its own stream; nothing here is shared or global.
//
// On top of the raw generator this crate provides the two sampling shapes the
// engine needs: a uniform pick from a slice (`choose`) and sampling without
// replacement (`sample_distinct`).
//
// **Critical constraint: determinism.** Every method must produce identical
// output given the same prior state. No floating point in the core
// generator, no stdlib randomness, no iteration over unordered collections.

use serde::{Deserialize, Serialize};

/// Xoshiro256++ PRNG: the sole source of randomness for word generation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WordRng {
    s: [u64; 4],
}

impl WordRng {
    /// Create a new PRNG seeded from a `u64`.
    ///
    /// Uses SplitMix64 to expand the seed into the 256-bit internal state.
    /// Two `WordRng` instances created with the same seed produce identical
    /// output sequences.
    pub fn new(seed: u64) -> Self {
        let mut sm = seed;
        Self {
            s: [
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
                splitmix64(&mut sm),
            ],
        }
    }

    /// Generate the next `u64` in the sequence.
    pub fn next_u64(&mut self) -> u64 {
        let result = (self.s[0].wrapping_add(self.s[3]))
            .rotate_left(23)
            .wrapping_add(self.s[0]);

        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }

    /// Generate a uniform random integer in `[low, high)`.
    ///
    /// Uses rejection sampling to avoid modulo bias.
    /// Panics if `low >= high`.
    pub fn range_u64(&mut self, low: u64, high: u64) -> u64 {
        assert!(low < high, "range_u64: low must be less than high");
        let range = high - low;
        if range.is_power_of_two() {
            return low + (self.next_u64() & (range - 1));
        }
        let threshold = range.wrapping_neg() % range; // = (2^64 - range) % range
        loop {
            let r = self.next_u64();
            if r >= threshold {
                return low + (r % range);
            }
        }
    }

    /// Generate a uniform random `usize` in `[low, high)`.
    ///
    /// Panics if `low >= high`.
    pub fn range_usize(&mut self, low: usize, high: usize) -> usize {
        self.range_u64(low as u64, high as u64) as usize
    }

    /// Generate a uniform random `usize` in `[low, high]` (inclusive on both ends).
    ///
    /// Panics if `low > high`.
    pub fn range_usize_inclusive(&mut self, low: usize, high: usize) -> usize {
        assert!(low <= high, "range_usize_inclusive: low must be <= high");
        self.range_u64(low as u64, high as u64 + 1) as usize
    }

    /// Pick one element uniformly. Returns `None` for an empty slice and
    /// consumes no randomness in that case.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.range_usize(0, items.len());
        Some(&items[idx])
    }

    /// Sample `k` distinct elements without replacement, in draw order.
    ///
    /// Partial Fisher-Yates over an index table. Returns `None` when the slice
    /// has fewer than `k` elements.
    pub fn sample_distinct<'a, T>(&mut self, items: &'a [T], k: usize) -> Option<Vec<&'a T>> {
        if items.len() < k {
            return None;
        }
        let mut indices: Vec<usize> = (0..items.len()).collect();
        for i in 0..k {
            let j = self.range_usize(i, indices.len());
            indices.swap(i, j);
        }
        Some(indices[..k].iter().map(|&i| &items[i]).collect())
    }
}

/// SplitMix64: used only for seeding xoshiro256++ from a single `u64`.
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

//! RNG module - small deterministic generator for obstacle and gap placement
//!
//! The host seeds it once at startup; nothing here depends on wall-clock time,
//! so tests can drive the simulations with a fixed seed.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // The low bits of an LCG are weak; use the high half.
        (self.next_u32() >> 16) % max
    }

    /// Uniform integer in the inclusive range [lo, hi]
    pub fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        lo + self.next_range((hi - lo + 1) as u32) as i32
    }

    /// Shuffle the first `count` slots of a slice (partial Fisher-Yates).
    ///
    /// After the call, `slice[..count]` is a uniform sample without replacement.
    pub fn partial_shuffle<T>(&mut self, slice: &mut [T], count: usize) {
        let len = slice.len();
        for i in 0..count.min(len) {
            let j = i + self.next_range((len - i) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current state (for reproducing a run)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

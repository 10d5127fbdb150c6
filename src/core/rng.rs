//! Deterministic random source for gap placement.
//!
//! A small seeded LCG (Numerical Recipes constants). The generator is owned
//! by whoever needs randomness and seeded at session creation, so replaying a
//! seed replays the exact obstacle sequence.

/// Simple LCG (Linear Congruential Generator) RNG
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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform draw from the unit interval [0, 1).
    pub fn next_unit_f32(&mut self) -> f32 {
        // 24 bits of mantissa is all f32 can hold anyway.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform draw from [lo, hi); returns `lo` for a degenerate interval.
    pub fn next_f32_range(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        lo + self.next_unit_f32() * (hi - lo)
    }
}

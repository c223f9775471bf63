//! RNG module - deterministic tile generation
//!
//! Tile values are drawn uniformly from a difficulty-indexed weighted pool
//! (duplicated pool entries raise a value's odds). A simple LCG keeps the
//! whole engine deterministic: the same seed replays the same game, which the
//! property tests rely on.

use just_divide_types::{Difficulty, Tile};

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
        self.next_u32() % max
    }

    /// Current internal state (usable as a seed to fork the sequence).
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Draws tile values from the pool selected by a difficulty.
#[derive(Debug, Clone)]
pub struct TileGenerator {
    rng: SimpleRng,
}

impl TileGenerator {
    /// Create a generator with the given seed.
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Generate one tile for the given difficulty.
    pub fn generate(&mut self, difficulty: Difficulty) -> Tile {
        let pool = difficulty.pool();
        let index = self.rng.next_range(pool.len() as u32) as usize;
        Tile::new(pool[index])
    }

    /// Current RNG state (for restarting a game with a fresh sequence).
    pub fn state(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for TileGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

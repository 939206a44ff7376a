//! RNG module - random sources for tile placement
//!
//! Placement only ever needs "a uniform integer below some bound", so the core
//! talks to randomness through the small [`RandomSource`] trait. The game uses
//! [`SimpleRng`], a seeded LCG, which keeps whole games reproducible from a
//! single `u32` seed. Tests plug in scripted sources.

use crate::types::{Tile, SPAWN_FOUR_BELOW, SPAWN_TWO_BELOW};

/// Source of uniform integers.
pub trait RandomSource {
    /// Uniform value in `[0, bound)`. `bound` must be non-zero.
    fn below(&mut self, bound: u32) -> u32;
}

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

    /// Current internal state (feeding it back into `new` resumes the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0, "below() needs a non-zero bound");
        // Multiply-shift keeps the high bits. The low bits of an LCG cycle with
        // a tiny period (bit 0 alternates), so `% bound` would revisit the same
        // few coordinates forever on small boards.
        ((self.next_u32() as u64 * bound as u64) >> 32) as u32
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, bound: u32) -> u32 {
        (**self).below(bound)
    }
}

/// Map a roll in `[0, 100)` to the tile it spawns.
///
/// `[0, 60)` -> 2, `[60, 97)` -> 4, `[97, 100)` -> 8.
pub fn spawn_tile(roll: u32) -> Tile {
    if roll < SPAWN_TWO_BELOW {
        Tile::TWO
    } else if roll < SPAWN_FOUR_BELOW {
        Tile::FOUR
    } else {
        Tile::EIGHT
    }
}

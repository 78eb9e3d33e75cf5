//! RNG module - 7-bag random piece generation
//!
//! Implements the "7-bag" randomizer (https://tetris.wiki/Random_Generator).
//! Each bag holds one of each piece. Draws come off the end of the bag until it
//! is empty, then a fresh permutation is generated.
//!
//! The permutation is built by repeatedly picking a uniform random candidate
//! from the pieces not yet placed, driven by a small seeded LCG so games can be
//! replayed from their seed.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of a power-of-two LCG
    /// cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        (self.next_u32() >> 16) % max
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceQueue {
    /// Remaining pieces of the current cycle; the next draw is the last element.
    bag: ArrayVec<PieceKind, 7>,
    rng: SimpleRng,
}

impl PieceQueue {
    /// Create a queue with an empty bag; the first draw generates the first cycle.
    pub fn new(seed: u32) -> Self {
        Self {
            bag: ArrayVec::new(),
            rng: SimpleRng::new(seed),
        }
    }

    fn refill_bag(&mut self) {
        let mut candidates = ArrayVec::from(PieceKind::ALL);
        while !candidates.is_empty() {
            let pick = self.rng.next_range(candidates.len() as u32) as usize;
            self.bag.push(candidates.remove(pick));
        }
    }

    /// Draw the next piece from the queue
    pub fn draw(&mut self) -> PieceKind {
        loop {
            if let Some(kind) = self.bag.pop() {
                return kind;
            }
            self.refill_bag();
        }
    }

    /// Pieces left in the current cycle, in storage order (the next draw is last).
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}

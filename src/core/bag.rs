//! Deterministic RNG and the 7-bag piece randomizer.

use crate::types::PieceKind;

/// Linear congruential generator (Numerical Recipes constants).
///
/// Deterministic from a `u32` seed so runs and tests are reproducible.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // A zero state would yield a fixed point for the multiplier path.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// 7-bag randomizer: every kind appears exactly once per seven draws.
///
/// When the current permutation is exhausted a fresh one is shuffled before
/// serving the next value. Infinite, infallible sequence.
#[derive(Debug, Clone)]
pub struct SevenBag {
    bag: [PieceKind; 7],
    drawn: usize,
    rng: SimpleRng,
}

impl SevenBag {
    pub fn new(seed: u32) -> Self {
        Self {
            bag: PieceKind::ALL,
            // Exhausted: the first draw shuffles.
            drawn: 7,
            rng: SimpleRng::new(seed),
        }
    }

    fn reshuffle(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.drawn = 0;
    }

    pub fn draw(&mut self) -> PieceKind {
        if self.drawn >= self.bag.len() {
            self.reshuffle();
        }
        let kind = self.bag[self.drawn];
        self.drawn += 1;
        kind
    }

    /// Current RNG state, usable as the seed of a follow-up run.
    pub fn seed_state(&self) -> u32 {
        self.rng.state()
    }
}

//! RNG module - two-bag random piece generation
//!
//! Pieces come from two "bags", each holding one of every kind in shuffled
//! order. Draws pop from the active bag; when it runs dry, the second
//! (already shuffled) bag takes over and a fresh second bag is shuffled.
//! No kind can be starved, and a kind can repeat at most twice in a row
//! (once at the end of one bag, once at the start of the next).
//!
//! Also provides a simple LCG so sequences are reproducible from a seed.

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniform value in `[-1.0, 1.0]`.
    pub fn next_signed_unit(&mut self) -> f32 {
        (self.next_u32() as f64 / u32::MAX as f64 * 2.0 - 1.0) as f32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// A shuffled permutation of the seven kinds.
pub type Bag = ArrayVec<PieceKind, 7>;

/// Two-bag piece generator
#[derive(Debug, Clone)]
pub struct TetrominoGenerator {
    /// Bag currently being drawn from (pops from the back)
    active: Bag,
    /// Pre-shuffled bag that takes over when `active` empties
    on_deck: Bag,
    rng: SimpleRng,
}

impl TetrominoGenerator {
    /// Create a new generator with the given seed
    pub fn new(seed: u32) -> Self {
        let mut generator = Self {
            active: Bag::new(),
            on_deck: Bag::new(),
            rng: SimpleRng::new(seed),
        };
        generator.reset();
        generator
    }

    /// Discard both bags and shuffle fresh ones.
    pub fn reset(&mut self) {
        self.active = self.shuffled_bag();
        self.on_deck = self.shuffled_bag();
    }

    fn shuffled_bag(&mut self) -> Bag {
        let mut bag: Bag = PieceKind::ALL.into_iter().collect();
        self.rng.shuffle(&mut bag);
        bag
    }

    /// Draw the next piece kind.
    pub fn next(&mut self) -> PieceKind {
        // `active` is refilled eagerly below, so it is never empty here.
        let kind = self.active.pop().unwrap_or(PieceKind::I);
        if self.active.is_empty() {
            let fresh = self.shuffled_bag();
            self.active = std::mem::replace(&mut self.on_deck, fresh);
        }
        kind
    }

    /// Peek at the kind the next call to [`next`](Self::next) returns.
    pub fn peek(&self) -> PieceKind {
        self.active.last().copied().unwrap_or(PieceKind::I)
    }
}

impl Default for TetrominoGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

//! RNG module - injectable randomness for piece selection and spawn column
//!
//! The engine never reaches for a global generator. It is handed a
//! [`Randomizer`] at construction, which makes every game replayable from its
//! seed and lets tests script exact spawns.

/// Source of uniform draws used by spawning.
pub trait Randomizer {
    /// Draw a value in `[0, bound)`. `bound` is always at least 1.
    fn next_below(&mut self, bound: u32) -> u32;
}

impl<R: Randomizer + ?Sized> Randomizer for &mut R {
    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }
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

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of a power-of-two LCG have short periods.
        (self.next_u32() >> 16) % max
    }

    /// Current generator state (reseeding with it continues the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Randomizer for SimpleRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.next_range(bound.max(1))
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// Each draw is reduced modulo the requested bound. A spawn consumes three
/// draws in order: kind index, orientation, column. `ScriptedRng::new(vec![1])`
/// therefore always spawns an O piece (index 1 in [`ShapeKind::ALL`]).
///
/// [`ShapeKind::ALL`]: crate::types::ShapeKind::ALL
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: Vec<u32>) -> Self {
        let values = if values.is_empty() { vec![0] } else { values };
        Self { values, cursor: 0 }
    }

    /// Number of draws consumed so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl Randomizer for ScriptedRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v % bound.max(1)
    }
}

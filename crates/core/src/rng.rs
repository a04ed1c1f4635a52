//! RNG module - shuffling and random selection
//!
//! Provides a small deterministic LCG plus the two pure helpers the board
//! generator is built from:
//!
//! - [`shuffle`]: Fisher-Yates over a copy of the input
//! - [`pick_random_distinct`]: draw without replacement from a working pool
//!
//! Both take the RNG explicitly so a seed fully determines every deal.

use crate::types::DealError;

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
    ///
    /// Uses the high bits: the low bits of a power-of-two LCG cycle with a
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice in place using Fisher-Yates
    pub fn shuffle_in_place<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Return a uniformly shuffled copy of `items`.
///
/// The input slice is never mutated.
pub fn shuffle<T: Clone>(items: &[T], rng: &mut SimpleRng) -> Vec<T> {
    let mut out = items.to_vec();
    rng.shuffle_in_place(&mut out);
    out
}

/// Draw `count` elements from `items` without replacement.
///
/// Each pick is removed from a working copy of the pool before the next draw,
/// so no position of `items` is returned twice. The order of the result is
/// the draw order and carries no meaning.
pub fn pick_random_distinct<T: Clone>(
    items: &[T],
    count: usize,
    rng: &mut SimpleRng,
) -> Result<Vec<T>, DealError> {
    if count > items.len() {
        return Err(DealError::InvalidArgument(format!(
            "cannot pick {} items from a pool of {}",
            count,
            items.len()
        )));
    }

    let mut pool = items.to_vec();
    let mut picks = Vec::with_capacity(count);
    for _ in 0..count {
        let idx = rng.next_range(pool.len() as u32) as usize;
        picks.push(pool.swap_remove(idx));
    }
    Ok(picks)
}

//! Injectable selection of patterns and palette colors.

use rand::prelude::*;

/// Picks an index into a non-empty list (catalog or palette).
pub trait Chooser {
    /// Return an index in `0..len`. `len` is never zero.
    fn choose(&mut self, len: usize) -> usize;
}

/// Uniform random choice from a seedable generator.
pub struct SeededChooser {
    rng: StdRng,
}

impl SeededChooser {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create with random seed.
    pub fn random() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Chooser for SeededChooser {
    fn choose(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Round-robin choice: 0, 1, 2, ... wrapping at `len`.
#[derive(Debug, Clone, Default)]
pub struct CyclingChooser {
    next: usize,
}

impl Chooser for CyclingChooser {
    fn choose(&mut self, len: usize) -> usize {
        let index = self.next % len;
        self.next = self.next.wrapping_add(1);
        index
    }
}

/// Always the same index (clamped to the list).
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedChooser(pub usize);

impl Chooser for FixedChooser {
    fn choose(&mut self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

//! Live-set fingerprints and repeated-configuration detection.

use std::collections::VecDeque;
use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use super::Grid;

/// Default number of recent fingerprints kept by a tracker.
pub const DEFAULT_HISTORY_WINDOW: usize = 10;

/// Canonical encoding of which cells are alive, ignoring color.
///
/// Live coordinates in row-major order, each written as `x,y|`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fingerprint the live cells of `grid`.
pub fn fingerprint(grid: &Grid) -> Fingerprint {
    let mut out = String::new();
    for (x, y) in grid.alive_coords() {
        // Writing into a String cannot fail
        let _ = write!(out, "{x},{y}|");
    }
    Fingerprint(out)
}

/// Bounded FIFO of recent fingerprints.
#[derive(Debug, Clone)]
pub struct StabilityTracker {
    history: VecDeque<Fingerprint>,
    capacity: usize,
}

impl Default for StabilityTracker {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_WINDOW)
    }
}

impl StabilityTracker {
    pub fn new(capacity: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Report whether `fp` is already in the window, then record it.
    ///
    /// The oldest entry is evicted once the window is full. A zero-capacity
    /// tracker never reports stability.
    pub fn check_and_record(&mut self, fp: Fingerprint) -> bool {
        let stable = self.history.contains(&fp);
        if self.capacity == 0 {
            return stable;
        }
        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(fp);
        stable
    }

    pub fn contains(&self, fp: &Fingerprint) -> bool {
        self.history.contains(fp)
    }

    /// Recorded fingerprints, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &Fingerprint> {
        self.history.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forget all recorded fingerprints.
    pub fn clear(&mut self) {
        self.history.clear();
    }
}

//! Generation driver: rules followed by collision merging.

use serde::{Deserialize, Serialize};

use super::{Grid, apply_rules, find_components, merge_components};

/// Advance one generation.
///
/// Applies the rules to produce a new grid, then unifies the colors of
/// mixed components on that new grid. `grid` itself is never modified.
pub fn step(grid: &Grid) -> Grid {
    let mut next = apply_rules(grid);
    let merged = merge_components(&mut next);
    if merged > 0 {
        log::trace!("Merged colors of {} colliding components", merged);
    }
    next
}

/// Advance `steps` generations.
pub fn run(grid: &Grid, steps: u64) -> Grid {
    let mut current = grid.clone();
    for _ in 0..steps {
        current = step(&current);
    }
    current
}

/// Number of live cells.
#[inline]
pub fn count_alive(grid: &Grid) -> usize {
    grid.count_alive()
}

/// Grid statistics for monitoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridStats {
    pub alive_cells: usize,
    /// Fraction of cells alive (0.0 for zero-area grids).
    pub density: f32,
    pub components: usize,
    pub distinct_colors: usize,
}

impl GridStats {
    /// Compute statistics from a grid.
    pub fn from_grid(grid: &Grid) -> Self {
        let alive_cells = grid.count_alive();
        let density = if grid.is_empty() {
            0.0
        } else {
            alive_cells as f32 / grid.len() as f32
        };

        let mut colors: Vec<_> = grid
            .cells()
            .iter()
            .filter(|c| c.alive)
            .map(|c| c.color)
            .collect();
        colors.sort_unstable_by_key(|c| (c.r, c.g, c.b));
        colors.dedup();

        Self {
            alive_cells,
            density,
            components: find_components(grid).len(),
            distinct_colors: colors.len(),
        }
    }
}

//! Moore-neighborhood analysis on the torus.

use crate::schema::Rgb;

use super::Grid;

/// Live-neighbor count and colors around one cell.
///
/// Colors are kept inline (at most 8), in row-major offset order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighborhood {
    live: u8,
    colors: [Rgb; 8],
}

impl Neighborhood {
    /// Number of live neighbors (0..=8).
    #[inline]
    pub fn live(&self) -> u8 {
        self.live
    }

    /// Colors of the live neighbors, duplicates included.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors[..self.live as usize]
    }

    #[inline]
    fn push(&mut self, color: Rgb) {
        self.colors[self.live as usize] = color;
        self.live += 1;
    }
}

/// Analyze the neighborhood of any (wrapped) coordinate.
///
/// A zero-area grid has no neighbors.
pub fn analyze(grid: &Grid, x: i64, y: i64) -> Neighborhood {
    match grid.wrap(x, y) {
        Some(idx) => {
            let (cx, cy) = grid.coords_of(idx);
            analyze_cell(grid, cx, cy)
        }
        None => Neighborhood::default(),
    }
}

/// Analyze the neighborhood of an in-bounds cell.
#[inline]
pub(crate) fn analyze_cell(grid: &Grid, x: usize, y: usize) -> Neighborhood {
    let cells = grid.cells();
    let mut hood = Neighborhood::default();
    for n in grid.neighbor_indices(x, y) {
        let cell = &cells[n];
        if cell.alive {
            hood.push(cell.color);
        }
    }
    hood
}

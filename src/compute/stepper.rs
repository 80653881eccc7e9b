//! Birth/survival rules (B3/S23) with color inheritance.

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use super::{Cell, Grid, Neighborhood, Origin, analyze_cell, blend};

/// Next state of a single cell given its neighborhood.
///
/// - live with 2 or 3 neighbors survives unchanged (color and origin kept)
/// - dead with exactly 3 neighbors is born with the mean of the raw
///   neighbor colors and an empty origin
/// - everything else is dead
#[inline]
pub fn next_cell(current: Cell, hood: &Neighborhood) -> Cell {
    match (current.alive, hood.live()) {
        (true, 2) | (true, 3) => current,
        (false, 3) => Cell::live(blend(hood.colors()), Origin::NONE),
        _ => Cell::DEAD,
    }
}

/// Apply the rules to every cell, reading only `grid`.
///
/// Returns a freshly allocated grid of identical dimensions.
pub fn apply_rules(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.rows(), grid.cols());
    if grid.is_empty() {
        return next;
    }

    let cols = grid.cols();

    #[cfg(not(target_arch = "wasm32"))]
    {
        // Native: rows are independent, fill them in parallel
        next.cells_mut()
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(y, row)| fill_row(grid, y, row));
    }

    #[cfg(target_arch = "wasm32")]
    {
        for (y, row) in next.cells_mut().chunks_mut(cols).enumerate() {
            fill_row(grid, y, row);
        }
    }

    next
}

#[inline]
fn fill_row(grid: &Grid, y: usize, row: &mut [Cell]) {
    let current = &grid.cells()[y * grid.cols()..(y + 1) * grid.cols()];
    for (x, (out, &cell)) in row.iter_mut().zip(current).enumerate() {
        *out = next_cell(cell, &analyze_cell(grid, x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Rgb;

    const RED: Rgb = Rgb::new(200, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 100);

    fn live(grid: &mut Grid, cells: &[(i64, i64)], color: Rgb) {
        for &(x, y) in cells {
            grid.set(x, y, Cell::live(color, Origin(7)));
        }
    }

    #[test]
    fn test_underpopulation_and_overcrowding() {
        let mut grid = Grid::new(8, 8);
        live(&mut grid, &[(1, 1)], RED);
        live(&mut grid, &[(4, 4), (3, 3), (5, 3), (3, 5), (5, 5)], RED);

        let next = apply_rules(&grid);
        assert!(!next.is_alive(1, 1));
        assert!(!next.is_alive(4, 4));
    }

    #[test]
    fn test_survivor_keeps_color_and_origin() {
        let mut grid = Grid::new(8, 8);
        live(&mut grid, &[(1, 1), (2, 1), (1, 2), (2, 2)], RED);

        let next = apply_rules(&grid);
        for &(x, y) in &[(1, 1), (2, 1), (1, 2), (2, 2)] {
            assert_eq!(next.get(x, y), Cell::live(RED, Origin(7)));
        }
        assert_eq!(next.count_alive(), 4);
    }

    #[test]
    fn test_birth_blends_raw_neighbor_colors() {
        let mut grid = Grid::new(8, 8);
        live(&mut grid, &[(1, 1), (2, 1)], RED);
        live(&mut grid, &[(3, 1)], BLUE);

        let next = apply_rules(&grid);
        let born = next.get(2, 0);
        assert!(born.alive);
        assert_eq!(born.color, Rgb::new(133, 0, 33));
        assert_eq!(born.origin, Origin::NONE);
    }

    #[test]
    fn test_birth_across_torus_edge() {
        let (rows, cols) = (6, 8);
        let mut grid = Grid::new(rows, cols);
        live(&mut grid, &[(0, 0), (cols as i64 - 1, rows as i64 - 1), (cols as i64 - 1, 0)], RED);

        let next = apply_rules(&grid);
        assert!(next.is_alive(0, 0));
        assert!(next.is_alive(7, 5));
        assert!(next.is_alive(7, 0));
        assert!(next.is_alive(0, 5));
        assert_eq!(next.count_alive(), 4);
    }

    #[test]
    fn test_input_untouched_and_deterministic() {
        let mut grid = Grid::new(10, 10);
        live(&mut grid, &[(4, 5), (5, 5), (6, 5)], RED);
        let before = grid.clone();

        let a = apply_rules(&grid);
        let b = apply_rules(&grid);
        assert_eq!(a, b);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_zero_area() {
        let grid = Grid::new(0, 0);
        assert!(apply_rules(&grid).is_empty());
    }
}

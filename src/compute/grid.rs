//! Toroidal grid of colored cells.
//!
//! Cells are stored as a flat row-major array indexed by `y * cols + x`.
//! Every public coordinate is wrapped modulo the grid dimensions, so no
//! index can fall out of bounds.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::schema::Rgb;

static NEXT_ORIGIN: AtomicU64 = AtomicU64::new(1);

/// Opaque placement token carried by live cells.
///
/// No rule reads it; it only records which placement a cell came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Origin(pub u64);

impl Origin {
    /// Empty token, carried by dead and newly born cells.
    pub const NONE: Origin = Origin(0);

    /// Next token from a process-wide counter.
    pub fn fresh() -> Self {
        Origin(NEXT_ORIGIN.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

/// A single grid cell. `color` and `origin` only mean something while alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub alive: bool,
    pub color: Rgb,
    pub origin: Origin,
}

impl Cell {
    pub const DEAD: Cell = Cell {
        alive: false,
        color: Rgb::BLACK,
        origin: Origin::NONE,
    };

    #[inline]
    pub const fn live(color: Rgb, origin: Origin) -> Self {
        Self {
            alive: true,
            color,
            origin,
        }
    }
}

/// Integer grid coordinate; x is the column, y the row. May lie off-grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl Coord {
    /// Split interleaved `[x0, y0, x1, y1, ...]` into coordinates.
    pub fn from_interleaved(flat: &[i32]) -> Result<Vec<Coord>, GridError> {
        if flat.len() % 2 != 0 {
            return Err(GridError::OddCoordinateList(flat.len()));
        }
        Ok(flat
            .chunks_exact(2)
            .map(|pair| Coord::new(pair[0] as i64, pair[1] as i64))
            .collect())
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Fixed-size toroidal cell grid.
///
/// Deserialization rejects a cell buffer that does not hold `rows * cols` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of [`Grid`].
#[derive(Deserialize)]
struct GridRepr {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

/// Errors from rebuilding grid data out of untyped input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Grid of {rows} rows by {cols} cols cannot hold {len} cells")]
    CellCountMismatch { rows: usize, cols: usize, len: usize },

    #[error("Coordinate list has odd length {0}; expected x, y pairs")]
    OddCoordinateList(usize),
}

impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        let GridRepr { rows, cols, cells } = repr;
        if rows.checked_mul(cols) != Some(cells.len()) {
            return Err(GridError::CellCountMismatch {
                rows,
                cols,
                len: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }
}

impl Grid {
    /// Create a grid with every cell dead.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::DEAD; rows * cols],
        }
    }

    /// Grid height.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid width.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for zero-area grids, on which every operation is a no-op.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat index of an in-bounds (x, y).
    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    /// (x, y) of a flat index.
    #[inline]
    pub fn coords_of(&self, idx: usize) -> (usize, usize) {
        (idx % self.cols, idx / self.cols)
    }

    /// Wrap any integer coordinate onto the torus. None only for zero-area grids.
    #[inline]
    pub fn wrap(&self, x: i64, y: i64) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let wx = x.rem_euclid(self.cols as i64) as usize;
        let wy = y.rem_euclid(self.rows as i64) as usize;
        Some(self.idx(wx, wy))
    }

    /// Cell at a wrapped coordinate; `Cell::DEAD` on a zero-area grid.
    pub fn get(&self, x: i64, y: i64) -> Cell {
        self.wrap(x, y).map_or(Cell::DEAD, |i| self.cells[i])
    }

    /// Overwrite the cell at a wrapped coordinate.
    pub fn set(&mut self, x: i64, y: i64, cell: Cell) {
        if let Some(i) = self.wrap(x, y) {
            self.cells[i] = cell;
        }
    }

    #[inline]
    pub fn is_alive(&self, x: i64, y: i64) -> bool {
        self.get(x, y).alive
    }

    /// Row-major cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Flat indices of the 8 wrapped neighbors of in-bounds (x, y),
    /// in row-major offset order (dy = -1, 0, 1; dx = -1, 0, 1; center skipped).
    #[inline]
    pub fn neighbor_indices(&self, x: usize, y: usize) -> [usize; 8] {
        let left = (x + self.cols - 1) % self.cols;
        let right = (x + 1) % self.cols;
        let up = (y + self.rows - 1) % self.rows;
        let down = (y + 1) % self.rows;

        [
            self.idx(left, up),
            self.idx(x, up),
            self.idx(right, up),
            self.idx(left, y),
            self.idx(right, y),
            self.idx(left, down),
            self.idx(x, down),
            self.idx(right, down),
        ]
    }

    /// Number of live cells.
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|c| c.alive).count()
    }

    /// Coordinates of live cells in row-major order.
    pub fn alive_coords(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.alive)
            .map(|(i, _)| self.coords_of(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(4, 6);
        assert_eq!((grid.rows(), grid.cols(), grid.len()), (4, 6, 24));
        assert!(grid.cells().iter().all(|c| *c == Cell::DEAD));
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_get_set_wraps() {
        let mut grid = Grid::new(4, 6);
        grid.set(-1, -1, Cell::live(RED, Origin(9)));

        assert!(grid.is_alive(5, 3));
        assert!(grid.is_alive(11, 7));
        assert!(grid.is_alive(-7, -5));
        assert_eq!(grid.get(5, 3).origin, Origin(9));
        assert_eq!(grid.alive_coords().collect::<Vec<_>>(), vec![(5, 3)]);
    }

    #[test]
    fn test_zero_area_is_inert() {
        let mut grid = Grid::new(0, 5);
        assert!(grid.is_empty());
        assert_eq!(grid.wrap(3, 3), None);
        grid.set(1, 1, Cell::live(RED, Origin::NONE));
        assert_eq!(grid.get(1, 1), Cell::DEAD);
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_neighbor_indices_wrap_corner() {
        let grid = Grid::new(3, 4);
        let n = grid.neighbor_indices(0, 0);
        let coords: Vec<_> = n.iter().map(|&i| grid.coords_of(i)).collect();
        assert_eq!(
            coords,
            vec![(3, 2), (0, 2), (1, 2), (3, 0), (1, 0), (3, 1), (0, 1), (1, 1)]
        );
    }

    #[test]
    fn test_deserialize_rejects_short_buffer() {
        let json = r##"{ "rows": 2, "cols": 2, "cells": [
            { "alive": true, "color": "#ff0000", "origin": 1 }
        ] }"##;
        let err = serde_json::from_str::<Grid>(json).unwrap_err();
        assert!(err.to_string().contains("cannot hold 1 cells"));
    }

    #[test]
    fn test_deserialize_round_trip() {
        let mut grid = Grid::new(2, 3);
        grid.set(2, 1, Cell::live(RED, Origin(4)));
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
        assert!(back.is_alive(2, 1));
    }

    #[test]
    fn test_interleaved_coords() {
        let coords = Coord::from_interleaved(&[1, 2, -3, 4]).unwrap();
        assert_eq!(coords, vec![Coord::new(1, 2), Coord::new(-3, 4)]);
        assert_eq!(
            Coord::from_interleaved(&[1, 2, 3]),
            Err(GridError::OddCoordinateList(3))
        );
    }

    #[test]
    fn test_fresh_origins_are_distinct() {
        let a = Origin::fresh();
        let b = Origin::fresh();
        assert_ne!(a, b);
        assert!(!a.is_none());
        assert!(Origin::NONE.is_none());
    }
}

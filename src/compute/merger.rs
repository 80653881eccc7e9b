//! Connected-component color unification.
//!
//! Live cells that touch (8-connectivity, wrapping at the edges) form a
//! component. When a component holds more than one distinct color, every
//! cell in it takes the unweighted mean of those distinct colors.

use std::collections::VecDeque;

use crate::schema::Rgb;

use super::{Grid, blend};

/// A maximal 8-connected set of live cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Flat cell indices, in discovery order.
    pub cells: Vec<usize>,
    /// Distinct colors, in first-seen order.
    pub colors: Vec<Rgb>,
}

impl Component {
    /// True when the component mixes more than one color.
    #[inline]
    pub fn is_mixed(&self) -> bool {
        self.colors.len() > 1
    }
}

/// Partition the live cells of `grid` into connected components.
///
/// Scans row-major; each cell is visited by at most one breadth-first search.
pub fn find_components(grid: &Grid) -> Vec<Component> {
    let cells = grid.cells();
    let mut visited = vec![false; grid.len()];
    let mut queue = VecDeque::new();
    let mut components = Vec::new();

    for start in 0..cells.len() {
        if !cells[start].alive || visited[start] {
            continue;
        }

        let mut component = Component {
            cells: Vec::new(),
            colors: Vec::new(),
        };
        visited[start] = true;
        queue.push_back(start);

        while let Some(idx) = queue.pop_front() {
            component.cells.push(idx);
            let color = cells[idx].color;
            if !component.colors.contains(&color) {
                component.colors.push(color);
            }

            let (x, y) = grid.coords_of(idx);
            for n in grid.neighbor_indices(x, y) {
                if cells[n].alive && !visited[n] {
                    visited[n] = true;
                    queue.push_back(n);
                }
            }
        }

        components.push(component);
    }

    components
}

/// Recolor every mixed component in place.
///
/// Returns the number of components that were recolored.
pub fn merge_components(grid: &mut Grid) -> usize {
    let mixed: Vec<Component> = find_components(grid)
        .into_iter()
        .filter(Component::is_mixed)
        .collect();

    let cells = grid.cells_mut();
    for component in &mixed {
        let color = blend(&component.colors);
        for &idx in &component.cells {
            cells[idx].color = color;
        }
    }

    mixed.len()
}

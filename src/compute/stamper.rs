//! Copy-on-write placement of patterns and free-drawn cells.

use crate::schema::{Pattern, Rgb};

use super::{Cell, Coord, Grid, Origin};

/// Stamp `pattern` so its anchor lands on (cx, cy), wrapping at the edges.
///
/// Only mask cells equal to 1 are written; everything else is left as is.
/// All stamped cells share `color` and one fresh [`Origin`]. Mask cells
/// that wrap onto the same target resolve last-write-wins in scan order.
pub fn stamp_pattern(grid: &Grid, pattern: &Pattern, cx: i64, cy: i64, color: Rgb) -> Grid {
    let mut next = grid.clone();
    if next.is_empty() {
        return next;
    }

    // Reduce the anchor first so extreme coordinates cannot overflow
    let cx = cx.rem_euclid(next.cols() as i64);
    let cy = cy.rem_euclid(next.rows() as i64);

    let cell = Cell::live(color, Origin::fresh());
    let (ax, ay) = (pattern.anchor.0 as i64, pattern.anchor.1 as i64);
    for (px, py) in pattern.live_offsets() {
        next.set(cx + px as i64 - ax, cy + py as i64 - ay, cell);
    }
    next
}

/// Set every coordinate in `coords` alive with `color`, wrapping at the edges.
pub fn stamp_custom(grid: &Grid, coords: &[Coord], color: Rgb) -> Grid {
    let mut next = grid.clone();
    if next.is_empty() {
        return next;
    }

    let cell = Cell::live(color, Origin::fresh());
    for c in coords {
        next.set(c.x, c.y, cell);
    }
    next
}

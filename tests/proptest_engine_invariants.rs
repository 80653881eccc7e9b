//! Property-based invariant tests for the colored Life engine.
//!
//! These tests verify invariants that must hold for any grid contents:
//!
//! 1. Stepping is deterministic and leaves its input untouched.
//! 2. Blending is invariant to input order.
//! 3. Merging an already merged grid changes nothing.
//! 4. Fingerprints ignore color.
//! 5. Every component has a single color after a step.
//! 6. Wrapped coordinates address the same cell.
//! 7. Stamping never erases live cells and never touches its input.
//! 8. Survivors keep their color; births carry the blend of their parents.

use chroma_life::{
    compute::{
        Cell, Coord, Grid, Origin, analyze, apply_rules, blend, find_components, fingerprint,
        merge_components, stamp_custom, stamp_pattern, step,
    },
    schema::{PatternCatalog, Rgb},
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn color_strategy() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

/// Small palette so collisions between equal colors are common.
fn palette_color_strategy() -> impl Strategy<Value = Rgb> {
    prop_oneof![
        Just(Rgb::new(239, 68, 68)),
        Just(Rgb::new(59, 130, 246)),
        Just(Rgb::new(34, 197, 94)),
        Just(Rgb::new(234, 179, 8)),
    ]
}

fn grid_strategy() -> impl Strategy<Value = Grid> {
    (1usize..=12, 1usize..=12).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(
            (any::<bool>(), palette_color_strategy()),
            rows * cols,
        )
        .prop_map(move |cells| {
            let mut grid = Grid::new(rows, cols);
            for (i, (alive, color)) in cells.into_iter().enumerate() {
                if alive {
                    let (x, y) = ((i % cols) as i64, (i / cols) as i64);
                    grid.set(x, y, Cell::live(color, Origin(i as u64 + 1)));
                }
            }
            grid
        })
    })
}

fn recolor(grid: &Grid, color: Rgb) -> Grid {
    let mut out = Grid::new(grid.rows(), grid.cols());
    for (x, y) in grid.alive_coords() {
        out.set(x as i64, y as i64, Cell::live(color, Origin::NONE));
    }
    out
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn step_is_deterministic(grid in grid_strategy()) {
        let before = grid.clone();
        let a = step(&grid);
        let b = step(&grid);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&grid, &before);
        prop_assert_eq!((a.rows(), a.cols()), (grid.rows(), grid.cols()));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Blend order invariance
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn blend_ignores_order(colors in prop::collection::vec(color_strategy(), 0..10)) {
        let mut reversed = colors.clone();
        reversed.reverse();
        prop_assert_eq!(blend(&colors), blend(&reversed));

        let mut sorted = colors.clone();
        sorted.sort_by_key(|c| (c.g, c.b, c.r));
        prop_assert_eq!(blend(&colors), blend(&sorted));
    }

    #[test]
    fn blend_of_copies_is_identity(color in color_strategy(), n in 1usize..9) {
        prop_assert_eq!(blend(&vec![color; n]), color);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Merge idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn merge_is_idempotent(grid in grid_strategy()) {
        let mut once = grid.clone();
        merge_components(&mut once);
        let mut twice = once.clone();
        prop_assert_eq!(merge_components(&mut twice), 0);
        prop_assert_eq!(once, twice);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Fingerprint color independence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fingerprint_ignores_color(grid in grid_strategy(), color in color_strategy()) {
        prop_assert_eq!(fingerprint(&grid), fingerprint(&recolor(&grid, color)));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. One color per component after a step
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn components_are_monochrome_after_step(grid in grid_strategy()) {
        let next = step(&grid);
        for component in find_components(&next) {
            prop_assert_eq!(component.colors.len(), 1);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Wraparound addressing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn wrapped_coordinates_alias(
        grid in grid_strategy(),
        x in -100i64..100,
        y in -100i64..100,
        kx in -3i64..3,
        ky in -3i64..3,
    ) {
        let (cols, rows) = (grid.cols() as i64, grid.rows() as i64);
        prop_assert_eq!(grid.get(x, y), grid.get(x + kx * cols, y + ky * rows));
        prop_assert_eq!(analyze(&grid, x, y), analyze(&grid, x + kx * cols, y + ky * rows));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Stamping never erases
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn stamp_pattern_only_adds(
        grid in grid_strategy(),
        index in 0usize..10,
        cx in -20i64..20,
        cy in -20i64..20,
        color in color_strategy(),
    ) {
        let catalog = PatternCatalog::builtin();
        let pattern = catalog.by_index(index).unwrap();
        let before = grid.clone();
        let stamped = stamp_pattern(&grid, pattern, cx, cy, color);

        prop_assert_eq!(&grid, &before);
        for (x, y) in grid.alive_coords() {
            prop_assert!(stamped.is_alive(x as i64, y as i64));
        }
        for (px, py) in pattern.live_offsets() {
            let tx = cx + px as i64 - pattern.anchor.0 as i64;
            let ty = cy + py as i64 - pattern.anchor.1 as i64;
            prop_assert_eq!(stamped.get(tx, ty).color, color);
        }
    }

    #[test]
    fn stamp_custom_sets_every_coordinate(
        grid in grid_strategy(),
        coords in prop::collection::vec((-50i64..50, -50i64..50), 1..20),
        color in color_strategy(),
    ) {
        let coords: Vec<Coord> = coords.into_iter().map(Coord::from).collect();
        let stamped = stamp_custom(&grid, &coords, color);
        for c in &coords {
            prop_assert!(stamped.is_alive(c.x, c.y));
            prop_assert_eq!(stamped.get(c.x, c.y).color, color);
        }
        prop_assert!(stamped.count_alive() >= grid.count_alive());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Rule correctness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rules_match_b3_s23(grid in grid_strategy()) {
        let next = apply_rules(&grid);
        for y in 0..grid.rows() as i64 {
            for x in 0..grid.cols() as i64 {
                let cell = grid.get(x, y);
                let hood = analyze(&grid, x, y);
                let out = next.get(x, y);
                match (cell.alive, hood.live()) {
                    (true, 2) | (true, 3) => {
                        prop_assert_eq!(out, cell);
                    }
                    (false, 3) => {
                        prop_assert!(out.alive);
                        prop_assert_eq!(out.color, blend(hood.colors()));
                        prop_assert_eq!(out.origin, Origin::NONE);
                    }
                    _ => {
                        prop_assert!(!out.alive);
                    }
                }
            }
        }
    }
}

//! Chroma Life - Toroidal Game of Life with colored cells.
//!
//! This crate evolves a wrap-around binary cellular automaton under the
//! classic B3/S23 rules, extended with per-cell colors: newborn cells
//! inherit the mean color of their parents, touching regions of different
//! colors are unified into one blended color, and repeated configurations
//! are detected so a session can freeze once it settles.
//!
//! # Architecture
//!
//! The crate is split into three main modules:
//!
//! - `schema`: Colors, patterns, configuration and seeds
//! - `compute`: The engine (grid, rules, merging, stability, stamping)
//! - `session`: Placement quota, counters and tick cadence around the engine
//!
//! # Example
//!
//! ```rust,no_run
//! use chroma_life::{
//!     compute::{Grid, fingerprint, stamp_pattern, step},
//!     schema::{PatternCatalog, Rgb},
//! };
//!
//! let catalog = PatternCatalog::builtin();
//! let glider = catalog.get("Glider").expect("builtin pattern");
//!
//! let grid = Grid::new(32, 32);
//! let mut grid = stamp_pattern(&grid, glider, 16, 16, Rgb::new(0xef, 0x44, 0x44));
//! for _ in 0..4 {
//!     grid = step(&grid);
//! }
//!
//! println!("Alive: {} ({})", grid.count_alive(), fingerprint(&grid));
//! ```

pub mod compute;
pub mod schema;
pub mod session;

// WebAssembly bindings (only for wasm32 target)
#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-export commonly used types
pub use compute::{Cell, Grid, GridStats, StabilityTracker};
pub use schema::{Pattern, PatternCatalog, Rgb, Seed, SessionConfig};
pub use session::{Session, TickOutcome};

//! Seed types for initializing Chroma Life sessions.

use serde::{Deserialize, Serialize};

use super::Rgb;

/// Initial placements applied before a run starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    /// Placements in application order.
    pub placements: Vec<Placement>,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            placements: vec![Placement::Pattern {
                name: "R-Pentomino".to_string(),
                at: None,
                color: None,
            }],
        }
    }
}

/// A single placement request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Placement {
    /// Stamp a catalog pattern.
    Pattern {
        /// Catalog pattern name.
        name: String,
        /// Target cell (x, y); None = grid center.
        #[serde(default)]
        at: Option<(i64, i64)>,
        /// Placement color; None = drawn from the palette.
        #[serde(default)]
        color: Option<Rgb>,
    },
    /// Free-drawn cells, wrapped onto the grid.
    Custom {
        /// List of (x, y) coordinates.
        cells: Vec<(i64, i64)>,
        /// Placement color; None = drawn from the palette.
        #[serde(default)]
        color: Option<Rgb>,
    },
}

//! Stampable patterns and the pattern catalog.

use serde::{Deserialize, Serialize};

/// A fixed binary mask stamped onto the grid around an anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// Display name, also used for lookups.
    pub name: String,
    /// Row-major mask; 1 marks a live cell, 0 leaves the target untouched.
    pub mask: Vec<Vec<u8>>,
    /// (x, y) position inside the mask that lands on the requested cell.
    pub anchor: (usize, usize),
}

impl Pattern {
    pub fn new(name: impl Into<String>, mask: Vec<Vec<u8>>, anchor: (usize, usize)) -> Self {
        Self {
            name: name.into(),
            mask,
            anchor,
        }
    }

    /// Build a pattern from ASCII rows, `#` for live and anything else for empty.
    pub fn from_rows(name: impl Into<String>, rows: &[&str], anchor: (usize, usize)) -> Self {
        let mask = rows
            .iter()
            .map(|row| row.bytes().map(|b| u8::from(b == b'#')).collect())
            .collect();
        Self::new(name, mask, anchor)
    }

    /// Mask height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.mask.len()
    }

    /// Widest mask row in cells.
    pub fn width(&self) -> usize {
        self.mask.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Number of live cells in the mask.
    pub fn population(&self) -> usize {
        self.live_offsets().count()
    }

    /// Mask-local (x, y) of every live cell, in row-major scan order.
    pub fn live_offsets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.mask.iter().enumerate().flat_map(|(py, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &v)| v == 1)
                .map(move |(px, _)| (px, py))
        })
    }

    /// Check the mask is non-empty, binary, and contains the anchor.
    pub fn validate(&self) -> Result<(), PatternError> {
        if self.population() == 0 {
            return Err(PatternError::EmptyMask {
                name: self.name.clone(),
            });
        }
        for row in &self.mask {
            if let Some(&value) = row.iter().find(|&&v| v > 1) {
                return Err(PatternError::NonBinaryMask {
                    name: self.name.clone(),
                    value,
                });
            }
        }
        let (ax, ay) = self.anchor;
        if ay >= self.height() || ax >= self.width() {
            return Err(PatternError::AnchorOutOfBounds {
                name: self.name.clone(),
                anchor: self.anchor,
            });
        }
        Ok(())
    }
}

/// Pattern validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("Pattern {name:?} has no live cells")]
    EmptyMask { name: String },
    #[error("Pattern {name:?} mask contains {value}; only 0 and 1 are allowed")]
    NonBinaryMask { name: String, value: u8 },
    #[error("Pattern {name:?} anchor {anchor:?} lies outside its mask")]
    AnchorOutOfBounds { name: String, anchor: (usize, usize) },
}

/// Ordered collection of patterns available for placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PatternCatalog {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }

    /// The classic Life patterns shipped with the game.
    pub fn builtin() -> Self {
        Self::new(vec![
            Pattern::from_rows("Glider", &[".#.", "..#", "###"], (1, 1)),
            Pattern::from_rows(
                "Lightweight Spaceship",
                &[".####", "#...#", "....#", "#..#."],
                (2, 2),
            ),
            Pattern::from_rows(
                "Middleweight Spaceship",
                &["...#.", ".####", "#...#", "....#", "#..#."],
                (2, 2),
            ),
            Pattern::from_rows("R-Pentomino", &[".##", "##.", ".#."], (1, 1)),
            Pattern::from_rows("Diehard", &["......#.", "##......", ".#...###"], (4, 1)),
            Pattern::from_rows("Acorn", &[".#.....", "...#...", "##..###"], (3, 1)),
            Pattern::from_rows("Blinker", &["###"], (1, 0)),
            Pattern::from_rows("Toad", &[".###", "###."], (2, 1)),
            Pattern::from_rows("Beacon", &["##..", "##..", "..##", "..##"], (2, 2)),
            Pattern::from_rows(
                "Pulsar",
                &[
                    "..###...###..",
                    ".............",
                    "#....#.#....#",
                    "#....#.#....#",
                    "#....#.#....#",
                    "..###...###..",
                    ".............",
                    "..###...###..",
                    "#....#.#....#",
                    "#....#.#....#",
                    "#....#.#....#",
                    ".............",
                    "..###...###..",
                ],
                (6, 6),
            ),
        ])
    }

    /// Look up a pattern by exact name.
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.name == name)
    }

    /// Pattern at catalog position `index`.
    pub fn by_index(&self, index: usize) -> Option<&Pattern> {
        self.patterns.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.name.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Validate every pattern in the catalog.
    pub fn validate(&self) -> Result<(), PatternError> {
        self.patterns.iter().try_for_each(Pattern::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_mask() {
        let glider = Pattern::from_rows("Glider", &[".#.", "..#", "###"], (1, 1));
        assert_eq!(glider.mask, vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 1, 1]]);
        assert_eq!(glider.population(), 5);
        assert_eq!((glider.width(), glider.height()), (3, 3));
    }

    #[test]
    fn test_live_offsets_row_major() {
        let toad = Pattern::from_rows("Toad", &[".###", "###."], (2, 1));
        let offsets: Vec<_> = toad.live_offsets().collect();
        assert_eq!(offsets, vec![(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = PatternCatalog::builtin();
        assert_eq!(catalog.len(), 10);
        catalog.validate().unwrap();
        assert_eq!(catalog.get("Pulsar").map(Pattern::population), Some(48));
        assert_eq!(catalog.get("Acorn").map(Pattern::population), Some(7));
        assert!(catalog.get("Gosper Glider Gun").is_none());
    }

    #[test]
    fn test_validate_rejects_bad_masks() {
        let empty = Pattern::new("Empty", vec![vec![0, 0]], (0, 0));
        assert!(matches!(empty.validate(), Err(PatternError::EmptyMask { .. })));

        let non_binary = Pattern::new("Two", vec![vec![1, 2]], (0, 0));
        assert!(matches!(
            non_binary.validate(),
            Err(PatternError::NonBinaryMask { value: 2, .. })
        ));

        let far_anchor = Pattern::new("Far", vec![vec![1]], (3, 0));
        assert!(matches!(
            far_anchor.validate(),
            Err(PatternError::AnchorOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_catalog_serde_is_a_list() {
        let catalog = PatternCatalog::new(vec![Pattern::from_rows("Dot", &["#"], (0, 0))]);
        let json = serde_json::to_value(&catalog).unwrap();
        assert!(json.is_array());
        let back: PatternCatalog = serde_json::from_value(json).unwrap();
        assert_eq!(back, catalog);
    }
}

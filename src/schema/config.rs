//! Configuration types for Chroma Life sessions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{PatternCatalog, PatternError, Rgb, default_palette};

fn default_max_placements() -> u32 {
    10
}

fn default_tick_interval_ms() -> u64 {
    50
}

fn default_history_window() -> usize {
    10
}

/// Top-level session configuration.
///
/// Everything the surrounding application owns: grid shape, placement
/// quota, tick cadence, stability window, palette and pattern catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Grid height in cells.
    pub rows: usize,
    /// Grid width in cells.
    pub cols: usize,
    /// Placements allowed per session.
    #[serde(default = "default_max_placements")]
    pub max_placements: u32,
    /// Minimum milliseconds between two advancing ticks.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Number of recent fingerprints kept for stability detection.
    #[serde(default = "default_history_window")]
    pub history_window: usize,
    /// Colors available to placements.
    #[serde(default = "default_palette")]
    pub palette: Vec<Rgb>,
    /// Patterns available to stamp placements.
    #[serde(default)]
    pub patterns: PatternCatalog,
    /// Seed for pattern/color selection (None = entropy).
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: 64,
            cols: 64,
            max_placements: default_max_placements(),
            tick_interval_ms: default_tick_interval_ms(),
            history_window: default_history_window(),
            palette: default_palette(),
            patterns: PatternCatalog::builtin(),
            random_seed: None,
        }
    }
}

impl SessionConfig {
    /// Default configuration with the given grid shape.
    pub fn with_dimensions(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Total number of cells (rows * cols).
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.history_window == 0 {
            return Err(ConfigError::InvalidHistoryWindow);
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.patterns.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        self.patterns.validate()?;
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions (rows, cols) must be non-zero")]
    InvalidDimensions,
    #[error("History window must be non-zero")]
    InvalidHistoryWindow,
    #[error("Palette must contain at least one color")]
    EmptyPalette,
    #[error("Pattern catalog must contain at least one pattern")]
    EmptyCatalog,
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

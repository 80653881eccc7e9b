//! Session state machine around the engine.
//!
//! Tracks what the player-facing application needs between generations:
//! placement quota, generation and score counters, pause state, tick
//! throttling, and the stability freeze. Timestamps come from the caller,
//! so the session stays synchronous and deterministic.

mod chooser;

pub use chooser::*;

use serde::{Deserialize, Serialize};

use crate::{
    compute::{
        Coord, Grid, StabilityTracker, count_alive, fingerprint, stamp_custom, stamp_pattern, step,
    },
    schema::{ConfigError, Pattern, Placement, Rgb, Seed, SessionConfig},
};

/// Why a placement was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("No placements left this session")]
    NoPlacementsLeft,
    #[error("Grid has zero area")]
    EmptyGrid,
    #[error("Placement contains no cells")]
    EmptyPlacement,
    #[error("Unknown pattern {0:?}")]
    UnknownPattern(String),
}

/// What a successful placement did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementSummary {
    /// Stamped pattern name (None for free-drawn placements).
    pub pattern: Option<String>,
    pub color: Rgb,
    /// Live cells on the grid after the placement.
    pub alive: usize,
    pub placements_left: u32,
}

/// Result of advancing one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub generation: u64,
    pub alive: usize,
    pub stable: bool,
    /// True only on the generation where stability was first detected.
    pub just_stabilized: bool,
}

/// Result of a scheduler tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or frozen by stability.
    Idle,
    /// Called again before the minimum interval elapsed.
    Throttled,
    Advanced(GenerationReport),
}

/// Serializable snapshot of the session counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatus {
    pub rows: usize,
    pub cols: usize,
    pub generation: u64,
    pub score: usize,
    pub high_score: usize,
    pub placements_left: u32,
    pub running: bool,
    pub stable: bool,
    pub stabilization_generation: Option<u64>,
}

/// One play session on a single grid.
pub struct Session {
    config: SessionConfig,
    grid: Grid,
    tracker: StabilityTracker,
    chooser: Box<dyn Chooser + Send>,
    generation: u64,
    score: usize,
    high_score: usize,
    placements_left: u32,
    running: bool,
    stable: bool,
    stabilization_generation: Option<u64>,
    last_tick_ms: Option<u64>,
}

impl Session {
    /// Create a session with a chooser seeded from `config.random_seed`.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        let chooser = match config.random_seed {
            Some(seed) => SeededChooser::new(seed),
            None => SeededChooser::random(),
        };
        Self::with_chooser(config, chooser)
    }

    /// Create a session with an explicit pattern/color chooser.
    pub fn with_chooser<C>(config: SessionConfig, chooser: C) -> Result<Self, ConfigError>
    where
        C: Chooser + Send + 'static,
    {
        config.validate()?;
        Ok(Self {
            grid: Grid::new(config.rows, config.cols),
            tracker: StabilityTracker::new(config.history_window),
            chooser: Box::new(chooser),
            generation: 0,
            score: 0,
            high_score: 0,
            placements_left: config.max_placements,
            running: false,
            stable: false,
            stabilization_generation: None,
            last_tick_ms: None,
            config,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Live cells after the last placement or generation.
    pub fn score(&self) -> usize {
        self.score
    }

    pub fn high_score(&self) -> usize {
        self.high_score
    }

    pub fn placements_left(&self) -> u32 {
        self.placements_left
    }

    pub fn can_place(&self) -> bool {
        self.placements_left > 0
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_stable(&self) -> bool {
        self.stable
    }

    /// Generation at which stability was first detected.
    pub fn stabilization_generation(&self) -> Option<u64> {
        self.stabilization_generation
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            generation: self.generation,
            score: self.score,
            high_score: self.high_score,
            placements_left: self.placements_left,
            running: self.running,
            stable: self.stable,
            stabilization_generation: self.stabilization_generation,
        }
    }

    /// Stamp a pattern and color picked by the chooser, anchored at (cx, cy).
    pub fn place_random_pattern(
        &mut self,
        cx: i64,
        cy: i64,
    ) -> Result<PlacementSummary, PlacementError> {
        self.check_can_place()?;
        let index = self.chooser.choose(self.config.patterns.len());
        let pattern = self
            .config
            .patterns
            .by_index(index)
            .cloned()
            .ok_or(PlacementError::EmptyPlacement)?;
        let color = self.pick_color();
        Ok(self.stamp(&pattern, cx, cy, color))
    }

    /// Stamp a named catalog pattern. `color: None` draws from the palette.
    pub fn place_pattern(
        &mut self,
        name: &str,
        cx: i64,
        cy: i64,
        color: Option<Rgb>,
    ) -> Result<PlacementSummary, PlacementError> {
        self.check_can_place()?;
        let pattern = self
            .config
            .patterns
            .get(name)
            .cloned()
            .ok_or_else(|| PlacementError::UnknownPattern(name.to_string()))?;
        let color = color.unwrap_or_else(|| self.pick_color());
        Ok(self.stamp(&pattern, cx, cy, color))
    }

    /// Set free-drawn cells alive. `color: None` draws from the palette.
    pub fn place_custom(
        &mut self,
        coords: &[Coord],
        color: Option<Rgb>,
    ) -> Result<PlacementSummary, PlacementError> {
        self.check_can_place()?;
        if coords.is_empty() {
            return Err(PlacementError::EmptyPlacement);
        }
        let color = color.unwrap_or_else(|| self.pick_color());
        let grid = stamp_custom(&self.grid, coords, color);
        log::debug!("Placed {} drawn cells in {}", coords.len(), color);
        Ok(self.commit_placement(grid, None, color))
    }

    /// Apply every placement of a seed, stopping at the first refusal.
    pub fn apply_seed(&mut self, seed: &Seed) -> Result<Vec<PlacementSummary>, PlacementError> {
        let center = ((self.grid.cols() / 2) as i64, (self.grid.rows() / 2) as i64);
        seed.placements
            .iter()
            .map(|placement| match placement {
                Placement::Pattern { name, at, color } => {
                    let (x, y) = at.unwrap_or(center);
                    self.place_pattern(name, x, y, *color)
                }
                Placement::Custom { cells, color } => {
                    let coords: Vec<Coord> = cells.iter().copied().map(Coord::from).collect();
                    self.place_custom(&coords, *color)
                }
            })
            .collect()
    }

    /// Advance one generation unconditionally.
    ///
    /// Runs the engine even when paused or stable; freezing is [`Session::tick`]'s job.
    pub fn advance(&mut self) -> GenerationReport {
        let next = step(&self.grid);
        let alive = count_alive(&next);
        let stable = self.tracker.check_and_record(fingerprint(&next));

        self.grid = next;
        self.generation += 1;
        self.score = alive;
        self.high_score = self.high_score.max(alive);

        let just_stabilized = stable && !self.stable;
        if just_stabilized {
            self.stabilization_generation = Some(self.generation);
            log::info!(
                "Stabilized at generation {} with {} live cells",
                self.generation,
                alive
            );
        }
        self.stable = stable;
        self.running = !stable;

        log::trace!("Generation {}: {} alive", self.generation, alive);

        GenerationReport {
            generation: self.generation,
            alive,
            stable,
            just_stabilized,
        }
    }

    /// Scheduler entry point; advances at most once per tick interval.
    pub fn tick(&mut self, now_ms: u64) -> TickOutcome {
        if !self.running || self.stable {
            return TickOutcome::Idle;
        }
        if let Some(last) = self.last_tick_ms {
            if now_ms.saturating_sub(last) < self.config.tick_interval_ms {
                return TickOutcome::Throttled;
            }
        }
        self.last_tick_ms = Some(now_ms);
        TickOutcome::Advanced(self.advance())
    }

    /// Flip the running flag; returns the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Start over on an empty grid of the same size. The high score survives.
    pub fn reset(&mut self) {
        self.reset_to(self.grid.rows(), self.grid.cols());
    }

    /// Switch to new grid dimensions; a no-op when they are unchanged.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        if rows == self.grid.rows() && cols == self.grid.cols() {
            return;
        }
        log::debug!("Resizing grid to {}x{}", cols, rows);
        self.reset_to(rows, cols);
    }

    fn reset_to(&mut self, rows: usize, cols: usize) {
        self.grid = Grid::new(rows, cols);
        self.tracker.clear();
        self.generation = 0;
        self.score = 0;
        self.placements_left = self.config.max_placements;
        self.running = false;
        self.stable = false;
        self.stabilization_generation = None;
        self.last_tick_ms = None;
    }

    fn check_can_place(&self) -> Result<(), PlacementError> {
        if self.placements_left == 0 {
            log::debug!("Placement refused: quota exhausted");
            return Err(PlacementError::NoPlacementsLeft);
        }
        if self.grid.is_empty() {
            return Err(PlacementError::EmptyGrid);
        }
        Ok(())
    }

    fn pick_color(&mut self) -> Rgb {
        let palette = &self.config.palette;
        palette[self.chooser.choose(palette.len())]
    }

    fn stamp(&mut self, pattern: &Pattern, cx: i64, cy: i64, color: Rgb) -> PlacementSummary {
        let grid = stamp_pattern(&self.grid, pattern, cx, cy, color);
        log::debug!("Placed {} at ({}, {}) in {}", pattern.name, cx, cy, color);
        self.commit_placement(grid, Some(pattern.name.clone()), color)
    }

    fn commit_placement(
        &mut self,
        grid: Grid,
        pattern: Option<String>,
        color: Rgb,
    ) -> PlacementSummary {
        self.grid = grid;
        self.placements_left -= 1;
        self.running = true;
        self.stable = false;
        self.stabilization_generation = None;
        self.score = count_alive(&self.grid);
        self.tracker.clear();

        PlacementSummary {
            pattern,
            color,
            alive: self.score,
            placements_left: self.placements_left,
        }
    }
}

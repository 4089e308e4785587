//! Timer-driven simulation state: play/pause, speed, and stroke editing
//!
//! The runner owns the live grid and every mutation path into it. The host
//! loop sleeps `tick_interval()` between `tick()` calls; pausing just stops
//! further ticks, it never exposes a half-computed generation.

use super::StepEngine;
use crate::error::GridError;
use crate::grid::{Coord, GridStore};
use crate::paint;
use crate::pattern::PatternRecord;
use std::time::Duration;

/// Slowest supported tick rate.
pub const MIN_SPEED: u64 = 1;
/// Fastest supported tick rate.
pub const MAX_SPEED: u64 = 10;

/// Interactive simulation driver around a grid store.
#[derive(Debug, Clone)]
pub struct Simulation<G> {
    grid: G,
    is_running: bool,
    speed: u64,
    generation: u64,
    last_stroke_cell: Option<Coord>,
}

impl<G: GridStore> Simulation<G> {
    /// Wrap a grid in a paused simulation at the given speed (clamped to
    /// `[1, 10]`).
    pub fn new(grid: G, speed: u64) -> Self {
        Self {
            grid,
            is_running: false,
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
            generation: 0,
            last_stroke_cell: None,
        }
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn speed(&self) -> u64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: u64) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }

    /// Delay the host loop should wait between ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / self.speed)
    }

    pub fn play(&mut self) {
        self.is_running = true;
    }

    pub fn pause(&mut self) {
        self.is_running = false;
    }

    /// Flip between running and paused, returning the new state.
    pub fn toggle_running(&mut self) -> bool {
        self.is_running = !self.is_running;
        self.is_running
    }

    /// Advance one generation if running. Returns whether a step happened.
    pub fn tick(&mut self) -> bool {
        if !self.is_running {
            return false;
        }
        self.step();
        true
    }

    /// Advance one generation unconditionally (the "next frame" action).
    /// The old snapshot is swapped out atomically.
    pub fn step(&mut self) {
        self.grid = StepEngine::advance(&self.grid);
        self.generation += 1;
    }

    /// Toggle a single cell. Out-of-range coordinates are ignored, matching
    /// the interactive contract where a stray click is a no-op.
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        let _ = self.grid.toggle(row, col);
    }

    /// Start a drag stroke: toggle the anchor cell and remember it so the
    /// next motion event can be line-filled from here.
    pub fn begin_stroke(&mut self, row: usize, col: usize) {
        self.toggle_cell(row, col);
        self.last_stroke_cell = Some((row, col));
    }

    /// Continue a drag stroke. Every cell on the line from the previous
    /// reported position is marked live, so fast pointer motion leaves no
    /// gaps; out-of-range cells on the line are skipped silently.
    pub fn extend_stroke(&mut self, row: usize, col: usize) {
        if let Some(previous) = self.last_stroke_cell {
            for (r, c) in paint::cells_between(previous, (row, col)) {
                let _ = self.grid.set_live(r, c, true);
            }
        }
        self.last_stroke_cell = Some((row, col));
    }

    pub fn end_stroke(&mut self) {
        self.last_stroke_cell = None;
    }

    /// Kill every cell and reset the generation counter.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Resize the board, preserving the overlapping region.
    pub fn resize(&mut self, new_width: usize, new_height: usize) -> Result<(), GridError> {
        self.grid.resize(new_width, new_height)
    }

    /// Replace the whole board from a pattern record and reset the
    /// generation counter. A malformed record leaves the board untouched.
    pub fn load_pattern(&mut self, record: &PatternRecord) -> Result<(), GridError> {
        self.grid.replace_from(record)?;
        self.generation = 0;
        Ok(())
    }

    /// Capture the current board as a pattern record.
    pub fn save_pattern(&self) -> PatternRecord {
        PatternRecord::encode(&self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoundaryPolicy;
    use crate::grid::DenseGrid;

    fn blank_sim(width: usize, height: usize) -> Simulation<DenseGrid> {
        let grid =
            DenseGrid::with_dimensions(width, height, 20, BoundaryPolicy::Bounded).unwrap();
        Simulation::new(grid, 5)
    }

    #[test]
    fn test_tick_only_advances_while_running() {
        let mut sim = blank_sim(4, 4);
        for &(row, col) in &[(1, 0), (1, 1), (1, 2)] {
            sim.toggle_cell(row, col);
        }

        assert!(!sim.tick());
        assert_eq!(sim.generation(), 0);

        sim.play();
        assert!(sim.tick());
        assert_eq!(sim.generation(), 1);

        sim.pause();
        assert!(!sim.tick());
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_step_ignores_pause() {
        let mut sim = blank_sim(3, 3);
        sim.step();
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_speed_clamped_and_interval() {
        let mut sim = blank_sim(3, 3);

        sim.set_speed(25);
        assert_eq!(sim.speed(), 10);
        assert_eq!(sim.tick_interval(), Duration::from_millis(100));

        sim.set_speed(0);
        assert_eq!(sim.speed(), 1);
        assert_eq!(sim.tick_interval(), Duration::from_millis(1000));
    }

    #[test]
    fn test_stroke_fills_gaps() {
        let mut sim = blank_sim(8, 8);

        sim.begin_stroke(0, 0);
        sim.extend_stroke(3, 3);
        sim.end_stroke();

        // The whole diagonal is filled despite getting only two events.
        for i in 0..4 {
            assert!(sim.grid().get(i, i).unwrap(), "({}, {}) skipped", i, i);
        }
        assert_eq!(sim.grid().live_count(), 4);
    }

    #[test]
    fn test_stroke_out_of_range_is_silent() {
        let mut sim = blank_sim(4, 4);

        sim.begin_stroke(3, 3);
        sim.extend_stroke(3, 7); // runs off the right edge
        sim.end_stroke();

        assert_eq!(sim.grid().live_count(), 1);
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let mut sim = blank_sim(3, 3);
        sim.toggle_cell(9, 9);
        assert!(sim.grid().is_empty());
    }

    #[test]
    fn test_clear_resets_generation() {
        let mut sim = blank_sim(3, 3);
        sim.toggle_cell(1, 1);
        sim.step();
        sim.clear();

        assert!(sim.grid().is_empty());
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_pattern_round_trip_through_runner() {
        let mut sim = blank_sim(6, 5);
        sim.toggle_cell(2, 3);
        sim.toggle_cell(4, 0);

        let record = sim.save_pattern();
        let mut other = blank_sim(3, 3);
        other.load_pattern(&record).unwrap();

        assert_eq!(other.grid().width(), 6);
        assert_eq!(other.grid().height(), 5);
        assert_eq!(other.grid().live_cells(), vec![(2, 3), (4, 0)]);
    }
}

// session.rs - A running simulation: two generations and a counter

use std::path::Path;

use rand::Rng;
use tracing::{debug, trace};

use crate::codec;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::rules::next_generation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    MaxGenerations,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Stopped(StopReason),
}

/// Owns the current and previous generation of one simulation.
///
/// The session never stops itself; drivers poll [`Session::status`] (or the
/// two predicates behind it) and decide whether to keep calling
/// [`Session::step`].
#[derive(Debug, Clone)]
pub struct Session {
    previous: Grid,
    current: Grid,
    generation: u64,
    max_generations: Option<u64>,  // None = unbounded
}

impl Session {
    pub fn new<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        randomize: bool,
        max_generations: Option<u64>,
        rng: &mut R,
    ) -> Result<Self> {
        let current = Grid::new(rows, cols, randomize, rng)?;
        Self::from_grid(current, max_generations)
    }

    /// Starts a run from an existing grid. The previous generation is all dead.
    pub fn from_grid(current: Grid, max_generations: Option<u64>) -> Result<Self> {
        let previous = Grid::dead(current.rows(), current.cols())?;
        debug!(
            rows = current.rows(),
            cols = current.cols(),
            live = current.live_count(),
            ?max_generations,
            "session created"
        );
        Ok(Self { previous, current, generation: 1, max_generations })
    }

    /// Loads a grid file into an unbounded session.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_grid(codec::read_file(path)?, None)
    }

    /// Writes the current generation.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        codec::write_file(path, &self.current)
    }

    pub fn step(&mut self) {
        let next = next_generation(&self.current);
        self.previous = std::mem::replace(&mut self.current, next);
        self.generation += 1;
        trace!(generation = self.generation, live = self.current.live_count(), "step");
    }

    /// True once the counter has passed the cap. The counter starts at 1, so
    /// a cap of `n` allows `n` steps before this turns true.
    pub fn is_max_generations_exceeded(&self) -> bool {
        self.max_generations.is_some_and(|max| self.generation > max)
    }

    /// False once a step left the grid exactly as it was.
    pub fn is_changing(&self) -> bool {
        self.previous != self.current
    }

    pub fn status(&self) -> Status {
        if self.is_max_generations_exceeded() {
            Status::Stopped(StopReason::MaxGenerations)
        } else if !self.is_changing() {
            Status::Stopped(StopReason::Stable)
        } else {
            Status::Running
        }
    }

    /// Begins a new run from `grid`, which must match the session's size.
    pub fn reset(&mut self, grid: Grid) -> Result<()> {
        if !grid.same_size(&self.current) {
            return Err(Error::InvalidDimensions { rows: grid.rows(), cols: grid.cols() });
        }
        self.previous = Grid::dead(grid.rows(), grid.cols())?;
        self.current = grid;
        self.generation = 1;
        debug!(live = self.current.live_count(), "session reset");
        Ok(())
    }

    /// Flips one cell of the current generation. Meant for editing between runs.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        self.current.toggle(row, col)
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn previous(&self) -> &Grid {
        &self.previous
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn max_generations(&self) -> Option<u64> {
        self.max_generations
    }

    pub fn rows(&self) -> usize {
        self.current.rows()
    }

    pub fn cols(&self) -> usize {
        self.current.cols()
    }
}

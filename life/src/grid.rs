// grid.rs - Grid types for Conway's Game of Life

use rand::Rng;

use crate::error::{Error, Result};

pub type TRow = Vec<bool>;

/// A fixed-size rectangle of cells, `true` for alive.
///
/// Rows and columns are set once at construction; every row holds exactly
/// `cols` cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<TRow>,
}

impl Grid {
    /// Random grid when `randomize` is set, all dead otherwise.
    pub fn new<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        randomize: bool,
        rng: &mut R,
    ) -> Result<Self> {
        if randomize {
            Self::random(rows, cols, rng)
        } else {
            Self::dead(rows, cols)
        }
    }

    pub fn dead(rows: usize, cols: usize) -> Result<Self> {
        check_dimensions(rows, cols)?;
        Ok(Self { rows, cols, cells: vec![vec![false; cols]; rows] })
    }

    /// Every cell is independently alive with probability 0.5.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        check_dimensions(rows, cols)?;
        let cells = (0..rows)
            .map(|_| (0..cols).map(|_| rng.gen_bool(0.5)).collect())
            .collect();
        Ok(Self { rows, cols, cells })
    }

    /// Takes ownership of an already built matrix after checking it is
    /// non-empty and rectangular.
    pub fn from_rows(cells: Vec<TRow>) -> Result<Self> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        check_dimensions(rows, cols)?;

        if let Some(bad) = cells.iter().position(|row| row.len() != cols) {
            return Err(Error::malformed(
                bad + 1,
                format!("expected {} cells, found {}", cols, cells[bad].len()),
            ));
        }
        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &[TRow] {
        &self.cells
    }

    /// `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.cells.get(row)?.get(col).copied()
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    /// Returns `false` and leaves the grid alone when the position is outside.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = alive;
                true
            }
            None => false,
        }
    }

    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        match self.get(row, col) {
            Some(alive) => self.set(row, col, !alive),
            None => false,
        }
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().map(|row| row.iter().filter(|&&c| c).count()).sum()
    }

    /// Positions of the live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().filter(|&(_, &alive)| alive).map(move |(c, _)| (r, c))
        })
    }

    /// Same-sized grid whose cells are `f(row, col, alive)` of this one.
    pub fn map_cells<F>(&self, mut f: F) -> Grid
    where
        F: FnMut(usize, usize, bool) -> bool,
    {
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(r, row)| row.iter().enumerate().map(|(c, &alive)| f(r, c, alive)).collect())
            .collect();
        Grid { rows: self.rows, cols: self.cols, cells }
    }

    pub fn same_size(&self, other: &Grid) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(Error::InvalidDimensions { rows, cols });
    }
    Ok(())
}

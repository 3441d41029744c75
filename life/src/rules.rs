// rules.rs - B3/S23 transition

use crate::grid::Grid;
use crate::neighbors::live_neighbors;

/// Fate of one cell given its live neighbour count.
pub fn next_state(alive: bool, count: u8) -> bool {
    match (alive, count) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Builds the next generation into a fresh grid.
///
/// Every count reads `current` only, so cells updated earlier in the sweep
/// never influence later ones.
pub fn next_generation(current: &Grid) -> Grid {
    current.map_cells(|row, col, alive| next_state(alive, live_neighbors(current, row, col)))
}

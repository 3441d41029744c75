// neighbors.rs - Moore neighbourhood on a closed board
//
// Cells past any edge do not exist: they are skipped, never wrapped.

use crate::grid::Grid;

/// The eight neighbour offsets, in lookup order.
pub const OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (1, 1), (0, 1), (1, 0),
    (-1, 1), (1, -1), (-1, 0), (0, -1),
];

/// In-bounds neighbour positions of `(row, col)`.
///
/// Corners yield 3 positions, other edge cells 5, interior cells 8.
pub fn neighbors(grid: &Grid, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    let (rows, cols) = (grid.rows(), grid.cols());
    OFFSETS.into_iter().filter_map(move |(dr, dc)| {
        let r = row.checked_add_signed(dr).filter(|&r| r < rows)?;
        let c = col.checked_add_signed(dc).filter(|&c| c < cols)?;
        Some((r, c))
    })
}

/// Number of live neighbours, in `0..=8`.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for (r, c) in neighbors(grid, row, col) {
        if grid.is_alive(r, c) { count += 1; }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(rows: usize, cols: usize) -> Grid {
        Grid::from_rows(vec![vec![true; cols]; rows]).unwrap()
    }

    #[test]
    fn candidate_counts_by_position() {
        let grid = Grid::dead(4, 5).unwrap();
        for &(r, c) in &[(0, 0), (0, 4), (3, 0), (3, 4)] {
            assert_eq!(neighbors(&grid, r, c).count(), 3, "corner ({r}, {c})");
        }
        for &(r, c) in &[(0, 2), (3, 1), (1, 0), (2, 4)] {
            assert_eq!(neighbors(&grid, r, c).count(), 5, "edge ({r}, {c})");
        }
        assert_eq!(neighbors(&grid, 1, 1).count(), 8);
        assert_eq!(neighbors(&grid, 2, 3).count(), 8);
    }

    #[test]
    fn full_board_counts_match_topology() {
        let grid = full(3, 3);
        assert_eq!(live_neighbors(&grid, 0, 0), 3);
        assert_eq!(live_neighbors(&grid, 0, 1), 5);
        assert_eq!(live_neighbors(&grid, 1, 1), 8);
    }

    #[test]
    fn opposite_edge_does_not_wrap() {
        let mut grid = Grid::dead(3, 3).unwrap();
        grid.set(2, 2, true);
        assert_eq!(live_neighbors(&grid, 0, 0), 0);
        grid.set(0, 2, true);
        assert_eq!(live_neighbors(&grid, 0, 0), 0);
        assert_eq!(live_neighbors(&grid, 1, 1), 2);
    }

    #[test]
    fn cell_itself_is_not_counted() {
        let mut grid = Grid::dead(3, 3).unwrap();
        grid.set(1, 1, true);
        assert_eq!(live_neighbors(&grid, 1, 1), 0);
        assert_eq!(live_neighbors(&grid, 0, 0), 1);
    }

    #[test]
    fn single_row_and_column_grids() {
        let row = full(1, 4);
        assert_eq!(neighbors(&row, 0, 0).count(), 1);
        assert_eq!(live_neighbors(&row, 0, 2), 2);

        let single = full(1, 1);
        assert_eq!(neighbors(&single, 0, 0).count(), 0);
    }
}

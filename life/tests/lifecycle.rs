// Canonical patterns driven through a full session.

use life::patterns::{BLINKER, BLOCK, GLIDER, TOAD};
use life::{Grid, Session, Status, StopReason};

fn shifted(grid: &Grid, dr: usize, dc: usize) -> Vec<(usize, usize)> {
    grid.live_cells().map(|(r, c)| (r + dr, c + dc)).collect()
}

fn session_with(
    pattern: &life::Pattern,
    rows: usize,
    cols: usize,
    origin: (usize, usize),
) -> Session {
    let mut grid = Grid::dead(rows, cols).unwrap();
    pattern.stamp(&mut grid, origin);
    Session::from_grid(grid, None).unwrap()
}

#[test]
fn glider_moves_one_cell_diagonally_every_four_steps() {
    let mut session = session_with(&GLIDER, 8, 8, (2, 2));
    let start = session.current().clone();

    for _ in 0..4 {
        session.step();
        assert!(session.is_changing(), "glider stalled at generation {}", session.generation());
    }

    assert_eq!(session.generation(), 5);
    assert_eq!(session.current().live_cells().collect::<Vec<_>>(), shifted(&start, 1, 1));
}

#[test]
fn glider_fits_a_six_by_six_board() {
    let mut session = session_with(&GLIDER, 6, 6, (0, 0));
    let start = session.current().clone();
    for _ in 0..4 {
        session.step();
        assert!(session.is_changing());
    }
    assert_eq!(session.current().live_cells().collect::<Vec<_>>(), shifted(&start, 1, 1));
}

#[test]
fn block_is_a_still_life() {
    let mut session = session_with(&BLOCK, 4, 4, (1, 1));
    let start = session.current().clone();

    session.step();

    assert_eq!(*session.current(), start);
    assert!(!session.is_changing());
    assert_eq!(session.status(), Status::Stopped(StopReason::Stable));
}

#[test]
fn blinker_has_period_two() {
    let mut session = session_with(&BLINKER, 5, 5, (2, 1));
    let horizontal = session.current().clone();

    session.step();
    assert_eq!(session.current().live_cells().collect::<Vec<_>>(), vec![(1, 2), (2, 2), (3, 2)]);
    assert!(session.is_changing());

    session.step();
    assert_eq!(*session.current(), horizontal);
    assert!(session.is_changing());
}

#[test]
fn toad_oscillates_without_reporting_stability() {
    let mut session = session_with(&TOAD, 6, 6, (2, 1));
    let start = session.current().clone();
    for _ in 0..10 {
        session.step();
        assert_eq!(session.status(), Status::Running);
    }
    assert_eq!(*session.current(), start);
}

#[test]
fn max_generations_threshold() {
    let mut session = Session::from_grid(BLINKER.centered(5, 5).unwrap(), Some(3)).unwrap();
    assert!(!session.is_max_generations_exceeded());

    let mut observed = Vec::new();
    for _ in 0..4 {
        session.step();
        observed.push((session.generation(), session.is_max_generations_exceeded()));
    }

    assert_eq!(observed, vec![(2, false), (3, false), (4, true), (5, true)]);
}

#[test]
fn driver_loop_stops_on_stability() {
    // A lone pair of cells dies out after one step, then stays dead
    let mut grid = Grid::dead(5, 5).unwrap();
    grid.set(2, 2, true);
    grid.set(2, 3, true);
    let mut session = Session::from_grid(grid, Some(100)).unwrap();

    session.step();
    while session.status() == Status::Running {
        session.step();
    }

    assert_eq!(session.status(), Status::Stopped(StopReason::Stable));
    assert_eq!(session.generation(), 3);
    assert_eq!(session.current().live_count(), 0);
}

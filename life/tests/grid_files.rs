// Reading and writing grid files on disk.

use std::fs;

use life::{Error, Grid, Session, codec};
use tempfile::TempDir;

#[test]
fn save_then_load_keeps_the_current_generation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blinker.txt");

    let blinker = life::patterns::BLINKER.centered(5, 5).unwrap();
    let mut session = Session::from_grid(blinker, None).unwrap();
    session.step();
    session.save(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "00000\n00100\n00100\n00100\n00000\n");

    let loaded = Session::from_file(&path).unwrap();
    assert_eq!(loaded.current(), session.current());
    assert_eq!(loaded.generation(), 1);
    assert_eq!(loaded.max_generations(), None);
    assert_eq!(loaded.previous().live_count(), 0);
}

#[test]
fn dimensions_come_from_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wide.txt");
    fs::write(&path, "0000000\n0111000\n").unwrap();

    let grid = codec::read_file(&path).unwrap();
    assert_eq!((grid.rows(), grid.cols()), (2, 7));
    assert_eq!(grid.live_count(), 3);
}

#[test]
fn mismatched_rows_in_a_file_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ragged.txt");
    fs::write(&path, "010\n01\n").unwrap();

    match Session::from_file(&path) {
        Err(Error::MalformedGrid { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected MalformedGrid, got {other:?}"),
    }
}

#[test]
fn non_utf8_content_is_malformed_not_io() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, b"01\n0\xff\n").unwrap();

    match codec::read_file(&path) {
        Err(Error::MalformedGrid { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected MalformedGrid, got {other:?}"),
    }
}

#[test]
fn empty_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    assert!(matches!(codec::read_file(&path), Err(Error::MalformedGrid { .. })));
}

#[test]
fn missing_file_reports_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.txt");

    let err = codec::read_file(&path).unwrap_err();
    assert!(matches!(&err, Error::Io { path: p, .. } if *p == path));
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn writing_into_a_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_such_dir").join("grid.txt");
    let grid = Grid::dead(2, 2).unwrap();

    assert!(matches!(codec::write_file(&path, &grid), Err(Error::Io { .. })));
}

#[test]
fn overwriting_replaces_previous_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("grid.txt");
    fs::write(&path, "111111\n111111\n111111\n").unwrap();

    codec::write_file(&path, &"01\n10\n".parse::<Grid>().unwrap()).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "01\n10\n");
}

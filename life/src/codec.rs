// codec.rs - Plain text grid files
//
// One line per row, one '0' (dead) or '1' (alive) per cell, every row
// newline-terminated. There is no header: the row count is the number of
// lines and the column count is the length of the first line.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::grid::{Grid, TRow};

const DEAD: char = '0';
const ALIVE: char = '1';

/// Builds a grid from its rows. Nothing is returned unless every line is valid.
pub fn decode<I, S>(lines: I) -> Result<Grid>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cells: Vec<TRow> = Vec::new();
    let mut cols = 0;

    for (index, line) in lines.into_iter().enumerate() {
        let line_no = index + 1;
        let row = decode_row(line.as_ref(), line_no)?;

        if index == 0 {
            if row.is_empty() {
                return Err(Error::malformed(line_no, "first line is empty"));
            }
            cols = row.len();
        } else if row.len() != cols {
            return Err(Error::malformed(
                line_no,
                format!("expected {} cells, found {}", cols, row.len()),
            ));
        }
        cells.push(row);
    }

    if cells.is_empty() {
        return Err(Error::malformed(0, "no lines"));
    }
    Grid::from_rows(cells)
}

fn decode_row(line: &str, line_no: usize) -> Result<TRow> {
    line.chars()
        .enumerate()
        .map(|(col, ch)| match ch {
            DEAD => Ok(false),
            ALIVE => Ok(true),
            other => Err(Error::malformed(
                line_no,
                format!("invalid character {:?} at column {}", other, col + 1),
            )),
        })
        .collect()
}

/// Decodes a whole file's text; `\n` and `\r\n` terminators are both accepted.
pub fn parse(text: &str) -> Result<Grid> {
    decode(text.lines())
}

pub fn encode(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.rows() * (grid.cols() + 1));
    for row in grid.cells() {
        out.extend(row.iter().map(|&alive| if alive { ALIVE } else { DEAD }));
        out.push('\n');
    }
    out
}

pub fn read_file(path: impl AsRef<Path>) -> Result<Grid> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let text = String::from_utf8(bytes).map_err(|e| {
        let bad = e.utf8_error().valid_up_to();
        let line = e.as_bytes()[..bad].iter().filter(|&&b| b == b'\n').count() + 1;
        Error::malformed(line, "invalid UTF-8")
    })?;
    let grid = parse(&text)?;
    debug!(path = %path.display(), rows = grid.rows(), cols = grid.cols(), "grid loaded");
    Ok(grid)
}

pub fn write_file(path: impl AsRef<Path>, grid: &Grid) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(encode(grid).as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), rows = grid.rows(), cols = grid.cols(), "grid saved");
    Ok(())
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}

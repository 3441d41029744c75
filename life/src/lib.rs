//! Conway's Game of Life on a closed, fixed-size board.
//!
//! [`Session`] holds the running simulation; [`codec`] reads and writes the
//! `0`/`1` text format. The library logs through `tracing` and leaves the
//! choice of subscriber to the binary.

pub mod codec;
pub mod error;
pub mod grid;
pub mod neighbors;
pub mod patterns;
pub mod rules;
pub mod session;

pub use error::{Error, Result};
pub use grid::{Grid, TRow};
pub use patterns::{PATTERNS, Pattern};
pub use session::{Session, Status, StopReason};

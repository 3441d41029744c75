// config.rs - Command line options and the viewer settings derived from them

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use egui::Color32;
use life::{Session, codec, patterns};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(name = "life_view")]
#[command(about = "Run Conway's Game of Life in a window or headless")]
pub struct Cli {
    /// Grid height in cells
    #[arg(long, default_value_t = 50)]
    pub rows: usize,

    /// Grid width in cells
    #[arg(long, default_value_t = 50)]
    pub cols: usize,

    /// Start from a grid file of '0'/'1' lines (its size wins over --rows/--cols)
    #[arg(long, short, conflicts_with = "pattern")]
    pub file: Option<PathBuf>,

    /// Start from a named pattern centered on the grid
    #[arg(long, short)]
    pub pattern: Option<String>,

    /// Start with every cell dead instead of a random grid
    #[arg(long, conflicts_with_all = ["file", "pattern"])]
    pub blank: bool,

    /// Seed for random grids; omitted means a fresh seed every run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Report the run as finished once this many steps have been taken
    #[arg(long)]
    pub max_generations: Option<u64>,

    /// Generations per second in the window
    #[arg(long, default_value_t = 5.0)]
    pub speed: f32,

    /// Cell edge in pixels
    #[arg(long, default_value_t = 15.0)]
    pub cell_size: f32,

    /// Step until the run stops, without opening a window
    #[arg(long)]
    pub headless: bool,

    /// Where to write the grid (headless: final grid; window: Save button)
    #[arg(long)]
    pub save: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ViewConfig {
    pub cell_size: f32,
    pub spacing: f32,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            cell_size: 15.0,
            spacing: 0.5,
            update_interval: Duration::from_millis(200),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
        }
    }
}

/// Time between generations for a speed in generations per second.
pub fn interval_for(speed: f32) -> Duration {
    Duration::from_millis((1000.0 / speed) as u64)
}

impl Cli {
    pub fn view_config(&self) -> Result<ViewConfig> {
        if !(self.speed.is_finite() && self.speed > 0.0) {
            bail!(
                "--speed must be a positive number of generations per second, got {}",
                self.speed
            );
        }
        if !(self.cell_size.is_finite() && self.cell_size >= 1.0) {
            bail!("--cell-size must be at least one pixel, got {}", self.cell_size);
        }
        Ok(ViewConfig {
            cell_size: self.cell_size,
            update_interval: interval_for(self.speed),
            ..ViewConfig::default()
        })
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Builds the starting session from whichever source the flags name.
    pub fn session(&self, rng: &mut StdRng) -> Result<Session> {
        if let Some(path) = &self.file {
            let grid = codec::read_file(path)
                .with_context(|| format!("Failed to load grid from {}", path.display()))?;
            return Ok(Session::from_grid(grid, self.max_generations)?);
        }

        if let Some(name) = &self.pattern {
            let Some(pattern) = patterns::find(name) else {
                let known: Vec<_> = patterns::PATTERNS.iter().map(|p| p.name).collect();
                bail!("Unknown pattern {name:?}; known patterns: {}", known.join(", "));
            };
            let grid = pattern
                .centered(self.rows, self.cols)
                .with_context(|| format!("Failed to place {}", pattern.name))?;
            return Ok(Session::from_grid(grid, self.max_generations)?);
        }

        Session::new(self.rows, self.cols, !self.blank, self.max_generations, rng)
            .context("Failed to create grid")
    }
}

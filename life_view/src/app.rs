// app.rs - Viewer state around a life::Session

use std::path::PathBuf;
use std::time::Instant;

use life::{Grid, PATTERNS, Session, Status, StopReason};
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::config::ViewConfig;

pub struct LifeApp {
    session: Session,
    rng: StdRng,

    pub config: ViewConfig,
    pub is_running: bool,
    pub last_update: Instant,
    pub selected_pattern: usize,
    pub save_path: String,
    pub message: String,  // Last stop reason or save result, shown under the controls
}

impl LifeApp {
    pub fn new(
        session: Session,
        rng: StdRng,
        config: ViewConfig,
        save_path: Option<PathBuf>,
    ) -> Self {
        let save_path = save_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "life.txt".to_owned());
        Self {
            session,
            rng,
            config,
            is_running: false,
            last_update: Instant::now(),
            selected_pattern: 0,
            save_path,
            message: String::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Advances one generation and pauses once the session reports a stop.
    pub fn update_generation(&mut self) {
        self.session.step();
        if let Status::Stopped(reason) = self.session.status() {
            self.is_running = false;
            self.message = describe(reason, self.session.generation());
            info!(generation = self.session.generation(), ?reason, "simulation stopped");
        }
    }

    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
        if self.is_running {
            self.last_update = Instant::now();
            self.message.clear();
        }
    }

    pub fn clear_grid(&mut self) {
        self.restart(Grid::dead(self.session.rows(), self.session.cols()));
    }

    pub fn apply_random_pattern(&mut self) {
        let grid = Grid::random(self.session.rows(), self.session.cols(), &mut self.rng);
        self.restart(grid);
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            self.restart(pattern.centered(self.session.rows(), self.session.cols()));
        }
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if !self.is_running {
            self.session.toggle(row, col);
        }
    }

    pub fn save(&mut self) {
        self.message = match self.session.save(&self.save_path) {
            Ok(()) => {
                info!(path = %self.save_path, generation = self.session.generation(), "grid saved");
                format!("Saved generation {} to {}", self.session.generation(), self.save_path)
            }
            Err(e) => {
                warn!(error = %e, "save failed");
                format!("Save failed: {e}")
            }
        };
    }

    fn restart(&mut self, grid: life::Result<Grid>) {
        self.is_running = false;
        self.message.clear();
        if let Err(e) = grid.and_then(|grid| self.session.reset(grid)) {
            warn!(error = %e, "could not restart session");
            self.message = e.to_string();
        }
    }
}

fn describe(reason: StopReason, generation: u64) -> String {
    match reason {
        StopReason::MaxGenerations => format!("Stopped: generation limit reached at {generation}"),
        StopReason::Stable => format!("Stopped: grid stable at generation {generation}"),
    }
}

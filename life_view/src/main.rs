// main.rs - Conway's Game of Life: window viewer and headless runner

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::egui;
use life::{Session, Status, StopReason};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod app;
mod config;
mod ui;

use app::LifeApp;
use config::Cli;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries the final grid in headless mode
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let view_config = cli.view_config()?;
    let mut rng = cli.rng();
    let session = cli.session(&mut rng)?;
    info!(
        rows = session.rows(),
        cols = session.cols(),
        live = session.current().live_count(),
        max_generations = ?session.max_generations(),
        "session ready"
    );

    if cli.headless {
        return run_headless(session, cli.save.as_deref());
    }

    let pitch = view_config.cell_size + view_config.spacing;
    let width = (pitch * session.cols() as f32 + 40.0).clamp(640.0, 1600.0);
    let height = (pitch * session.rows() as f32 + 260.0).clamp(480.0, 1200.0);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height]),
        ..Default::default()
    };

    let app = LifeApp::new(session, rng, view_config, cli.save);
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )
    .map_err(|e| anyhow!("Viewer failed: {e}"))
}

/// Steps until the session reports a stop, then prints or saves the grid.
fn run_headless(mut session: Session, save: Option<&Path>) -> Result<()> {
    if session.max_generations().is_none() {
        warn!("no --max-generations given; running until the grid stops changing");
    }

    let reason = run_until_stopped(&mut session);
    info!(
        generation = session.generation(),
        live = session.current().live_count(),
        ?reason,
        "simulation stopped"
    );

    match save {
        Some(path) => {
            session
                .save(path)
                .with_context(|| format!("Failed to save grid to {}", path.display()))?;
            info!(path = %path.display(), "grid saved");
        }
        None => print!("{}", session.current()),
    }
    Ok(())
}

fn run_until_stopped(session: &mut Session) -> StopReason {
    loop {
        match session.status() {
            Status::Stopped(reason) => return reason,
            Status::Running => session.step(),
        }
    }
}

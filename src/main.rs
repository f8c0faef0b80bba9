//! Boggle in the terminal
//!
//! Click tiles to spell. Click the last tile again to submit.

use anyhow::{Context, Result};
use boggle::app::{Game, Panels};
use boggle::config::Config;
use boggle::game::lexicon::Lexicon;
use boggle::tui::{self, Tui};
use clap::Parser;
use crossterm::event;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let config = Config::parse();

    let log_path = config.log_path()?;
    init_logging(&log_path)?;
    tracing::info!(?config, "starting");

    // The game can't run without a word list
    let lexicon = Lexicon::load(&config.lexicon)
        .with_context(|| format!("could not load word list {}", config.lexicon.display()))?;

    let mut game = Game::new(lexicon, Panels::new(), config.rng());

    let mut terminal = Tui::new()?;
    terminal.enter()?;
    // Terminal cleanup happens via Tui::drop, including on error
    run(&mut terminal, &mut game)?;
    tracing::info!(score = game.score(), words = game.found_words().len(), "finished");
    Ok(())
}

/// Main event loop: draw, wait for one event, apply it.
fn run(terminal: &mut Tui, game: &mut Game) -> Result<()> {
    loop {
        let layout = terminal.draw(game)?;

        let event = event::read()?;
        let Some(activation) = tui::activation_for(&event, &layout) else {
            continue;
        };

        if game.handle(activation).is_break() {
            return Ok(());
        }
    }
}

/// Log to a file; the terminal belongs to the UI.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("could not open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

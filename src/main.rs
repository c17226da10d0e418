//! Terminal arcade runner (default binary).
//!
//! Stands in for the LED matrix and its button: the core is ticked every
//! 16 ms with the current button level, and the frame is drawn with the
//! diff-based cell renderer.

use std::cell::Cell;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use pixel_arcade::core::{ArcadeConfig, Console, ScoreSink};
use pixel_arcade::input::{should_quit, ButtonInput};
use pixel_arcade::term::{CellBuffer, PixelView, StatusLine, TerminalRenderer, Viewport};
use pixel_arcade::types::{VariantKind, TICK_MS};

#[derive(Parser)]
#[command(name = "pixel-arcade")]
#[command(about = "Single-button 16x16 pixel arcade in the terminal")]
#[command(version)]
struct Cli {
    /// TOML file overriding the game tuning tables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed (defaults to one derived from the clock)
    #[arg(short, long)]
    seed: Option<u32>,

    /// Write tracing output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Variant whose title card is shown first
    #[arg(long, value_parser = parse_variant, default_value = "runner")]
    start: VariantKind,

    /// Print the effective tuning as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

fn parse_variant(s: &str) -> Result<VariantKind, String> {
    VariantKind::from_name(s).ok_or_else(|| {
        format!("unknown variant '{s}' (expected runner, dodger, stacker or calibrator)")
    })
}

/// Mirrors published scores into a cell the status line reads.
struct SharedScore(Rc<Cell<u32>>);

impl ScoreSink for SharedScore {
    fn publish(&mut self, score: u32) {
        self.0.set(score);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = match &cli.config {
        Some(path) => ArcadeConfig::from_file(path)?,
        None => ArcadeConfig::default(),
    };
    if cli.dump_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }
    let seed = cli.seed.unwrap_or_else(clock_seed);
    tracing::info!(seed, start = cli.start.as_str(), "starting arcade");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, seed, cli.start);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    // The terminal is in raw mode on the alternate screen, so logs go to the file only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, config: ArcadeConfig, seed: u32, start: VariantKind) -> Result<()> {
    let shown_score = Rc::new(Cell::new(0));
    let mut console = Console::try_new(config, seed)?
        .with_score_sink(Box::new(SharedScore(Rc::clone(&shown_score))))
        .with_selection(start);

    let mut input = ButtonInput::new().with_release_events(term.keyboard_enhanced());
    tracing::debug!(release_events = input.release_events(), "button input ready");

    let view = PixelView::default();
    let mut fb = CellBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(());
                    }
                    input.handle_key_event(key);
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            console.tick(input.is_pressed());
            let status = StatusLine {
                score: shown_score.get(),
                ..StatusLine::from_console(&console)
            };

            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(console.frame(), &status, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }
    }
}

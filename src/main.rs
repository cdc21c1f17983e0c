mod app;
mod config;
mod data;
mod navigation;
mod section;
mod status;
mod transaction;
mod ui;
mod view;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::{App, AppEvent};
use config::Config;
use data::{SnapshotFileSource, StaticSource, TransactionSource};

#[derive(Parser, Debug)]
#[command(name = "merchant-console")]
#[command(about = "Terminal merchant dashboard")]
#[command(version)]
struct Cli {
    /// Config file path [default: <config dir>/merchant-console/config.toml]
    #[arg(long)]
    config: Option<String>,

    /// JSON snapshot to display instead of the built-in data
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.log_file.as_deref())?;

    // Load config
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| Config::default_path().to_string_lossy().into_owned());
    let config = Config::load(&config_path)?;

    // Load data
    let source: Box<dyn TransactionSource> = match cli.snapshot.clone().or_else(|| config.snapshot_path()) {
        Some(path) => Box::new(SnapshotFileSource::new(path)),
        None => Box::new(StaticSource),
    };
    let snapshot = data::load_snapshot(source.as_ref())
        .with_context(|| format!("Failed to load {}", source.describe()))?;

    // Built before the screen switch so theme warnings reach stderr intact
    let mut app = App::new(snapshot, config);

    enable_raw_mode()?;
    with_restored_terminal(enter_screen, |terminal| run_app(terminal, &mut app), restore_terminal)
}

/// Run `body` on whatever `setup` produces, then call `restore` no matter
/// which of the two failed. The first error wins.
fn with_restored_terminal<T>(
    setup: impl FnOnce() -> Result<T>,
    body: impl FnOnce(&mut T) -> Result<()>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<()> {
    let result = setup().and_then(|mut terminal| body(&mut terminal));
    let restored = restore();
    result.and(restored)
}

fn enter_screen() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode();
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, cursor::Show)
        .context("Failed to leave alternate screen")?;
    raw.context("Failed to disable raw mode")
}

/// Log level when `RUST_LOG` is unset. Stderr shares the tty with the UI, so
/// only warnings go there; a log file gets the full info stream.
fn default_filter(log_file: Option<&Path>) -> &'static str {
    match log_file {
        Some(_) => "merchant_console=info",
        None => "merchant_console=warn",
    }
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(log_file).into());
    let registry = tracing_subscriber::registry().with(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
    Ok(())
}

/// Draw, wait for one event, apply it. Each event is fully handled before the
/// next is read.
fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let outcome = match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height))
            }
            // Resize and focus changes just redraw
            _ => AppEvent::Continue,
        };

        if outcome == AppEvent::Quit {
            tracing::info!("Exiting");
            return Ok(());
        }
    }
}

//! Formulário Acadêmico ADS - terminal enrollment form
//!
//! A Ratatui-based form that masks and validates Brazilian personal data
//! (CPF, phones, CEP) and fills the address from ViaCEP for minors.

mod app;
mod cep;
mod config;
mod platform;
mod state;
mod ui;
mod validation;

use anyhow::{Context, Result};
use app::App;
use cep::ViaCepClient;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::{
    fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

#[tokio::main]
async fn main() -> Result<()> {
    let (config, config_error) = match TuiConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (TuiConfig::default(), Some(e)),
    };

    // Initialize logging
    init_logging(&config);
    if let Some(e) = config_error {
        tracing::warn!("ignoring configuration: {e:#}");
    }

    let cep_url = config.cep_service_url();
    let client = ViaCepClient::new(&cep_url).context("failed to create CEP client")?;
    tracing::info!(%cep_url, "starting formulario-ads");
    let mut app = App::new(Arc::new(client));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Send logs to the configured file. The TUI owns the terminal, so stderr is
/// only used when no file can be opened.
fn init_logging(config: &TuiConfig) {
    let writer = match config.log_file().map(|path| open_log_file(&path)) {
        Some(Ok(file)) => BoxMakeWriter::new(Mutex::new(file)),
        _ => BoxMakeWriter::new(io::stderr),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "formulario_ads=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Apply finished CEP lookups before drawing
        app.poll_lookups();

        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }

                app.handle_key(key);
            }
        }

        if app.should_quit() {
            tracing::info!("exiting");
            return Ok(());
        }
    }
}

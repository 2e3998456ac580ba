//! TacPlay Admin - a terminal dashboard for the TacPlay booking platform
//!
//! Browse players, field owners, sessions and earnings, and manage the
//! admin account, from the terminal.

mod app;
mod config;
mod data;
mod error;
mod events;
mod logging;
mod ui;

use std::io::{self, Stdout};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info, warn};

use crate::app::{App, Screen};
use crate::config::Config;
use crate::error::AppError;
use crate::events::EventHandler;
use crate::ui::{init_theme, load_theme};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "tacplay-admin", version, about)]
struct Cli {
    /// Screen to open at startup.
    #[arg(long, value_enum)]
    screen: Option<Screen>,

    /// Rows per page in the lists (10, 25 or 50 in the size cycle).
    #[arg(long)]
    page_size: Option<usize>,

    /// Use this config file instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (log_guard, logging_error) = match logging::init() {
        Ok(guard) => (Some(guard), None),
        Err(e) => (None, Some(AppError::other(format!("Logging disabled: {e:#}")))),
    };

    if let Some(guard) = &log_guard {
        info!(log_dir = %guard.log_dir().display(), "Logging to file");
    }

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let (mut config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            (Config::default(), Some(AppError::from(e)))
        }
    };

    if let Some(screen) = cli.screen {
        config.settings.start_screen = screen;
    }
    if let Some(page_size) = cli.page_size {
        config.settings.items_per_page = page_size;
    }
    config
        .settings
        .validate()
        .map_err(AppError::from)
        .context("invalid command line arguments")?;

    init_theme(load_theme(&config.settings.theme));

    let tick_rate = config.settings.tick_rate_ms;
    let mut app = App::with_config(config);
    for e in logging_error.iter().chain(load_error.iter()) {
        app.handle_error(e);
    }

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app, EventHandler::with_tick_rate(tick_rate));
    let restored = restore_terminal();

    if let Err(e) = &result {
        error!(error = %e, "Application error");
    }

    result?;
    restored?;
    Ok(())
}

fn setup_terminal() -> Result<Tui, AppError> {
    enable_raw_mode().map_err(|e| AppError::terminal(format!("raw mode: {e}")))?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(AppError::terminal(format!("alternate screen: {e}")));
    }
    Terminal::new(CrosstermBackend::new(stdout)).map_err(AppError::from)
}

fn restore_terminal() -> Result<(), AppError> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}

/// Leave raw mode and the alternate screen before the default hook prints
/// the panic message.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        error!(panic = %info, "Application panicked");
        default_hook(info);
    }));
}

/// Draw, wait for an event, update; until the app asks to quit.
fn run(terminal: &mut Tui, app: &mut App, events: EventHandler) -> Result<(), AppError> {
    info!(screen = ?app.screen(), "Entering event loop");
    while !app.should_quit() {
        terminal.draw(|frame| app.view(frame))?;
        let event = events.next()?;
        app.update(event);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_screen_and_page_size() {
        let cli = Cli::parse_from(["tacplay-admin", "--screen", "field-owners", "--page-size", "25"]);
        assert_eq!(cli.screen, Some(Screen::FieldOwners));
        assert_eq!(cli.page_size, Some(25));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_panic_hook_still_reports_panic() {
        install_panic_hook();
        let result = std::panic::catch_unwind(|| panic!("render failed"));
        let _ = std::panic::take_hook();
        assert!(result.is_err());
    }
}

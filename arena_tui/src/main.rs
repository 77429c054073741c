//! arena_tui - Terminal frontend for the monster arena

mod app;
mod config;
mod ui;

use app::App;
use arena_core::{PlayerState, Session, SessionError};
use config::TuiConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    let config = TuiConfig::from_env().map_err(invalid_config)?;
    setup_logging(&config)?;

    let catalog = config.catalog().map_err(invalid_config)?;
    let monsters = config.monsters().map_err(invalid_config)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut player = PlayerState::new();
    player.credit_gold(config.starting_gold);
    player.credit_gems(config.starting_gems);
    let mut session = Session::new(&catalog, &monsters, &config.constants).with_player(player);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    let mut app = App::new(terminal);
    let mut sink = app.sink();
    let result = session.run(&mut app, &mut sink, &mut rng);

    // Restore terminal
    disable_raw_mode()?;
    execute!(app.terminal_mut().backend_mut(), LeaveAlternateScreen)?;
    app.terminal_mut().show_cursor()?;

    match result {
        Ok(()) => Ok(()),
        Err(SessionError::Input(arena_core::InputError::Interrupted)) => {
            tracing::info!("session interrupted");
            Ok(())
        }
        Err(err) => {
            tracing::error!(%err, "session aborted");
            Err(io::Error::new(io::ErrorKind::Other, err))
        }
    }
}

fn invalid_config(err: arena_core::config::ConfigError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, err)
}

/// Log to the configured file only; the terminal belongs to the UI
fn setup_logging(config: &TuiConfig) -> io::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)?;

    let env_filter = log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}", path.display());
    Ok(())
}

/// Directives from `RUST_LOG` when set and valid, otherwise `info`
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).to_string().to_lowercase(), "info");
    }

    #[test]
    fn test_log_filter_honours_rust_log() {
        let filter = log_filter(Some("arena_core=debug")).to_string().to_lowercase();
        assert_eq!(filter, "arena_core=debug");
        assert!(!filter.contains("info"));
    }
}

//! LovePlay - games for couples, in your terminal
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! loveplay
//!
//! # CLI mode (for scripting)
//! loveplay spin
//! loveplay pick truth --json
//! loveplay set --left Budi --right Sari
//! ```

use std::io::{stdout, Stdout};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{Event, EventStream, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::{Stream, StreamExt};
use ratatui::{backend::CrosstermBackend, Terminal};

use loveplay::app::{App, AppOptions};
use loveplay::cli::{Cli, Command, ExitCode, Output};
use loveplay::commands;
use loveplay::config::Config;
use loveplay::prefs::{FilePreferences, PreferenceStore};
use loveplay::ui::shell;

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Redraw interval while idle
const TICK_RATE: Duration = Duration::from_millis(100);
/// Redraw interval while the wheel is spinning (~60 fps)
const FRAME_RATE: Duration = Duration::from_millis(16);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, config_error) = match Config::load(cli.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    if let Some(path) = config.log_path() {
        if let Err(e) = init_logging(&path) {
            eprintln!("Warning: logging disabled ({}): {}", path.display(), e);
        }
    }
    log::info!("Starting loveplay {}", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        log::warn!("Ignoring invalid config: {:#}", e);
    }

    let prefs_path = config
        .preferences_path(cli.prefs.as_deref())
        .context("Could not determine preferences path")?;
    let store = FilePreferences::open(prefs_path);

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        let exit_code = run_cli(cli, store);
        std::process::exit(exit_code.into());
    } else {
        // TUI mode: launch interactive interface
        let options = AppOptions {
            dark: config.resolve_theme(cli.theme).is_dark(),
            spin_duration: config.spin_duration(),
        };
        run_tui(store, options).await
    }
}

/// Log to a file, truncated on each run. The terminal belongs to the TUI.
fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .try_init()?;
    Ok(())
}

/// Run CLI command and return exit code
fn run_cli(cli: Cli, mut store: FilePreferences) -> ExitCode {
    let output = Output::new(&cli);

    match cli.command {
        Some(Command::Spin(cmd)) => commands::spin_cmd(cmd, &output),
        Some(Command::Pick(cmd)) => commands::pick_cmd(cmd, &store, &output),
        Some(Command::Add(cmd)) => commands::add_cmd(cmd, &mut store, &output),
        Some(Command::Show(cmd)) => commands::show_cmd(cmd, &store, &output),
        Some(Command::Set(cmd)) => commands::set_cmd(cmd, &mut store, &output),
        None => ExitCode::Success,
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui(store: impl PreferenceStore + 'static, options: AppOptions) -> Result<()> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(Box::new(store), options);

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Always restore terminal and flush pending writes, even on error
    app.flush_preferences();
    restore_terminal(&mut terminal)?;
    log::info!("Exiting");

    result
}

/// What ended one wait of the event loop
#[derive(Debug, PartialEq, Eq)]
enum Wake {
    Key(KeyEvent),
    /// Timer, resize or other non-key input: just redraw
    Frame,
    /// Input stream ended
    Closed,
}

/// Wait for the next key press or until `timeout` elapses
async fn next_wake<S>(events: &mut S, timeout: Duration) -> Result<Wake>
where
    S: Stream<Item = std::io::Result<Event>> + Unpin,
{
    tokio::select! {
        event = events.next() => match event {
            // Only handle key press events (ignore releases on Windows)
            Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => Ok(Wake::Key(key)),
            Some(Ok(_)) => Ok(Wake::Frame),
            Some(Err(e)) => Err(e.into()),
            None => Ok(Wake::Closed),
        },
        _ = tokio::time::sleep(timeout) => Ok(Wake::Frame),
    }
}

/// Main event loop - handles input, advances animation, renders UI
async fn run_event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut events = EventStream::new();

    while app.running {
        app.tick(Instant::now());
        terminal.draw(|frame| shell::render(frame, app))?;

        let timeout = if app.is_animating() { FRAME_RATE } else { TICK_RATE };
        match next_wake(&mut events, timeout).await? {
            Wake::Key(key) => {
                app.handle_key(key);
            }
            Wake::Frame => {}
            Wake::Closed => break,
        }

        app.flush_preferences();
    }

    Ok(())
}

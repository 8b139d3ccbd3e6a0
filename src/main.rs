use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use tylex::app::config::Config;
use tylex::app::r#loop::{run_loop, LoopSettings};
use tylex::app::state::{AppState, Surface};
use tylex::infrastructure::LocalBridge;
use tylex::logging::{self, Verbosity};

/// Snippet search palette and management panel.
#[derive(Parser, Debug)]
#[command(name = "tylex", version, about)]
struct Cli {
    #[arg(
        long,
        value_name = "FILE",
        env = "TYLEX_CONFIG",
        global = true,
        help = "Configuration file (default: ~/.config/tylex/config.toml)"
    )]
    config: Option<PathBuf>,
    #[arg(short, long, global = true, help = "Log debug output")]
    verbose: bool,
    #[arg(short, long, global = true, help = "Log errors only")]
    quiet: bool,
    #[arg(
        long,
        value_name = "FILE",
        global = true,
        help = "Log file (default: ~/.cache/tylex/tylex.log)"
    )]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Mode,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Open the search palette
    Search,
    /// Open the snippet management panel
    Manage,
}

impl From<Mode> for Surface {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Search => Surface::Palette,
            Mode::Manage => Surface::Panel,
        }
    }
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init(
        Verbosity::from_flags(cli.verbose, cli.quiet),
        cli.log_file.as_deref(),
    )?;
    setup_panic_hook();

    // Config errors surface before the terminal enters raw mode
    let config = Config::load(cli.config.as_deref())?;
    let (bridge, mut outbox) = match config.store_path() {
        Some(path) => LocalBridge::open(&config, path)?,
        None => LocalBridge::new(&config),
    };
    let app_state = AppState::new(cli.command.into(), &config);
    let settings = LoopSettings::from(&config);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, Arc::new(bridge), settings).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %format!("{err:#}"), "controller failed");
        println!("{err:?}");
    }

    // Pasted expansions, in commit order
    while let Ok(value) = outbox.try_recv() {
        println!("{value}");
    }

    Ok(())
}

mod backend;
mod config;
mod consts;
mod events;
mod logging;
mod models;
mod runtime;
mod session;
mod ui;
mod workers;

use crate::backend::{Backend, HttpBackend, SimulatedBackend};
use crate::config::{get_config_path, Config};
use crate::session::{run_headless_mode, run_tui_mode, setup_session, SessionData};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{error::Error, io};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Log events to the console instead of opening the TUI.
        #[arg(long)]
        headless: bool,

        /// Periodic refresh interval in seconds (default 30).
        #[arg(long, value_name = "SECONDS")]
        refresh_secs: Option<u64>,

        /// Base URL of the framework daemon; the simulated backend is used
        /// when omitted.
        #[arg(long, value_name = "URL")]
        backend_url: Option<String>,

        /// Initially selected tab (system, testing, plugins, logs).
        /// Unknown names are ignored.
        #[arg(long, value_name = "TAB")]
        tab: Option<String>,
    },
    /// Fetch system information once and print it
    Status {
        /// Base URL of the framework daemon; the simulated backend is used
        /// when omitted.
        #[arg(long, value_name = "URL")]
        backend_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = load_config();
    let args = Args::parse();

    match args.command {
        Command::Start {
            headless,
            refresh_secs,
            backend_url,
            tab,
        } => {
            let session = setup_session(config, backend_url, refresh_secs)?;
            if headless {
                run_headless_mode(session).await
            } else {
                start_tui(session, tab).await
            }
        }
        Command::Status { backend_url } => print_status(config, backend_url).await,
    }
}

/// Load the config file if present; a missing or unreadable file simply
/// means defaults.
fn load_config() -> Config {
    match get_config_path() {
        Ok(path) if path.exists() => Config::load_from_file(&path).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable config file: {}", e);
            Config::default()
        }),
        _ => Config::default(),
    }
}

/// Runs the dashboard TUI, managing the terminal lifecycle around it.
async fn start_tui(session: SessionData, initial_tab: Option<String>) -> Result<(), Box<dyn Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_tui_mode(&mut terminal, session, initial_tab).await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

/// One-shot system info query for scripting and quick checks.
async fn print_status(config: Config, backend_url: Option<String>) -> Result<(), Box<dyn Error>> {
    let backend: Box<dyn Backend> = match backend_url.or(config.backend_url) {
        Some(url) => Box::new(HttpBackend::new(url)?),
        None => Box::new(SimulatedBackend::new()),
    };

    let info = backend.system_info().await?;
    println!("OS:     {}", info.os);
    println!("Memory: {}", ui::dashboard::utils::memory_label(&info.memory));
    println!("Disk:   {}", ui::dashboard::utils::disk_label(&info.disk));
    println!("CPU:    {}", ui::dashboard::utils::cpu_label(&info.cpu));
    Ok(())
}

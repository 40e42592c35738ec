//! Session setup and initialization

use crate::backend::{Backend, HttpBackend, SimulatedBackend};
use crate::config::Config;
use crate::consts::dashboard_consts;
use crate::events::Event;
use crate::runtime::start_dashboard_worker;
use crate::workers::Command;
use std::error::Error;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Event receiver for dashboard worker events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Command sender for the dashboard worker
    pub command_sender: mpsc::Sender<Command>,
    /// Join handle for the worker task
    pub join_handle: JoinHandle<()>,
    /// Shutdown sender to stop the worker
    pub shutdown_sender: broadcast::Sender<()>,
    /// Human-readable description of the backend in use
    pub backend_label: String,
}

/// Resolve the backend and refresh interval, then start the dashboard
/// worker. CLI flags take precedence over the config file; the simulated
/// backend is the default when no URL is configured anywhere.
pub fn setup_session(
    config: Config,
    backend_url: Option<String>,
    refresh_secs: Option<u64>,
) -> Result<SessionData, Box<dyn Error>> {
    let refresh_interval = refresh_secs
        .or(config.refresh_secs)
        .map(Duration::from_secs)
        .unwrap_or_else(dashboard_consts::default_refresh_interval);

    let (backend, backend_label): (Box<dyn Backend>, String) =
        match backend_url.or(config.backend_url) {
            Some(url) => {
                let label = format!("http ({})", url);
                (Box::new(HttpBackend::new(url)?), label)
            }
            None => (Box::new(SimulatedBackend::new()), "simulated".to_string()),
        };

    let (event_receiver, command_sender, join_handle, shutdown_sender) =
        start_dashboard_worker(backend, refresh_interval);

    Ok(SessionData {
        event_receiver,
        command_sender,
        join_handle,
        shutdown_sender,
        backend_label,
    })
}

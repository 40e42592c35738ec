//! TUI mode execution

use super::{messages::print_session_exit_success, SessionData};
use crate::ui::{self, App};
use ratatui::{backend::Backend, Terminal};
use std::error::Error;

/// Runs the application with the ratatui dashboard.
///
/// The terminal is expected to be set up (raw mode, alternate screen) by the
/// caller, which also restores it afterwards.
pub async fn run_tui_mode<B: Backend>(
    terminal: &mut Terminal<B>,
    session: SessionData,
    initial_tab: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let app = App::new(
        session.event_receiver,
        session.command_sender,
        session.shutdown_sender.clone(),
        initial_tab.as_deref(),
    );

    ui::run(terminal, app).await?;

    // The UI loop has already broadcast shutdown; wait for the worker.
    let _ = session.join_handle.await;
    print_session_exit_success();

    Ok(())
}

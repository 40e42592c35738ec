//! Runtime wiring for the dashboard worker

use crate::backend::Backend;
use crate::consts::dashboard_consts::{COMMAND_QUEUE_SIZE, EVENT_QUEUE_SIZE};
use crate::events::Event;
use crate::workers::{Command, DashboardWorker, EventSender};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Start the dashboard worker task.
///
/// Returns the channel endpoints the display side needs: the event stream,
/// the command sender, the worker join handle, and the shutdown sender.
pub fn start_dashboard_worker(
    backend: Box<dyn Backend>,
    refresh_interval: Duration,
) -> (
    mpsc::Receiver<Event>,
    mpsc::Sender<Command>,
    JoinHandle<()>,
    broadcast::Sender<()>,
) {
    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (command_sender, command_receiver) = mpsc::channel::<Command>(COMMAND_QUEUE_SIZE);
    let (shutdown_sender, shutdown_receiver) = broadcast::channel(1);

    let worker = DashboardWorker::new(backend, EventSender::new(event_sender), refresh_interval);
    let join_handle = tokio::spawn(worker.run(command_receiver, shutdown_receiver));

    (event_receiver, command_sender, join_handle, shutdown_sender)
}

//! Dashboard worker: fetch orchestration and the periodic refresh loop
//!
//! Owns the backend collaborator and dispatches the per-tab fetch routines.
//! Each routine swallows its own failure: the error is surfaced on the event
//! channel and the previously displayed data stays untouched. No retries.

use crate::backend::Backend;
use crate::events::{DataUpdate, Event, EventType, Fetcher};
use crate::logging::LogLevel;
use crate::ui::dashboard::Tab;
use crate::workers::core::{Command, EventSender};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};

pub struct DashboardWorker {
    backend: Box<dyn Backend>,
    event_sender: EventSender,
    refresh_interval: Duration,
}

impl DashboardWorker {
    pub fn new(
        backend: Box<dyn Backend>,
        event_sender: EventSender,
        refresh_interval: Duration,
    ) -> Self {
        Self {
            backend,
            event_sender,
            refresh_interval,
        }
    }

    /// Run until shutdown. The interval's first tick fires immediately, so
    /// exactly one full refresh happens before the first timed one.
    pub async fn run(
        self,
        mut commands: mpsc::Receiver<Command>,
        mut shutdown: broadcast::Receiver<()>,
    ) {
        let mut ticker = tokio::time::interval(self.refresh_interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.refresh_all().await;
                }
                Some(command) = commands.recv() => {
                    self.handle_command(command).await;
                }
                _ = shutdown.recv() => {
                    break;
                }
            }
        }
    }

    async fn handle_command(&self, command: Command) {
        match command {
            Command::SelectTab(tab) => self.fetch_for_tab(tab).await,
            Command::Refresh => self.refresh_all().await,
            Command::RunTests => self.run_test_suite().await,
        }
    }

    /// Dispatch to the fetch routine for the given tab.
    pub async fn fetch_for_tab(&self, tab: Tab) {
        match tab {
            Tab::System => self.load_system_info().await,
            Tab::Testing => self.load_test_results().await,
            Tab::Plugins => self.load_plugins().await,
            Tab::Logs => self.load_logs().await,
        }
    }

    /// Run the system/tests/plugins routines concurrently and wait for all
    /// of them to settle. Logs are loaded on demand only. The completion
    /// event is emitted unconditionally, even if every routine failed.
    pub async fn refresh_all(&self) {
        futures::join!(
            self.load_system_info(),
            self.load_test_results(),
            self.load_plugins(),
        );

        self.event_sender.send_event(Event::refresh_completed()).await;
    }

    async fn run_test_suite(&self) {
        self.event_sender
            .send_status(
                Fetcher::Tests,
                "Running tests...".to_string(),
                EventType::Waiting,
                LogLevel::Info,
            )
            .await;

        match self.backend.run_tests().await {
            Ok(results) => {
                self.event_sender
                    .send_data(
                        Fetcher::Tests,
                        "Test results updated".to_string(),
                        DataUpdate::Tests(results),
                    )
                    .await;
                self.event_sender
                    .send_status(
                        Fetcher::Tests,
                        "Test suite completed successfully".to_string(),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
            }
            Err(e) => {
                self.event_sender
                    .send_status(
                        Fetcher::Tests,
                        format!("Test execution failed: {}", e),
                        EventType::Error,
                        LogLevel::Warn,
                    )
                    .await;
            }
        }
    }

    async fn load_system_info(&self) {
        match self.backend.system_info().await {
            Ok(info) => {
                self.event_sender
                    .send_data(
                        Fetcher::System,
                        "System info updated".to_string(),
                        DataUpdate::System(info),
                    )
                    .await;
            }
            Err(e) => {
                self.event_sender
                    .send_status(
                        Fetcher::System,
                        format!("Failed to load system info: {}", e),
                        EventType::Error,
                        LogLevel::Warn,
                    )
                    .await;
            }
        }
    }

    async fn load_test_results(&self) {
        match self.backend.test_results().await {
            Ok(results) => {
                self.event_sender
                    .send_data(
                        Fetcher::Tests,
                        "Test results updated".to_string(),
                        DataUpdate::Tests(results),
                    )
                    .await;
            }
            Err(e) => {
                self.event_sender
                    .send_status(
                        Fetcher::Tests,
                        format!("Failed to load test results: {}", e),
                        EventType::Error,
                        LogLevel::Warn,
                    )
                    .await;
            }
        }
    }

    async fn load_plugins(&self) {
        match self.backend.plugins().await {
            Ok(plugins) => {
                self.event_sender
                    .send_data(
                        Fetcher::Plugins,
                        "Plugin list updated".to_string(),
                        DataUpdate::Plugins(plugins),
                    )
                    .await;
            }
            Err(e) => {
                self.event_sender
                    .send_status(
                        Fetcher::Plugins,
                        format!("Failed to load plugins: {}", e),
                        EventType::Error,
                        LogLevel::Warn,
                    )
                    .await;
            }
        }
    }

    async fn load_logs(&self) {
        match self.backend.logs().await {
            Ok(entries) => {
                self.event_sender
                    .send_data(
                        Fetcher::Logs,
                        "Logs updated".to_string(),
                        DataUpdate::Logs(entries),
                    )
                    .await;
            }
            Err(e) => {
                self.event_sender
                    .send_status(
                        Fetcher::Logs,
                        format!("Failed to load logs: {}", e),
                        EventType::Error,
                        LogLevel::Warn,
                    )
                    .await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::error::BackendError;
    use crate::backend::MockBackend;
    use crate::consts::dashboard_consts::EVENT_QUEUE_SIZE;
    use crate::models::{CpuLoad, SystemInfo, TestResults, Usage};

    fn sample_system_info() -> SystemInfo {
        SystemInfo {
            os: "Linux 6.12.41".to_string(),
            memory: Usage {
                used: 65,
                total: 100,
            },
            disk: Usage {
                used: 45,
                total: 100,
            },
            cpu: CpuLoad { usage: 25 },
        }
    }

    fn unreachable_error() -> BackendError {
        BackendError::Http {
            status: 503,
            message: "backend unavailable".to_string(),
        }
    }

    fn failing_backend() -> MockBackend {
        let mut backend = MockBackend::new();
        backend
            .expect_system_info()
            .returning(|| Err(unreachable_error()));
        backend
            .expect_test_results()
            .returning(|| Err(unreachable_error()));
        backend
            .expect_plugins()
            .returning(|| Err(unreachable_error()));
        backend.expect_logs().returning(|| Err(unreachable_error()));
        backend
    }

    fn healthy_backend() -> MockBackend {
        let mut backend = MockBackend::new();
        backend
            .expect_system_info()
            .returning(|| Ok(sample_system_info()));
        backend.expect_test_results().returning(|| {
            Ok(TestResults {
                passed: 47,
                failed: 2,
                coverage: 85,
            })
        });
        backend.expect_plugins().returning(|| Ok(Vec::new()));
        backend.expect_logs().returning(|| Ok(Vec::new()));
        backend
    }

    fn worker_with(backend: MockBackend) -> (DashboardWorker, mpsc::Receiver<Event>) {
        let (tx, rx) = mpsc::channel(EVENT_QUEUE_SIZE);
        let worker = DashboardWorker::new(
            Box::new(backend),
            EventSender::new(tx),
            Duration::from_secs(30),
        );
        (worker, rx)
    }

    fn drain(rx: &mut mpsc::Receiver<Event>) -> Vec<Event> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    fn count_refresh_completions(events: &[Event]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e.update, Some(DataUpdate::RefreshedAt(_))))
            .count()
    }

    #[tokio::test]
    async fn test_refresh_all_resolves_when_every_fetch_fails() {
        let (worker, mut rx) = worker_with(failing_backend());

        worker.refresh_all().await;

        let events = drain(&mut rx);
        let errors = events
            .iter()
            .filter(|e| e.event_type == EventType::Error)
            .count();
        assert_eq!(errors, 3, "one error per fetch routine");
        assert_eq!(
            count_refresh_completions(&events),
            1,
            "completion event fires even when every routine fails"
        );
        // Completion comes last
        assert!(matches!(
            events.last().unwrap().update,
            Some(DataUpdate::RefreshedAt(_))
        ));
    }

    #[tokio::test]
    async fn test_refresh_all_excludes_logs() {
        let (worker, mut rx) = worker_with(healthy_backend());

        worker.refresh_all().await;

        let events = drain(&mut rx);
        assert!(
            events.iter().all(|e| e.fetcher != Fetcher::Logs),
            "logs are loaded on demand only"
        );
    }

    #[tokio::test]
    async fn test_fetch_for_tab_dispatches_logs() {
        let (worker, mut rx) = worker_with(healthy_backend());

        worker.fetch_for_tab(Tab::Logs).await;

        let events = drain(&mut rx);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0].update, Some(DataUpdate::Logs(_))));
    }

    #[tokio::test]
    async fn test_failed_fetch_emits_error_without_data() {
        let (worker, mut rx) = worker_with(failing_backend());

        worker.fetch_for_tab(Tab::System).await;

        let events = drain(&mut rx);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, EventType::Error);
        assert!(events[0].update.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_immediate_refresh_before_first_timer_tick() {
        let (worker, mut rx) = worker_with(healthy_backend());
        let (_command_tx, command_rx) = mpsc::channel(8);
        let (shutdown_tx, _) = broadcast::channel(1);

        let handle = tokio::spawn(worker.run(command_rx, shutdown_tx.subscribe()));

        // Give the worker time to perform the startup refresh, but stay
        // well short of the 30s interval.
        tokio::time::sleep(Duration::from_secs(1)).await;
        let events = drain(&mut rx);
        assert_eq!(count_refresh_completions(&events), 1);

        // Crossing the interval boundary produces the next refresh.
        tokio::time::sleep(Duration::from_secs(30)).await;
        let events = drain(&mut rx);
        assert_eq!(count_refresh_completions(&events), 1);

        let _ = shutdown_tx.send(());
        let _ = handle.await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_tests_command_updates_results() {
        let mut backend = MockBackend::new();
        backend.expect_run_tests().returning(|| {
            Ok(TestResults {
                passed: 49,
                failed: 0,
                coverage: 87,
            })
        });
        let (tx, mut rx) = mpsc::channel(EVENT_QUEUE_SIZE);
        let worker = DashboardWorker::new(
            Box::new(backend),
            EventSender::new(tx),
            Duration::from_secs(30),
        );

        worker.handle_command(Command::RunTests).await;

        let events = drain(&mut rx);
        assert!(events
            .iter()
            .any(|e| matches!(e.update, Some(DataUpdate::Tests(r)) if r.failed == 0)));
        assert!(events
            .iter()
            .any(|e| e.event_type == EventType::Success && e.update.is_none()));
    }
}

//! Backend collaborator interface
//!
//! The dashboard itself contains no business logic; everything it displays
//! comes from one of these calls.

use crate::models::{LogEntry, Plugin, SystemInfo, TestResults};

pub(crate) mod http;
pub(crate) mod simulated;
pub use http::HttpBackend;
pub use simulated::SimulatedBackend;
pub mod error;

use error::BackendError;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Current host information (OS, memory, disk, CPU).
    async fn system_info(&self) -> Result<SystemInfo, BackendError>;

    /// Results of the most recent test-suite run.
    async fn test_results(&self) -> Result<TestResults, BackendError>;

    /// Execute the test suite and return fresh results.
    async fn run_tests(&self) -> Result<TestResults, BackendError>;

    /// Plugins registered with the framework.
    async fn plugins(&self) -> Result<Vec<Plugin>, BackendError>;

    /// Recent framework log entries, newest first.
    async fn logs(&self) -> Result<Vec<LogEntry>, BackendError>;
}

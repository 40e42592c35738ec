pub mod dashboard_consts {
    //! Dashboard configuration constants
    //!
    //! All tunable values for the refresh loop, event plumbing and the
    //! simulated collaborator live here.

    use std::time::Duration;

    /// The maximum number of entries kept in the activity list. Oldest
    /// entries are evicted first.
    pub const MAX_ACTIVITY_ENTRIES: usize = 10;

    /// Buffer size for the worker-to-UI event channel.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Buffer size for the UI-to-worker command channel.
    pub const COMMAND_QUEUE_SIZE: usize = 16;

    /// Interval between automatic full refreshes (milliseconds).
    pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 30_000;

    /// Helper to get the default refresh interval as a Duration.
    pub const fn default_refresh_interval() -> Duration {
        Duration::from_millis(DEFAULT_REFRESH_INTERVAL_MS)
    }

    /// Simulated collaborator latency configuration.
    pub mod simulation {
        use std::time::Duration;

        /// Minimum simulated network delay (milliseconds).
        pub const BASE_DELAY_MS: u64 = 200;

        /// Maximum random jitter added on top of the base delay (milliseconds).
        pub const JITTER_MS: u64 = 300;

        /// Additional delay applied to a simulated test-suite run (milliseconds).
        pub const TEST_RUN_DELAY_MS: u64 = 3_000;

        /// Helper to get the base delay as a Duration.
        pub const fn base_delay() -> Duration {
            Duration::from_millis(BASE_DELAY_MS)
        }

        /// Helper to get the test-run delay as a Duration.
        pub const fn test_run_delay() -> Duration {
            Duration::from_millis(TEST_RUN_DELAY_MS)
        }
    }
}

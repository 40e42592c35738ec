//! Console messages printed around a session's lifecycle

pub fn print_session_starting(mode: &str, backend_label: &str) {
    println!(
        "Starting dotfiles dashboard v{} in {} mode (backend: {})",
        env!("CARGO_PKG_VERSION"),
        mode,
        backend_label
    );
}

pub fn print_session_shutdown() {
    println!("Shutting down...");
}

pub fn print_session_exit_success() {
    println!("Dashboard exited cleanly.");
}

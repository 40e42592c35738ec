use assert_cmd::Command;
use predicates::str::contains;

const BINARY_NAME: &str = "dotfiles-dashboard";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Start command help should list the headless and refresh flags.
fn cli_start_help_lists_flags() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--help"]);
    cmd.assert()
        .success()
        .stdout(contains("--headless"))
        .stdout(contains("--refresh-secs"))
        .stdout(contains("--backend-url"));
}

#[test]
/// Status command against the simulated backend prints the system fields.
fn cli_status_prints_system_info() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("status");
    cmd.assert()
        .success()
        .stdout(contains("OS:"))
        .stdout(contains("Memory:"))
        .stdout(contains("CPU:"));
}

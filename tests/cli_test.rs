/// Binary-level tests for wca-double-check
///
/// These only exercise paths that stop before any network request.
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wca-double-check"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("Failed to run wca-double-check {}: {}", args.join(" "), e))
}

#[test]
fn test_empty_competition_id_is_rejected() {
    let output = run(&[""]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: Please enter a valid competition ID."), "stderr: {}", stderr);
    assert!(output.stdout.is_empty(), "stdout should stay clean");
}

#[test]
fn test_conflicting_output_formats() {
    let output = run(&["--json", "--markdown", "WC2025"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: Cannot specify both --markdown and --json"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty(), "stdout should stay clean");
}

#[test]
fn test_json_request_errors_keep_stdout_empty() {
    let output = run(&["--json", "   "]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "stdout: {}", String::from_utf8_lossy(&output.stdout));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please enter a valid competition ID."), "stderr: {}", stderr);
}

#[test]
fn test_missing_competition_id_is_usage_error() {
    let output = run(&[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("COMPETITION_ID"), "stderr: {}", stderr);
}

#[test]
fn test_help_lists_flags() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--markdown"));
    assert!(stdout.contains("--json"));
}

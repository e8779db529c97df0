//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with an isolated config directory and
//! verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(config_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_tpbstudy-cli"))
        .args(args)
        .env("TPBSTUDY_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_json(config_dir: &Path, args: &[&str]) -> serde_json::Value {
    let (stdout, stderr, code) = run_cli(config_dir, args);
    assert_eq!(code, 0, "CLI command failed: {args:?}\n{stderr}");
    serde_json::from_str(&stdout).expect("Failed to parse JSON output")
}

#[test]
fn test_timer_status_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let json = run_json(dir.path(), &["timer", "status"]);
    assert_eq!(json["type"], "state_snapshot");
    assert_eq!(json["mode"], "work");
    assert_eq!(json["display"], "25:00");
    assert_eq!(json["running"], false);
}

#[test]
fn test_timer_simulate_rolls_into_short_break() {
    let dir = tempfile::tempdir().unwrap();
    let json = run_json(dir.path(), &["timer", "simulate", "--ticks", "1500"]);
    let events = json["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["type"], "mode_advanced");
    assert_eq!(json["state"]["mode"], "short_break");
    assert_eq!(json["state"]["seconds_remaining"], 300);
    assert_eq!(json["state"]["running"], true);
}

#[test]
fn test_timer_simulate_paused_does_not_count() {
    let dir = tempfile::tempdir().unwrap();
    let json = run_json(
        dir.path(),
        &["timer", "simulate", "--ticks", "90", "--mode", "long", "--paused"],
    );
    assert_eq!(json["state"]["mode"], "long_break");
    assert_eq!(json["state"]["display"], "15:00");
}

#[test]
fn test_config_set_changes_timer() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["config", "set", "timer.work_minutes", "50"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "ok");

    let (stdout, _, _) = run_cli(dir.path(), &["config", "get", "timer.work_minutes"]);
    assert_eq!(stdout.trim(), "50");

    let json = run_json(dir.path(), &["timer", "status"]);
    assert_eq!(json["display"], "50:00");
}

#[test]
fn test_config_rejects_non_positive_duration() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["config", "set", "timer.work_minutes", "-1"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));

    let (stdout, _, _) = run_cli(dir.path(), &["config", "get", "timer.work_minutes"]);
    assert_eq!(stdout.trim(), "25");
}

#[test]
fn test_config_unknown_key_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["config", "get", "timer.nope"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown config key"));
}

#[test]
fn test_lab_projectile() {
    let dir = tempfile::tempdir().unwrap();
    let json = run_json(
        dir.path(),
        &["lab", "projectile", "--velocity", "10", "--angle", "45", "--trajectory"],
    );
    let range = json["summary"]["max_range"].as_f64().unwrap();
    assert!((range - 100.0 / 9.8).abs() < 1e-9);
    assert!(!json["trajectory"].as_array().unwrap().is_empty());
}

#[test]
fn test_lab_projectile_rejects_flat_angle() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["lab", "projectile", "--velocity", "10", "--angle", "90"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("angle_degrees"));
}

#[test]
fn test_lab_ph() {
    let dir = tempfile::tempdir().unwrap();
    let json = run_json(dir.path(), &["lab", "ph", "--concentration", "0.001", "--base"]);
    assert!((json["ph"].as_f64().unwrap() - 11.0).abs() < 1e-9);
    assert_eq!(json["label"], "Base");

    let (_, stderr, code) = run_cli(dir.path(), &["lab", "ph", "--concentration", "0"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("concentration"));
}

#[test]
fn test_lab_linear_and_derivative() {
    let dir = tempfile::tempdir().unwrap();
    let json = run_json(
        dir.path(),
        &["lab", "linear", "--gradient", "2", "--intercept", "-1"],
    );
    assert_eq!(json["function"], "y = 2x - 1");
    assert_eq!(json["points"].as_array().unwrap().len(), 41);

    let json = run_json(
        dir.path(),
        &["lab", "derivative", "--coefficient", "3", "--power", "2"],
    );
    assert_eq!(json["display"], "f'(x) = 6x");
}

#[test]
fn test_lab_linear_rejects_tiny_step() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(
        dir.path(),
        &["lab", "linear", "--gradient", "1", "--intercept", "0", "--step", "1e-300"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("step"));
}

#[test]
fn test_lab_element_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let json = run_json(dir.path(), &["lab", "element", "cu"]);
    assert_eq!(json["atomic_number"], 29);

    let (_, _, code) = run_cli(dir.path(), &["lab", "element", "Xx"]);
    assert_ne!(code, 0);
}

// CLI regression tests for the non-interactive subcommands

use assert_cmd::Command;
use predicates::prelude::*;

fn fractty() -> Command {
    Command::cargo_bin("fractty").expect("binary should build")
}

#[test]
fn test_list_shows_builtin_models() {
    fractty()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Weed"))
        .stdout(predicate::str::contains("Dragon"))
        .stdout(predicate::str::contains("Lace"));
}

#[test]
fn test_generate_prints_pattern() {
    fractty()
        .args(["generate", "koch 2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("F-F+F+F-F-F-F+F+F-F+"));
}

#[test]
fn test_trace_prints_segments() {
    let output = fractty()
        .args(["trace", "koch", "--extent", "81"])
        .output()
        .expect("failed to run fractty");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    // 4 iterations of a 4-segment rule
    assert_eq!(stdout.lines().count(), 256);
    assert!(stdout
        .lines()
        .all(|line| line.split_whitespace().count() == 4));
}

#[test]
fn test_unknown_model_fails() {
    fractty()
        .args(["generate", "no-such-fractal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No model named 'no-such-fractal'"));
}

#[test]
fn test_missing_catalog_fails() {
    fractty()
        .args(["--catalog", "/nonexistent/fractals.yaml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read catalog"));
}

#[test]
fn test_trace_rejects_non_finite_angle() {
    fractty()
        .args(["trace", "koch", "--angle", "NaN", "--extent", "81"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Angle must be a finite number"));
}

#[test]
fn test_trace_rejects_non_positive_extent() {
    fractty()
        .args(["trace", "koch", "--extent=-81"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Extent must be a positive finite number"));

    fractty()
        .args(["trace", "koch", "--extent", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Extent must be"));
}

#[test]
fn test_trace_clamps_angle_to_viewer_range() {
    let clamped = fractty()
        .args(["trace", "koch", "--angle", "1000", "--extent", "81"])
        .output()
        .expect("failed to run fractty");
    let at_max = fractty()
        .args(["trace", "koch", "--angle", "120", "--extent", "81"])
        .output()
        .expect("failed to run fractty");

    assert!(clamped.status.success());
    assert_eq!(clamped.stdout, at_max.stdout);
}

#[test]
fn test_log_file_records_catalog_load() {
    let path = std::env::temp_dir().join(format!("fractty-log-{}.txt", std::process::id()));

    fractty()
        .env("FRACTTY_LOG", "info")
        .arg("--log-file")
        .arg(&path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Weed"));

    let log = std::fs::read_to_string(&path).expect("log file should be written");
    std::fs::remove_file(&path).ok();
    assert!(log.contains("catalog ready"));
    assert!(log.contains("models=20"));
}

#[test]
fn test_view_unknown_model_fails_before_starting() {
    fractty()
        .args(["view", "--model", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No model named 'nope'"));
}

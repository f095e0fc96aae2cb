//! Binary-level checks: exit codes and where diagnostics are written

use std::process::{Command, Output};

fn run_in(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nbody_gif_renderer"))
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", "info")
        .output()
        .unwrap()
}

#[test]
fn test_run_failure_reported_on_stderr() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir(tmp.path().join("output")).unwrap();

    let output = run_in(tmp.path(), &["2", "2", "s"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.is_empty(), "unexpected stdout: {stdout}");
    assert!(stderr.contains("failed to render"), "stderr: {stderr}");
    assert!(stderr.contains("particles_s.dat"), "stderr: {stderr}");
    // OS error appears once in the chain
    assert_eq!(stderr.matches("(os error").count(), 1, "stderr: {stderr}");
    assert!(!tmp.path().join("output/nbody.gif").exists());
}

#[test]
fn test_argument_error_prints_usage() {
    let tmp = tempfile::tempdir().unwrap();

    let output = run_in(tmp.path(), &["ten", "2", "s"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("num_particles"), "stderr: {stderr}");
    assert!(stderr.contains("usage:"), "stderr: {stderr}");
}

#[test]
fn test_undersized_dump_exits_nonzero() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("output");
    std::fs::create_dir(&out).unwrap();
    let dump = format!("10 5 0\n{}", "0.5 0.5\n".repeat(40));
    std::fs::write(out.join("particles_s.dat"), dump).unwrap();

    let output = run_in(tmp.path(), &["10", "5", "s"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("expected 50 data rows"), "stderr: {stderr}");
    assert!(!out.join("nbody.gif").exists());
    assert!(!out.join("nbody.gif.partial").exists());
}

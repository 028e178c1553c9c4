use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "rollreach-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_writes_console_report_to_file() {
    let exe = env!("CARGO_BIN_EXE_rollreach");
    let output_path = temp_path("console");
    let status = Command::new(exe)
        .args(["--sides", "6", "--targets", "25", "--rolls", "10", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Rollreach Probability Report"));
    assert!(content.contains("Win:"));
}

#[test]
fn cli_emits_parseable_json_with_deltas_chained_across_targets() {
    let exe = env!("CARGO_BIN_EXE_rollreach");
    let output = Command::new(exe)
        .args(["--targets", "20,25", "--report", "json"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let reports: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("json parses");
    let reports = reports.as_array().expect("array of reports");
    assert_eq!(reports.len(), 2);
    // The second evaluation's deltas are measured against the first.
    let first_win = reports[0]["probabilities"]["win"].as_f64().expect("win");
    let second_win = reports[1]["probabilities"]["win"].as_f64().expect("win");
    let second_delta = reports[1]["deltas"]["win"].as_f64().expect("delta");
    assert!((second_delta - (second_win - first_win)).abs() < 1e-9);
}

#[test]
fn cli_rejects_unreachable_target() {
    let exe = env!("CARGO_BIN_EXE_rollreach");
    let output = Command::new(exe)
        .args(["--sides", "6", "--targets", "61", "--rolls", "10"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid parameters"));
}

#[test]
fn cli_verification_passes_on_defaults() {
    let exe = env!("CARGO_BIN_EXE_rollreach");
    let output = Command::new(exe)
        .args(["--verify", "--seed", "1337", "--report", "markdown"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Monte Carlo verification"));
    assert!(stdout.contains("Result: pass"));
}

#[test]
fn cli_sweep_renders_one_bar_per_target() {
    let exe = env!("CARGO_BIN_EXE_rollreach");
    let output = Command::new(exe)
        .args(["--sides", "6", "--targets", "12", "--rolls", "4", "--sweep"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Reach probability by target"));
    let bar_lines = stdout.lines().filter(|l| l.contains('│')).count();
    assert_eq!(bar_lines, 12);
}

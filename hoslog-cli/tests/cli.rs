use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "hoslog-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_feasible_trip_writes_json_logbook() {
    let exe = env!("CARGO_BIN_EXE_hoslog");
    let output_path = temp_path("json");
    let status = Command::new(exe)
        .args([
            "--distance",
            "300",
            "--driving-time",
            "300",
            "--cycle-used",
            "20",
            "--report",
            "json",
            "--output",
        ])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let value: serde_json::Value = serde_json::from_str(&content).expect("parse report");
    assert_eq!(value["feasibility"]["feasible"], true);
    assert_eq!(value["days"].as_array().map(Vec::len), Some(1));
    assert!((value["days"][0]["timeSpentInDriving"].as_f64().unwrap() - 5.0).abs() < 1e-9);
}

#[test]
fn cli_infeasible_trip_exits_nonzero() {
    let exe = env!("CARGO_BIN_EXE_hoslog");
    let output = Command::new(exe)
        .args([
            "--distance",
            "1000",
            "--driving-time",
            "1200",
            "--cycle-used",
            "60",
        ])
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Insufficient cycle hours"));
}

#[test]
fn cli_check_only_skips_logbook() {
    let exe = env!("CARGO_BIN_EXE_hoslog");
    let output_path = temp_path("check");
    let status = Command::new(exe)
        .args([
            "--distance",
            "300",
            "--driving-time",
            "300",
            "--check-only",
            "--report",
            "markdown",
            "--output",
        ])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("- **Verdict**: feasible"));
    assert!(!content.contains("Day-by-day"));
}

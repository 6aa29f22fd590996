use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_path(file_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("tasklist-{nanos}-{file_name}"))
}

fn run(args: &[&str]) -> std::process::Output {
    let exe = env!("CARGO_BIN_EXE_tasklist");
    Command::new(exe)
        .args(args)
        .env("TASKLIST_CONFIG_PATH", temp_path("missing-config.json"))
        .output()
        .expect("failed to run tasklist")
}

#[test]
fn toggle_command_completes_pending_task() {
    let output = run(&["toggle", "2"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Completed task: Review project READMEs (2)"));
    assert!(stdout.contains("1 of 3 remaining"));
}

#[test]
fn toggle_command_reopens_completed_task() {
    let output = run(&["--json", "toggle", "1"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["change"], "toggled");
    assert_eq!(value["task"]["id"], 1);
    assert_eq!(value["task"]["completed"], false);
    assert_eq!(value["tasks"][0]["completed"], false);
}

#[test]
fn delete_command_removes_task() {
    let output = run(&["--json", "delete", "1"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["change"], "removed");
    let ids: Vec<_> = value["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|task| task["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn unknown_ids_are_silent() {
    for command in ["toggle", "delete"] {
        let output = run(&[command, "42"]);

        assert!(output.status.success());
        assert!(output.stdout.is_empty());
        assert!(output.stderr.is_empty());
    }
}

#[test]
fn non_numeric_id_is_rejected() {
    let output = run(&["delete", "first"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: invalid_input"));
}

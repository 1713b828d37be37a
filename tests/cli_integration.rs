//! Integration tests for the `mdtask` CLI.
//!
//! Each test creates temp task directories and a private config home, runs
//! `mdtask` as a subprocess, and verifies stdout, stderr, and exit status.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, SystemTime};

/// Path to the built `mdtask` binary.
fn mdtask_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_mdtask"))
}

/// Write a task file with a fixed modification time (seconds after the epoch).
fn write_task(dir: &Path, name: &str, content: &str, secs: u64) {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    let file = fs::File::options().write(true).open(&path).unwrap();
    file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
        .unwrap();
}

/// Two task directories under `root`: `work` (two tasks) and `home` (one).
fn create_task_dirs(root: &Path) -> (PathBuf, PathBuf) {
    let work = root.join("work");
    let home = root.join("home");
    write_task(
        &work,
        "deploy.md",
        "---\ntitle: Ship release\nstatus: in-progress\npriority: high\ntags: [urgent]\n---\n# Ship\n",
        1_700_000_300,
    );
    write_task(&work, "notes.md", "plain notes\n", 1_700_000_100);
    write_task(
        &home,
        "milk.md",
        "---\ntitle: Buy milk\nstatus: done\n---\n",
        1_700_000_200,
    );
    // Not a task
    write_task(&home, "readme.txt", "ignored", 1_700_000_400);
    (work, home)
}

/// Run `mdtask` with config and home directories isolated under `root`.
fn run_mdtask(root: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(mdtask_bin())
        .args(args)
        .env("XDG_CONFIG_HOME", root.join("config"))
        .env("HOME", root)
        .env_remove("MDTASK_LOG")
        .current_dir(root)
        .output()
        .expect("failed to run mdtask");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `mdtask` expecting success, return stdout.
fn run_mdtask_ok(root: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_mdtask(root, args);
    if !success {
        panic!(
            "mdtask {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

fn s(p: &Path) -> &str {
    p.to_str().unwrap()
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn test_list_newest_first_across_dirs() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (work, home) = create_task_dirs(tmp.path());

    let out = run_mdtask_ok(tmp.path(), &["list", "-d", s(&work), "-d", s(&home)]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3, "{out}");
    assert!(lines[0].starts_with("[~] high Ship release"), "{out}");
    assert!(lines[1].contains("Buy milk"), "{out}");
    assert!(lines[1].starts_with("[✓]"), "{out}");
    assert!(lines[2].contains("notes.md"), "{out}");
    // Several directories: each line names its source
    assert!(lines[0].ends_with(&format!("[{}]", s(&work))), "{out}");
    assert!(!out.contains("readme.txt"));
}

#[test]
fn test_list_single_dir_hides_source() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (work, _) = create_task_dirs(tmp.path());

    let out = run_mdtask_ok(tmp.path(), &["list", "--dir", s(&work)]);
    assert_eq!(out.lines().count(), 2);
    assert!(!out.contains(&format!("[{}]", s(&work))));
}

#[test]
fn test_list_query_filters() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (work, home) = create_task_dirs(tmp.path());

    let out = run_mdtask_ok(tmp.path(), &["list", "URGENT", "-d", s(&work), "-d", s(&home)]);
    assert_eq!(out.lines().count(), 1, "{out}");
    assert!(out.contains("Ship release"));

    let out = run_mdtask_ok(tmp.path(), &["list", "nothing-matches", "-d", s(&work)]);
    assert_eq!(out.trim(), "No tasks found.");
}

#[test]
fn test_list_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (work, home) = create_task_dirs(tmp.path());

    let out = run_mdtask_ok(
        tmp.path(),
        &["list", "--json", "-d", s(&work), "-d", s(&home)],
    );
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    let tasks = parsed.as_array().unwrap();
    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks[0]["name"], "deploy.md");
    assert_eq!(tasks[0]["priority"], "high");
    assert_eq!(tasks[0]["tags"], serde_json::json!(["urgent"]));
    assert_eq!(tasks[2]["name"], "notes.md");
    // Missing status is filled from the configured default
    assert_eq!(tasks[2]["status"], "todo");
}

#[test]
fn test_list_partial_failure_warns() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (work, _) = create_task_dirs(tmp.path());
    let missing = tmp.path().join("missing");

    let (stdout, stderr, success) =
        run_mdtask(tmp.path(), &["list", "-d", s(&missing), "-d", s(&work)]);
    assert!(success, "{stderr}");
    assert_eq!(stdout.lines().count(), 2);
    assert!(stderr.contains("warning:"), "{stderr}");
    assert!(stderr.contains(s(&missing)), "{stderr}");
}

#[test]
fn test_list_all_dirs_failing_exits_1() {
    let tmp = tempfile::TempDir::new().unwrap();
    let a = tmp.path().join("a");
    let b = tmp.path().join("b");

    let (_, stderr, success) = run_mdtask(tmp.path(), &["list", "-d", s(&a), "-d", s(&b)]);
    assert!(!success);
    assert!(
        stderr.starts_with("error: couldn't read any directories:"),
        "{stderr}"
    );
}

#[test]
fn test_list_uses_configured_directories() {
    let tmp = tempfile::TempDir::new().unwrap();
    let (work, _) = create_task_dirs(tmp.path());
    let config = tmp.path().join("custom.toml");
    fs::write(
        &config,
        format!("[taskmanager]\ndirectories = [\"{}\"]\n", s(&work)),
    )
    .unwrap();

    let out = run_mdtask_ok(tmp.path(), &["--config", s(&config), "list"]);
    assert_eq!(out.lines().count(), 2, "{out}");
}

#[test]
fn test_list_expands_home() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_task_dirs(tmp.path());

    // HOME is the temp root, so ~/work is the work directory
    let out = run_mdtask_ok(tmp.path(), &["list", "-d", "~/work"]);
    assert_eq!(out.lines().count(), 2, "{out}");
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn test_config_path_respects_xdg() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_mdtask_ok(tmp.path(), &["config", "--path"]);
    let expected = tmp.path().join("config").join("mdtask").join("config.toml");
    assert_eq!(out.trim(), s(&expected));
}

#[test]
fn test_config_creates_default_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_mdtask_ok(tmp.path(), &["config"]);
    assert!(out.contains("[taskmanager]"), "{out}");
    assert!(out.contains("~/.tasks"), "{out}");
    assert!(tmp.path().join("config/mdtask/config.toml").exists());
}

#[test]
fn test_config_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = run_mdtask_ok(tmp.path(), &["config", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["display"]["default_status"], "todo");
}

#[test]
fn test_invalid_config_is_an_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    let config = tmp.path().join("bad.toml");
    fs::write(&config, "[taskmanager\n").unwrap();

    let (_, stderr, success) = run_mdtask(tmp.path(), &["--config", s(&config), "list"]);
    assert!(!success);
    assert!(stderr.starts_with("error: failed to parse config file"), "{stderr}");
}

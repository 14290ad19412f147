//! End-to-end tests of the `precis` binary: arguments, exit codes, stdin/file
//! input and the JSON printed on stdout.

use std::io::Write;
use std::process::{Command, Output, Stdio};

const DOCUMENT: &str = "Wind turbines convert the kinetic energy of moving air into electricity. \
    Offshore wind turbines benefit from stronger and steadier winds than onshore sites. \
    Maintenance of offshore wind turbines requires specialised vessels and trained crews. \
    Grid operators balance wind output with storage and flexible gas plants.";

fn precis() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_precis"));
    for key in [
        "PRECIS_MAX_POINTS",
        "PRECIS_MAX_KEYWORDS",
        "PRECIS_MIN_SENTENCE_CHARS",
        "PRECIS_MIN_WORD_CHARS",
        "PRECIS_MIN_INPUT_CHARS",
        "RUST_LOG",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

fn run_with_stdin(mut cmd: Command, input: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_summarizes_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DOCUMENT.as_bytes()).unwrap();

    let output = precis().arg(file.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output);
    assert_eq!(json["mode"], "extractive");
    assert_eq!(json["points"].as_array().unwrap().len(), 4);
    assert_eq!(json["keywords"][0], "wind");
    assert_eq!(json["metrics"]["originalSentenceCount"], 4);
    assert!(json["metrics"]["compressionRatio"].is_string());
}

#[test]
fn test_reads_stdin_for_dash() {
    let mut cmd = precis();
    cmd.arg("-");
    let output = run_with_stdin(cmd, DOCUMENT);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output)["keywords"][0], "wind");
}

#[test]
fn test_reads_stdin_without_argument() {
    let output = run_with_stdin(precis(), DOCUMENT);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_json(&output)["summary"].is_string());
}

#[test]
fn test_short_input_exits_with_2() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"Far too short to summarize.").unwrap();

    let output = precis().arg(file.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("minimum 100 characters"), "stderr: {stderr}");
}

#[test]
fn test_min_input_chars_from_env() {
    let mut cmd = precis();
    cmd.arg("-").env("PRECIS_MIN_INPUT_CHARS", "10");
    let output = run_with_stdin(cmd, "A sentence that is comfortably longer than thirty characters.");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output)["points"].as_array().unwrap().len(), 1);
}

#[test]
fn test_help() {
    for flag in ["help", "-h", "--help"] {
        let output = precis().arg(flag).output().unwrap();
        assert_eq!(output.status.code(), Some(0));
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Usage: precis [FILE]"), "{flag}: {stdout}");
    }
}

#[test]
fn test_unknown_option_exits_with_1() {
    let output = precis().arg("--verbose").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown option: --verbose"));
}

#[test]
fn test_extra_arguments_exit_with_1() {
    let output = precis().args(["one.txt", "two.txt"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Too many arguments"));
}

#[test]
fn test_missing_file_exits_with_1() {
    let dir = tempfile::tempdir().unwrap();
    let output = precis().arg(dir.path().join("absent.txt")).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

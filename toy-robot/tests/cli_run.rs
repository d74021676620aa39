//! CLI tests for the `toy-robot` binary.
//!
//! Spawns the binary and verifies stdout reports and exit codes for file
//! input, standard input, configuration, and fatal I/O errors.

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use toy_robot::exit_codes;
use toy_robot::test_support::command_file;

#[test]
fn file_input_prints_reports() {
    let file = command_file(&["PLACE 1,2,EAST", "MOVE", "MOVE", "LEFT", "MOVE", "REPORT"])
        .expect("command file");
    let temp = tempfile::tempdir().expect("tempdir");

    let output = Command::new(env!("CARGO_BIN_EXE_toy-robot"))
        .current_dir(temp.path())
        .arg("--file")
        .arg(&file.path)
        .output()
        .expect("run toy-robot");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "3,3,NORTH\n");
}

#[test]
fn stdin_input_prints_reports() {
    let temp = tempfile::tempdir().expect("tempdir");
    let mut child = Command::new(env!("CARGO_BIN_EXE_toy-robot"))
        .current_dir(temp.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn toy-robot");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"FOO BAR\nPLACE 2,2,SOUTH\n\nREPORT\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait toy-robot");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2,2,SOUTH\n");
}

#[test]
fn missing_input_file_fails() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = Command::new(env!("CARGO_BIN_EXE_toy-robot"))
        .current_dir(temp.path())
        .args(["--file", "does-not-exist.txt"])
        .output()
        .expect("run toy-robot");

    assert_eq!(output.status.code(), Some(exit_codes::FAILURE));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("An error has occurred"));
    assert!(stderr.contains("does-not-exist.txt"));
}

#[test]
fn config_in_working_directory_sets_board_size() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(
        temp.path().join("toy-robot.toml"),
        "[board]\nwidth = 10\nheight = 10\n",
    )
    .expect("write config");
    let file = command_file(&["PLACE 9,9,NORTH", "REPORT"]).expect("command file");

    let output = Command::new(env!("CARGO_BIN_EXE_toy-robot"))
        .current_dir(temp.path())
        .arg("--file")
        .arg(&file.path)
        .output()
        .expect("run toy-robot");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "9,9,NORTH\n");
}

#[test]
fn invalid_config_fails() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = temp.path().join("zero.toml");
    fs::write(&config, "[board]\nwidth = 0\n").expect("write config");
    let file = command_file(&["PLACE 0,0,NORTH", "REPORT"]).expect("command file");

    let output = Command::new(env!("CARGO_BIN_EXE_toy-robot"))
        .current_dir(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("--file")
        .arg(&file.path)
        .output()
        .expect("run toy-robot");

    assert_eq!(output.status.code(), Some(exit_codes::FAILURE));
    assert!(output.stdout.is_empty());
}

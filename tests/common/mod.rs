// Shared test helpers for integration tests
#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::{TempDir, tempdir};

/// Creates a temporary fixture directory holding the given files.
pub fn fixture_dir(files: &[(&str, &[u8])]) -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    for (name, content) in files {
        fs::write(temp_dir.path().join(name), content).expect("Failed to write fixture file");
    }
    temp_dir
}

/// The runner binary with English messages, so assertions do not depend on
/// the machine's locale.
pub fn runner() -> Command {
    let mut cmd = Command::cargo_bin("fixture-runner").expect("binary is built");
    cmd.env("NO_COLOR", "1").arg("--lang").arg("en");
    cmd
}

/// `runner()` preset with `<action> <cmd> <dir>`.
pub fn run_action(action: &str, command: &str, dir: &Path) -> Command {
    let mut cmd = runner();
    cmd.arg(action).arg(command).arg(dir);
    cmd
}

pub fn read(dir: &Path, name: &str) -> Vec<u8> {
    fs::read(dir.join(name)).expect("Failed to read fixture file")
}

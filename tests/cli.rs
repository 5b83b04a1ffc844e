//! End-to-end tests for the quick-notify binary
//!
//! A fake notifytool script stands in for the real executable so the
//! tests can observe the exact argument vector and exit status handling.

use assert_cmd::Command;
use predicates::prelude::*;

#[cfg(unix)]
mod unix {
    use super::*;

    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    use tempfile::TempDir;

    /// Write an executable shell script standing in for notifytool
    fn write_fake_tool(dir: &TempDir, script_body: &str) -> PathBuf {
        let path = dir.path().join("fake-notifytool");
        fs::write(&path, format!("#!/bin/sh\n{script_body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn sends_full_argument_vector_to_tool() {
        let dir = TempDir::new().unwrap();
        let argv_file = dir.path().join("argv.txt");
        let tool = write_fake_tool(
            &dir,
            &format!("printf '%s\\n' \"$@\" > \"{}\"", argv_file.display()),
        );

        Command::cargo_bin("quick-notify")
            .unwrap()
            .args([
                "--title",
                "Backup Complete",
                "--body",
                "Your backup finished successfully.",
                "--subtitle",
                "Job #42",
                "--no-sound",
                "--executable",
            ])
            .arg(&tool)
            .assert()
            .success()
            .stderr(predicate::str::contains("Notification sent"));

        let recorded = fs::read_to_string(&argv_file).unwrap();
        let args: Vec<&str> = recorded.lines().collect();
        assert_eq!(
            args,
            [
                "--title",
                "Backup Complete",
                "--body",
                "Your backup finished successfully.",
                "--subtitle",
                "Job #42",
                "--no-sound",
            ]
        );
    }

    #[test]
    fn defaults_omit_subtitle_and_sound_flags() {
        let dir = TempDir::new().unwrap();
        let argv_file = dir.path().join("argv.txt");
        let tool = write_fake_tool(
            &dir,
            &format!("printf '%s\\n' \"$@\" > \"{}\"", argv_file.display()),
        );

        Command::cargo_bin("quick-notify")
            .unwrap()
            .args(["-t", "T", "-b", "B", "--executable"])
            .arg(&tool)
            .assert()
            .success();

        let recorded = fs::read_to_string(&argv_file).unwrap();
        let args: Vec<&str> = recorded.lines().collect();
        assert_eq!(args, ["--title", "T", "--body", "B"]);
    }

    #[test]
    fn nonzero_exit_is_reported_with_code() {
        let dir = TempDir::new().unwrap();
        let tool = write_fake_tool(&dir, "exit 3");

        Command::cargo_bin("quick-notify")
            .unwrap()
            .args(["-t", "T", "-b", "B", "--executable"])
            .arg(&tool)
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("code 3"));
    }

    #[test]
    fn missing_executable_is_a_launch_error() {
        Command::cargo_bin("quick-notify")
            .unwrap()
            .args([
                "-t",
                "T",
                "-b",
                "B",
                "--executable",
                "/nonexistent/notifytool",
            ])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Failed to launch"));
    }
}

#[test]
fn missing_required_flags_is_a_usage_error() {
    Command::cargo_bin("quick-notify")
        .unwrap()
        .args(["--body", "B"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--title"));
}

#[test]
fn help_lists_tool_flags() {
    Command::cargo_bin("quick-notify")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--subtitle"))
        .stdout(predicate::str::contains("--no-sound"));
}

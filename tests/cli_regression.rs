// Regression tests for the demo runner binary.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

#[test]
fn cli_exits_with_code_one_without_a_sink() {
    let mut cmd = Command::cargo_bin("ctest").unwrap();
    cmd.arg("--no-sink");
    cmd.assert()
        .code(1)
        .stderr(contains("no output sink configured"))
        .stderr(contains("CTest Framework").not());
}

#[test]
fn cli_exits_when_a_passing_assertion_has_no_sink() {
    let mut cmd = Command::cargo_bin("ctest").unwrap();
    cmd.args(["--no-sink", "assertion"]);
    cmd.assert()
        .code(1)
        .stderr(contains("no output sink configured"));
}

#[test]
fn cli_exits_when_a_matching_exception_check_has_no_sink() {
    let mut cmd = Command::cargo_bin("ctest").unwrap();
    cmd.args(["--no-sink", "exception"]);
    cmd.assert()
        .code(1)
        .stderr(contains("no output sink configured"));
}

#[test]
fn cli_reports_passing_run_on_stderr() {
    let mut cmd = Command::cargo_bin("ctest").unwrap();
    cmd.args(["--color", "never"]);
    cmd.assert()
        .success()
        .stderr(contains("          CTest Framework v1.0\n"))
        .stderr(contains("    running test: divide_by_zero_throws_error\n"))
        .stderr(contains("    divide_two_numbers passed.\n"))
        .stderr(contains("    All tests in the group passed.\n"))
        .stderr(contains("            All tests passed.\n"))
        .stderr(contains("\x1b[").not());
}

#[test]
fn cli_colors_when_forced() {
    let mut cmd = Command::cargo_bin("ctest").unwrap();
    cmd.args(["--output", "stdout", "--color", "always"]);
    cmd.assert()
        .success()
        .stdout(contains("\x1b[38;2;52;152;219m"))
        .stdout(contains("\x1b[38;2;0;189;142mpassed.\n\n\x1b[0m"));
}

#[test]
fn cli_writes_report_to_file() {
    let path = std::env::temp_dir().join("ctest_cli_report.txt");
    let _ = fs::remove_file(&path);

    let mut cmd = Command::cargo_bin("ctest").unwrap();
    cmd.arg("--output").arg(&path);
    cmd.assert().success();

    let report = fs::read_to_string(&path).unwrap();
    assert!(report.contains("math_lib\n"));
    assert!(report.contains("    all assessments passed.\n"));
    assert!(!report.contains('\x1b'), "files are uncolored by default");

    let _ = fs::remove_file(&path);
}

#[test]
fn cli_reports_unwritable_output_file() {
    let path = std::env::temp_dir()
        .join("ctest-no-such-dir")
        .join("deeper")
        .join("report.txt");
    let mut cmd = Command::cargo_bin("ctest").unwrap();
    cmd.arg("--output").arg(&path);
    cmd.assert()
        .failure()
        .stderr(contains("failed to open test output file"));
}

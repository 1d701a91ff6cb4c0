//! Tests for how the command line is interpreted.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{batquery_command, battery_command, discharging_battery};

#[test]
fn test_missing_battery_path() {
    batquery_command(&["-p"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("args: battery_path not specified"));
}

#[test]
fn test_no_args() {
    batquery_command(&[])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_unknown_flag() {
    let battery = discharging_battery();

    battery_command(&battery, &["-x"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("args: "))
        .stderr(predicate::str::contains("'-x'"));
}

#[test]
fn test_help_goes_to_stdout() {
    batquery_command(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--time-remaining"));
}

#[test]
fn test_percent_is_default_mode() {
    let battery = discharging_battery();

    battery_command(&battery, &[])
        .assert()
        .success()
        .stdout("50\n");
}

#[test]
fn test_last_mode_flag_wins() {
    let battery = discharging_battery();

    battery_command(&battery, &["-p", "-d"])
        .assert()
        .success()
        .stdout("6.00\n");

    battery_command(&battery, &["-d", "-p"])
        .assert()
        .success()
        .stdout("50\n");
}

#[test]
fn test_trailing_slash_in_path() {
    let battery = discharging_battery();
    let path = format!("{}/", battery.path().display());

    batquery_command(&["-p", &path])
        .assert()
        .success()
        .stdout("50\n");
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let battery = discharging_battery();

    battery_command(&battery, &["-vv", "-d"])
        .assert()
        .success()
        .stdout("6.00\n")
        .stderr(predicate::str::contains("read attribute"));
}

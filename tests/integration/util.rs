use std::{fs, process::Command};

use tempfile::TempDir;

const BATQUERY_EXE_PATH: &str = env!("CARGO_BIN_EXE_batquery");

pub const UEVENT: &str = "POWER_SUPPLY_NAME=BAT0
POWER_SUPPLY_TYPE=Battery
POWER_SUPPLY_STATUS=Discharging
POWER_SUPPLY_PRESENT=1
POWER_SUPPLY_VOLTAGE_MIN_DESIGN=11400000
POWER_SUPPLY_VOLTAGE_NOW=12000000
POWER_SUPPLY_CURRENT_NOW=500000
POWER_SUPPLY_CHARGE_FULL=4000000
POWER_SUPPLY_CHARGE_NOW=2000000
POWER_SUPPLY_CAPACITY=50
";

/// Creates a battery directory containing the given attribute files.
pub fn fake_battery(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

/// A discharging battery at 50%, drawing 6 W with 24 Wh left.
pub fn discharging_battery() -> TempDir {
    fake_battery(&[
        ("capacity", "50\n"),
        ("status", "Discharging\n"),
        ("uevent", UEVENT),
    ])
}

/// Returns the [`Command`] of a binary invocation of batquery.
pub fn batquery_command(args: &[&str]) -> Command {
    let mut cmd = Command::new(BATQUERY_EXE_PATH);
    cmd.args(args);
    cmd
}

/// Like [`batquery_command`], with the battery directory as the last argument.
pub fn battery_command(battery: &TempDir, args: &[&str]) -> Command {
    let mut cmd = batquery_command(args);
    cmd.arg(battery.path());
    cmd
}

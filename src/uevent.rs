pub const UEVENT_READ_LIMIT: u64 = 4096;

const VOLTAGE_NOW: &str = "POWER_SUPPLY_VOLTAGE_NOW=";
const CURRENT_NOW: &str = "POWER_SUPPLY_CURRENT_NOW=";
const CHARGE_NOW: &str = "POWER_SUPPLY_CHARGE_NOW=";

/// Returns the number following `prefix` on the last line that starts with
/// it, or 0 if there is no such line or the value isn't a number.
pub fn scan_field(contents: &str, prefix: &str) -> f64 {
    let mut value = 0.0;

    for line in contents.lines() {
        if let Some(rest) = line.strip_prefix(prefix) {
            value = rest.trim().parse::<f64>().unwrap_or(0.0);
        }
    }

    tracing::trace!(prefix, value, "scanned field");
    value
}

/// The `uevent` values we care about, all in micro-units.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct UeventFields {
    pub voltage_now: f64,
    pub current_now: f64,
    pub charge_now: f64,
}

impl UeventFields {
    pub fn parse(contents: &str) -> Self {
        Self {
            voltage_now: scan_field(contents, VOLTAGE_NOW),
            current_now: scan_field(contents, CURRENT_NOW),
            charge_now: scan_field(contents, CHARGE_NOW),
        }
    }
}

use std::path::Path;

use color_eyre::{eyre::WrapErr, Result};

use crate::{
    attribute::read_attribute,
    output::DisplayMode,
    status::{parse_percent, ChargeState, CAPACITY_READ_LIMIT, STATUS_READ_LIMIT},
    uevent::{UeventFields, UEVENT_READ_LIMIT},
};

/// Everything read from one battery directory. Values that weren't needed
/// for the requested output are left at their defaults.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BatteryReading {
    pub percent: u8,
    pub charge_state: ChargeState,
    /// Microvolts.
    pub voltage_now: f64,
    /// Microamps.
    pub current_now: f64,
    /// Microamp-hours.
    pub charge_now: f64,
}

impl BatteryReading {
    /// Reads only the attributes `mode` needs: `capacity` (and `status` when
    /// an icon is shown) for percent, `uevent` for everything else.
    pub fn read(battery_path: &Path, mode: DisplayMode, show_icon: bool) -> Result<Self> {
        let mut reading = BatteryReading::default();

        match mode {
            DisplayMode::Percent => {
                reading.percent = read_percent(battery_path).wrap_err("battery_percent")?;

                if show_icon {
                    reading.charge_state =
                        read_charge_state(battery_path).wrap_err("charge_status")?;
                }
            }
            DisplayMode::DischargeRate | DisplayMode::TimeRemaining => {
                let fields = read_uevent(battery_path).wrap_err("uevent")?;
                reading.voltage_now = fields.voltage_now;
                reading.current_now = fields.current_now;
                reading.charge_now = fields.charge_now;
            }
        }

        tracing::debug!(?reading, "battery read");
        Ok(reading)
    }
}

fn read_percent(battery_path: &Path) -> Result<u8> {
    let contents = read_attribute(battery_path, "capacity", CAPACITY_READ_LIMIT)?;
    Ok(parse_percent(&contents)?)
}

fn read_charge_state(battery_path: &Path) -> Result<ChargeState> {
    let contents = read_attribute(battery_path, "status", STATUS_READ_LIMIT)?;
    let state = ChargeState::from_status(&contents);
    tracing::debug!(%state, "charge state");
    Ok(state)
}

fn read_uevent(battery_path: &Path) -> Result<UeventFields> {
    let contents = read_attribute(battery_path, "uevent", UEVENT_READ_LIMIT)?;
    Ok(UeventFields::parse(&contents))
}

use crate::battery::BatteryReading;

const MICRO: f64 = 1_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeRemaining {
    Hours(f64),
    /// The battery isn't draining, so there is nothing to divide by.
    Unknown,
}

impl TimeRemaining {
    /// Divides by the magnitude of the draw. Some drivers report a negative
    /// current while discharging, and that draw still empties the battery.
    fn from_quotient(capacity_watt_hours: f64, discharge_watts: f64) -> Self {
        if discharge_watts == 0.0 {
            return TimeRemaining::Unknown;
        }

        let hours = capacity_watt_hours / discharge_watts.abs();
        if hours.is_finite() {
            TimeRemaining::Hours(hours)
        } else {
            TimeRemaining::Unknown
        }
    }

    /// Whole hours and whole minutes, both rounded down.
    pub fn hours_and_minutes(&self) -> Option<(u64, u64)> {
        match self {
            TimeRemaining::Hours(hours) => {
                let minutes = (hours.fract() * 60.0).floor();
                Some((hours.trunc() as u64, minutes as u64))
            }
            TimeRemaining::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    pub discharge_watts: f64,
    pub capacity_now_watt_hours: f64,
    pub time_remaining: TimeRemaining,
}

impl DerivedMetrics {
    pub fn from_reading(reading: &BatteryReading) -> Self {
        let volts = reading.voltage_now / MICRO;
        let amps = reading.current_now / MICRO;
        let amp_hours = reading.charge_now / MICRO;

        let discharge_watts = volts * amps;
        let capacity_now_watt_hours = amp_hours * volts;

        Self {
            discharge_watts,
            capacity_now_watt_hours,
            time_remaining: TimeRemaining::from_quotient(capacity_now_watt_hours, discharge_watts),
        }
    }
}

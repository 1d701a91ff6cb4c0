use std::fmt::Display;

use crate::{
    battery::BatteryReading,
    icon::Icon,
    metrics::{DerivedMetrics, TimeRemaining},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Percent,
    DischargeRate,
    TimeRemaining,
}

impl Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DisplayMode::Percent => "percent",
                DisplayMode::DischargeRate => "discharge rate",
                DisplayMode::TimeRemaining => "time remaining",
            }
        )
    }
}

/// Builds the line to print, without the trailing newline.
///
/// `show_icon` switches every mode to its human readable form: a glyph in
/// front of the percentage, units after numbers and worded durations.
/// Without it each mode prints a bare number.
pub fn render(mode: DisplayMode, show_icon: bool, reading: &BatteryReading) -> String {
    if mode == DisplayMode::Percent {
        return render_percent(show_icon, reading);
    }

    let metrics = DerivedMetrics::from_reading(reading);
    tracing::debug!(
        watts = metrics.discharge_watts,
        watt_hours = metrics.capacity_now_watt_hours,
        time_remaining = ?metrics.time_remaining,
        "derived metrics"
    );

    match mode {
        DisplayMode::DischargeRate => render_discharge_rate(show_icon, &metrics),
        _ => render_time_remaining(show_icon, &metrics),
    }
}

fn render_percent(show_icon: bool, reading: &BatteryReading) -> String {
    if !show_icon {
        return reading.percent.to_string();
    }

    let icon = Icon::select(reading.percent, reading.charge_state.is_charging(), true);
    format!("{} {}%", icon, reading.percent)
}

fn render_discharge_rate(show_icon: bool, metrics: &DerivedMetrics) -> String {
    if show_icon {
        format!("{:.2} W", metrics.discharge_watts)
    } else {
        format!("{:.2}", metrics.discharge_watts)
    }
}

fn render_time_remaining(show_icon: bool, metrics: &DerivedMetrics) -> String {
    if !show_icon {
        return match metrics.time_remaining {
            TimeRemaining::Hours(hours) => format!("{:.2}", hours),
            TimeRemaining::Unknown => "inf".to_string(),
        };
    }

    match metrics.time_remaining.hours_and_minutes() {
        Some((hours, minutes)) => humanize(hours, minutes),
        None => "unknown".to_string(),
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count > 1 {
        format!("{} {}s", count, unit)
    } else {
        format!("{} {}", count, unit)
    }
}

fn humanize(hours: u64, minutes: u64) -> String {
    let mut clauses = vec![];

    if hours > 0 {
        clauses.push(plural(hours, "hour"));
    }
    if minutes > 0 {
        clauses.push(plural(minutes, "minute"));
    }

    if clauses.is_empty() {
        return "less than a minute".to_string();
    }

    clauses.join(" ")
}

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::output::DisplayMode;

#[derive(Parser, Debug)]
#[command(name = "batquery")]
#[command(bin_name = "batquery")]
#[command(version, about = "Print a one-line summary of a battery's state")]
#[command(args_override_self = true)]
pub struct Cli {
    /// Show battery status icon
    #[arg(short, long)]
    pub icon: bool,

    /// Show battery percent (default)
    #[arg(short, long, overrides_with_all = ["discharge_rate", "time_remaining"])]
    pub percent: bool,

    /// Show discharge rate
    #[arg(short, long, overrides_with_all = ["percent", "time_remaining"])]
    pub discharge_rate: bool,

    /// Show time remaining
    #[arg(short, long, overrides_with_all = ["percent", "discharge_rate"])]
    pub time_remaining: bool,

    /// Log to stderr, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Battery directory, e.g. /sys/class/power_supply/BAT0
    pub battery_path: PathBuf,
}

impl Cli {
    /// Mode flags override each other, so at most one of them is set.
    pub fn mode(&self) -> DisplayMode {
        if self.discharge_rate {
            DisplayMode::DischargeRate
        } else if self.time_remaining {
            DisplayMode::TimeRemaining
        } else {
            DisplayMode::Percent
        }
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "off",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

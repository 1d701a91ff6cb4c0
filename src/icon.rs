use std::fmt::Display;

/// Nerd Font Material Design battery glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Charging,
    Full,
    Level90,
    Level80,
    Level70,
    Level60,
    Level50,
    Level40,
    Level30,
    Level20,
    Level10,
    Alert,
}

impl Icon {
    pub fn select(percent: u8, charging: bool, charging_icon_requested: bool) -> Self {
        if charging && charging_icon_requested {
            return Icon::Charging;
        }

        match percent {
            100.. => Icon::Full,
            90.. => Icon::Level90,
            80.. => Icon::Level80,
            70.. => Icon::Level70,
            60.. => Icon::Level60,
            50.. => Icon::Level50,
            40.. => Icon::Level40,
            30.. => Icon::Level30,
            20.. => Icon::Level20,
            10.. => Icon::Level10,
            _ => Icon::Alert,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Charging => "󰂄", // nf-md-battery_charging
            Icon::Full => "󰁹",     // nf-md-battery
            Icon::Level90 => "󰂂",
            Icon::Level80 => "󰂁",
            Icon::Level70 => "󰂀",
            Icon::Level60 => "󰁿",
            Icon::Level50 => "󰁾",
            Icon::Level40 => "󰁽",
            Icon::Level30 => "󰁼",
            Icon::Level20 => "󰁻",
            Icon::Level10 => "󰁺",
            Icon::Alert => "󰂃", // nf-md-battery_alert
        }
    }
}

impl Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

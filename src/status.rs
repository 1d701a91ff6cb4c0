use std::fmt::Display;

/// Enough for "100\n".
pub const CAPACITY_READ_LIMIT: u64 = 4;

/// Only the first character of `status` is looked at.
pub const STATUS_READ_LIMIT: u64 = 1;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("file contained no readable content")]
    NoReadableContent,

    #[error("file contained invalid content")]
    InvalidContent,
}

/// Parses the contents of a `capacity` attribute into a percentage.
pub fn parse_percent(contents: &str) -> Result<u8, ParseError> {
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        return Err(ParseError::NoReadableContent);
    }

    trimmed.parse::<u8>().map_err(|_| ParseError::InvalidContent)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChargeState {
    Charging,
    Discharging,
    NotCharging,
    Full,
    #[default]
    Unknown,
}

impl ChargeState {
    /// Classifies a `status` attribute by its first character. The kernel
    /// writes one of "Charging", "Discharging", "Not charging", "Full" or
    /// "Unknown", and each starts with a different letter.
    pub fn from_status(contents: &str) -> Self {
        match contents.chars().next() {
            Some('C') => ChargeState::Charging,
            Some('D') => ChargeState::Discharging,
            Some('N') => ChargeState::NotCharging,
            Some('F') => ChargeState::Full,
            _ => ChargeState::Unknown,
        }
    }

    pub fn is_charging(&self) -> bool {
        matches!(self, ChargeState::Charging)
    }
}

impl Display for ChargeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ChargeState::Charging => "Charging",
                ChargeState::Discharging => "Discharging",
                ChargeState::NotCharging => "Not charging",
                ChargeState::Full => "Full",
                ChargeState::Unknown => "Unknown",
            }
        )
    }
}

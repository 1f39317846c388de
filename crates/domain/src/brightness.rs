//! Brightness: the level sent to `GET /api/brightness`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// An 8-bit brightness level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Brightness(u8);

impl Brightness {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(u8::MAX);

    #[must_use]
    pub fn new(level: u8) -> Self {
        Self(level)
    }

    #[must_use]
    pub fn level(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Brightness {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidBrightness(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_decimal_level() {
        let brightness: Brightness = "128".parse().unwrap();
        assert_eq!(brightness.level(), 128);
        assert_eq!(brightness.to_string(), "128");
    }

    #[test]
    fn should_parse_bounds() {
        assert_eq!("0".parse::<Brightness>().unwrap(), Brightness::MIN);
        assert_eq!("255".parse::<Brightness>().unwrap(), Brightness::MAX);
    }

    #[test]
    fn should_reject_out_of_range_level() {
        assert_eq!(
            "256".parse::<Brightness>(),
            Err(ValidationError::InvalidBrightness("256".to_string()))
        );
        assert!("-1".parse::<Brightness>().is_err());
    }

    #[test]
    fn should_reject_non_numeric_level() {
        assert!("bright".parse::<Brightness>().is_err());
        assert!("".parse::<Brightness>().is_err());
    }
}

//! Light state: the state token sent to `GET /api/light`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Requested light state, passed to the device verbatim.
///
/// Usually `on` or `off`, but any non-empty token is accepted; the device
/// decides what it means.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LightState(String);

impl LightState {
    #[must_use]
    pub fn on() -> Self {
        Self("on".to_string())
    }

    #[must_use]
    pub fn off() -> Self {
        Self("off".to_string())
    }

    /// Build a state from any token.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyLightState`] if `value` is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyLightState);
        }
        if trimmed.len() == value.len() {
            Ok(Self(value))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LightState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for LightState {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LightState> for String {
    fn from(state: LightState) -> Self {
        state.0
    }
}

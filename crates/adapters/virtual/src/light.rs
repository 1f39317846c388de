//! Virtual light: remembers the last state and brightness it was given.

use std::sync::{Mutex, MutexGuard};

use espanel_domain::brightness::Brightness;
use espanel_domain::light::LightState;

/// A simulated light output.
#[derive(Default)]
pub struct VirtualLight {
    state: Mutex<Option<LightState>>,
    brightness: Mutex<Option<Brightness>>,
}

impl VirtualLight {
    /// Apply `state`, returning the reply the firmware sends: the state
    /// token echoed back.
    pub fn apply_state(&self, state: &LightState) -> String {
        *self.lock_state() = Some(state.clone());
        state.to_string()
    }

    /// Apply `brightness`, returning the reply the firmware sends.
    pub fn apply_brightness(&self, brightness: Brightness) -> String {
        *self.lock_brightness() = Some(brightness);
        format!("Brightness: {brightness}")
    }

    /// Last state applied, if any.
    #[must_use]
    pub fn state(&self) -> Option<LightState> {
        self.lock_state().clone()
    }

    /// Last brightness applied, if any.
    #[must_use]
    pub fn brightness(&self) -> Option<Brightness> {
        *self.lock_brightness()
    }

    fn lock_state(&self) -> MutexGuard<'_, Option<LightState>> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn lock_brightness(&self) -> MutexGuard<'_, Option<Brightness>> {
        self.brightness
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

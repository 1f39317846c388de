//! # espanel-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceApi`: the three device endpoints (status, light, brightness)
//!   - `StatusRenderer`: writes a snapshot into its render targets
//!   - `Notifier`: surfaces a message to the user
//! - Define **driving/inbound ports** as use-case structs:
//!   - `StatusPoller`: poll now, then on a fixed cadence, rendering each snapshot
//!   - `LightController`: set the light state and show the device reply
//!   - `BrightnessController`: set the brightness, logging the outcome
//!
//! ## Dependency rule
//! Depends on `espanel-domain` only (plus `tokio` for the repeating task).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

#[cfg(test)]
mod log_capture;

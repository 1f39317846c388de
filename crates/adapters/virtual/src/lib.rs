//! # espanel-adapter-virtual
//!
//! Virtual/demo device that answers the [`DeviceApi`] in-process, behaving
//! like the firmware's HTTP handlers.
//!
//! | Call | Behaviour |
//! |------|-----------|
//! | `fetch_status` | `Connected`/`Disconnected`, the local IP (`0.0.0.0` when disconnected), seconds since creation |
//! | `set_light` | Remembers the state and echoes the token back |
//! | `set_brightness` | Remembers the level; the `Brightness: <n>` reply is dropped |
//!
//! The device can be made unreachable to exercise failure paths.
//!
//! ## Dependency rule
//!
//! Depends on `espanel-app` (port traits) and `espanel-domain` only.

mod light;

pub use light::VirtualLight;

use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::time::Instant;

use espanel_app::ports::DeviceApi;
use espanel_domain::brightness::Brightness;
use espanel_domain::error::PanelError;
use espanel_domain::light::LightState;
use espanel_domain::status::{StatusSnapshot, Uptime};

/// Returned by every call while the device is unreachable.
#[derive(Debug, thiserror::Error)]
#[error("virtual device is unreachable")]
pub struct Unreachable;

/// A simulated light node.
pub struct VirtualDevice {
    booted_at: Instant,
    ip: Ipv4Addr,
    connected: AtomicBool,
    reachable: AtomicBool,
    light: VirtualLight,
}

impl Default for VirtualDevice {
    fn default() -> Self {
        Self::new(Ipv4Addr::new(192, 168, 4, 1))
    }
}

impl VirtualDevice {
    /// Create a connected, reachable device with the given address.
    ///
    /// Uptime counts from this call.
    #[must_use]
    pub fn new(ip: Ipv4Addr) -> Self {
        Self {
            booted_at: Instant::now(),
            ip,
            connected: AtomicBool::new(true),
            reachable: AtomicBool::new(true),
            light: VirtualLight::default(),
        }
    }

    /// Simulate the station link going up or down.
    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
    }

    /// Simulate the device dropping off (or rejoining) the network.
    pub fn set_reachable(&self, reachable: bool) {
        self.reachable.store(reachable, Ordering::SeqCst);
    }

    /// The simulated light output.
    #[must_use]
    pub fn light(&self) -> &VirtualLight {
        &self.light
    }

    fn ensure_reachable(&self) -> Result<(), PanelError> {
        if self.reachable.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(PanelError::transport(Unreachable))
        }
    }

    fn snapshot(&self) -> StatusSnapshot {
        let connected = self.connected.load(Ordering::SeqCst);
        let (wifi, ip) = if connected {
            ("Connected", self.ip)
        } else {
            ("Disconnected", Ipv4Addr::UNSPECIFIED)
        };
        StatusSnapshot {
            wifi: wifi.to_string(),
            ip: ip.to_string(),
            uptime: Uptime::from_secs(self.booted_at.elapsed().as_secs()),
        }
    }
}

impl DeviceApi for VirtualDevice {
    async fn fetch_status(&self) -> Result<StatusSnapshot, PanelError> {
        self.ensure_reachable()?;
        Ok(self.snapshot())
    }

    async fn set_light(&self, state: &LightState) -> Result<String, PanelError> {
        self.ensure_reachable()?;
        let reply = self.light.apply_state(state);
        tracing::debug!(%state, "virtual light state applied");
        Ok(reply)
    }

    async fn set_brightness(&self, brightness: Brightness) -> Result<(), PanelError> {
        self.ensure_reachable()?;
        let reply = self.light.apply_brightness(brightness);
        tracing::debug!(%reply, "virtual brightness applied");
        Ok(())
    }
}

//! HTTP adapter configuration.

use serde::Deserialize;

/// Where the device is reachable.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Base URL of the device, without the `/api` suffix.
    ///
    /// Defaults to the mDNS name the firmware announces.
    pub base_url: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://esp32.local".to_string(),
        }
    }
}

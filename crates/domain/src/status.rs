//! Status snapshot: one polled reading of the device's connectivity and uptime.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// One status reading returned by `GET /api/status`.
///
/// All three fields are required; a body missing any of them fails to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Human-readable connectivity descriptor (e.g. `Connected`).
    pub wifi: String,
    /// Device IP address as text.
    pub ip: String,
    /// Time since the device booted.
    pub uptime: Uptime,
}

impl StatusSnapshot {
    /// Text to write into each render target, in display order.
    #[must_use]
    pub fn render_fields(&self) -> [(StatusField, String); 3] {
        StatusField::ALL.map(|field| (field, self.text(field)))
    }

    /// Text shown in a single render target.
    #[must_use]
    pub fn text(&self, field: StatusField) -> String {
        match field {
            StatusField::WifiStatus => self.wifi.clone(),
            StatusField::IpAddress => self.ip.clone(),
            StatusField::Uptime => self.uptime.to_string(),
        }
    }
}

/// Render targets a snapshot is written into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusField {
    WifiStatus,
    IpAddress,
    Uptime,
}

impl StatusField {
    /// All targets, in display order.
    pub const ALL: [Self; 3] = [Self::WifiStatus, Self::IpAddress, Self::Uptime];

    /// Stable element identifier of this target.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::WifiStatus => "wifi-status",
            Self::IpAddress => "ip-address",
            Self::Uptime => "uptime",
        }
    }
}

impl fmt::Display for StatusField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

/// Seconds since boot.
///
/// Displays as `<seconds>s`, dropping a zero fraction (`42s`, `42.5s`).
/// Deserialises from any finite non-negative JSON number or from a string
/// holding one, since the firmware quotes the value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Uptime(f64);

impl Uptime {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_secs(secs: u64) -> Self {
        Self(secs as f64)
    }

    fn checked(value: f64) -> Option<Self> {
        // -0.0 passes the bound and is folded into 0
        (value.is_finite() && value >= 0.0).then(|| Self(value.abs()))
    }
}

impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

impl<'de> Deserialize<'de> for Uptime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct UptimeVisitor;

        impl Visitor<'_> for UptimeVisitor {
            type Value = Uptime;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative number or a string holding one")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Uptime, E> {
                Ok(Uptime::from_secs(value))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Uptime, E> {
                u64::try_from(value)
                    .map(Uptime::from_secs)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Uptime, E> {
                Uptime::checked(value)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Float(value), &self))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Uptime, E> {
                value
                    .trim()
                    .parse()
                    .ok()
                    .and_then(Uptime::checked)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_any(UptimeVisitor)
    }
}

//! Device API port: the HTTP endpoints exposed by the light node.

use std::future::Future;

use espanel_domain::brightness::Brightness;
use espanel_domain::error::PanelError;
use espanel_domain::light::LightState;
use espanel_domain::status::StatusSnapshot;

/// Calls against a single device.
///
/// Every call is independent: implementations keep no state between calls
/// that would order or serialise them.
pub trait DeviceApi {
    /// `GET /api/status`, decoded into a snapshot.
    fn fetch_status(&self) -> impl Future<Output = Result<StatusSnapshot, PanelError>> + Send;

    /// `GET /api/light?state=<state>`, returning the plain-text reply.
    ///
    /// The reply is returned whatever the HTTP status; the device reports
    /// a bad request in the body.
    fn set_light(
        &self,
        state: &LightState,
    ) -> impl Future<Output = Result<String, PanelError>> + Send;

    /// `GET /api/brightness?value=<value>`; the reply body is discarded.
    fn set_brightness(
        &self,
        brightness: Brightness,
    ) -> impl Future<Output = Result<(), PanelError>> + Send;
}

impl<T: DeviceApi + Send + Sync> DeviceApi for std::sync::Arc<T> {
    fn fetch_status(&self) -> impl Future<Output = Result<StatusSnapshot, PanelError>> + Send {
        (**self).fetch_status()
    }

    fn set_light(
        &self,
        state: &LightState,
    ) -> impl Future<Output = Result<String, PanelError>> + Send {
        (**self).set_light(state)
    }

    fn set_brightness(
        &self,
        brightness: Brightness,
    ) -> impl Future<Output = Result<(), PanelError>> + Send {
        (**self).set_brightness(brightness)
    }
}

//! Light controller: sets the light state and shows the device's reply.

use espanel_domain::error::PanelError;
use espanel_domain::light::LightState;

use crate::ports::{DeviceApi, Notifier};

/// Sets the light state, surfacing every outcome through the notifier.
pub struct LightController<A, N> {
    api: A,
    notifier: N,
}

impl<A: DeviceApi, N: Notifier> LightController<A, N> {
    /// Create a new controller.
    pub fn new(api: A, notifier: N) -> Self {
        Self { api, notifier }
    }

    /// Request `state` and notify the user with the reply (`Light: <reply>`)
    /// or the failure (`Control failed: <error>`).
    ///
    /// # Errors
    ///
    /// Returns the transport error from the device, after it has been shown
    /// to the user.
    #[tracing::instrument(skip(self, state), fields(state = %state))]
    pub async fn control_light(&self, state: &LightState) -> Result<String, PanelError> {
        match self.api.set_light(state).await {
            Ok(reply) => {
                self.notifier.notify(&format!("Light: {reply}"));
                Ok(reply)
            }
            Err(err) => {
                tracing::warn!(%err, "light control failed");
                self.notifier.notify(&format!("Control failed: {err}"));
                Err(err)
            }
        }
    }
}

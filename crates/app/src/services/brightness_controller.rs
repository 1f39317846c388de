//! Brightness controller: sets the brightness level, logging the outcome.
//!
//! Unlike the light controller, nothing here reaches the user: success and
//! failure only go to the log.

use espanel_domain::brightness::Brightness;
use espanel_domain::error::PanelError;

use crate::ports::DeviceApi;

/// Sets the brightness level on the device.
pub struct BrightnessController<A> {
    api: A,
}

impl<A: DeviceApi> BrightnessController<A> {
    /// Create a new controller.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Request `brightness`, discarding the reply body.
    ///
    /// # Errors
    ///
    /// Returns the transport error from the device, after it has been logged.
    #[tracing::instrument(skip(self, brightness), fields(brightness = %brightness))]
    pub async fn set_brightness(&self, brightness: Brightness) -> Result<(), PanelError> {
        match self.api.set_brightness(brightness).await {
            Ok(()) => {
                tracing::info!("Brightness set to: {brightness}");
                Ok(())
            }
            Err(err) => {
                tracing::error!("Brightness set failed: {err}");
                Err(err)
            }
        }
    }
}

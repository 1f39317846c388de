//! # espanel-adapter-http-hyper
//!
//! HTTP adapter: implements the [`DeviceApi`] port over HTTP/1.1 with a
//! hyper client.
//!
//! ## Endpoints
//!
//! | Call | Request | Response handling |
//! |------|---------|-------------------|
//! | `fetch_status` | `GET /api/status` | JSON body decoded into a snapshot |
//! | `set_light` | `GET /api/light?state=<state>` | Body returned as text |
//! | `set_brightness` | `GET /api/brightness?value=<value>` | Body drained and dropped |
//!
//! The HTTP status code is never treated as a failure on its own: the device
//! reports problems in the body (`400 Missing state parameter`), and a
//! status body that is not JSON fails to decode.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `espanel-app` and `espanel-domain`.

mod config;
mod error;

pub use config::HttpConfig;
pub use error::HttpError;

use hyper::body::Bytes;
use hyper::client::HttpConnector;
use hyper::{Client, Uri};

use espanel_app::ports::DeviceApi;
use espanel_domain::brightness::Brightness;
use espanel_domain::error::PanelError;
use espanel_domain::light::LightState;
use espanel_domain::status::StatusSnapshot;

/// [`DeviceApi`] backed by a hyper HTTP/1.1 client.
///
/// The client pools connections, so a single instance should be shared
/// (e.g. behind an `Arc`) between the poller and the controllers.
pub struct HyperDeviceApi {
    client: Client<HttpConnector>,
    base_url: String,
}

impl HyperDeviceApi {
    /// Create a client for the device at `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidUri`] if the base URL does not parse and
    /// [`HttpError::UnsupportedScheme`] if it is not `http://`.
    pub fn new(config: &HttpConfig) -> Result<Self, HttpError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        let uri: Uri = base_url.parse()?;
        match uri.scheme_str() {
            Some("http") => {}
            Some(other) => return Err(HttpError::UnsupportedScheme(other.to_string())),
            None => return Err(HttpError::UnsupportedScheme(String::new())),
        }

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// The normalised base URL (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build `<base_url><path>[?<key>=<value>]` with a form-urlencoded query.
    fn endpoint(&self, path: &str, query: Option<(&str, &str)>) -> Result<Uri, HttpError> {
        let url = match query {
            Some(pair) => {
                let encoded = serde_urlencoded::to_string([pair].as_slice())?;
                format!("{}{path}?{encoded}", self.base_url)
            }
            None => format!("{}{path}", self.base_url),
        };
        Ok(url.parse()?)
    }

    /// Issue a GET and collect the whole body.
    async fn get(&self, uri: Uri) -> Result<Bytes, HttpError> {
        tracing::trace!(%uri, "GET");
        let response = self.client.get(uri).await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, "device answered with non-success status");
        }
        Ok(hyper::body::to_bytes(response.into_body()).await?)
    }
}

impl DeviceApi for HyperDeviceApi {
    async fn fetch_status(&self) -> Result<StatusSnapshot, PanelError> {
        let uri = self.endpoint("/api/status", None)?;
        let body = self.get(uri).await?;
        let snapshot = serde_json::from_slice(&body).map_err(HttpError::Decode)?;
        Ok(snapshot)
    }

    async fn set_light(&self, state: &LightState) -> Result<String, PanelError> {
        let uri = self.endpoint("/api/light", Some(("state", state.as_str())))?;
        let body = self.get(uri).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    async fn set_brightness(&self, brightness: Brightness) -> Result<(), PanelError> {
        let value = brightness.to_string();
        let uri = self.endpoint("/api/brightness", Some(("value", value.as_str())))?;
        let body = self.get(uri).await?;
        tracing::trace!(len = body.len(), "brightness reply discarded");
        Ok(())
    }
}

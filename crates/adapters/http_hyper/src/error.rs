//! HTTP adapter error types.

use espanel_domain::error::PanelError;

/// Errors specific to the HTTP adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The configured base URL or a derived endpoint is not a valid URI.
    #[error("invalid device URL: {0}")]
    InvalidUri(#[from] hyper::http::uri::InvalidUri),

    /// Only plain `http://` devices are supported.
    #[error("unsupported URL scheme {0:?}, expected \"http\"")]
    UnsupportedScheme(String),

    /// A query parameter could not be encoded.
    #[error("failed to encode query: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// The request failed before a full response body was received.
    #[error("{0}")]
    Transport(#[from] hyper::Error),

    /// The response body is not the expected JSON document.
    #[error("failed to parse response body")]
    Decode(#[source] serde_json::Error),
}

impl HttpError {
    /// Convert into a [`PanelError`] for propagation across port boundaries.
    pub fn into_domain(self) -> PanelError {
        match self {
            Self::Decode(err) => PanelError::Decode(err),
            other => PanelError::transport(other),
        }
    }
}

impl From<HttpError> for PanelError {
    fn from(err: HttpError) -> Self {
        err.into_domain()
    }
}

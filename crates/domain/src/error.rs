//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`PanelError`]
//! via `From` at the port boundary.

/// Error returned by every panel operation.
///
/// A device call fails in one of two ways: the request never produced a body
/// ([`Transport`](Self::Transport)) or the body could not be decoded
/// ([`Decode`](Self::Decode)). Invalid inputs are rejected before any request
/// is made ([`Validation`](Self::Validation)).
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// Input rejected before reaching the device.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Network-level failure talking to the device.
    #[error("device request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The device answered with a body that could not be decoded.
    #[error("failed to decode device response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl PanelError {
    /// Wrap any transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(err))
    }
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("light state must not be empty")]
    EmptyLightState,

    #[error("brightness must be an integer between 0 and 255, got {0:?}")]
    InvalidBrightness(String),
}

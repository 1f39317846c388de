//! User notifications written to a text stream.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use espanel_app::ports::Notifier;

/// Writes each notification on its own line and flushes immediately.
pub struct TerminalNotifier<W> {
    out: Mutex<W>,
}

impl TerminalNotifier<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> Notifier for TerminalNotifier<W> {
    fn notify(&self, message: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = writeln!(out, "{message}").and_then(|()| out.flush()) {
            tracing::warn!(%err, "failed to show notification");
        }
    }
}

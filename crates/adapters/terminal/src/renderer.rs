//! Snapshot renderer writing to a text stream.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use espanel_app::ports::StatusRenderer;
use espanel_domain::status::StatusSnapshot;

/// Renders snapshots as `<element-id>: <text>` lines.
pub struct TerminalRenderer<W> {
    out: Mutex<W>,
}

impl TerminalRenderer<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_snapshot(out: &mut W, snapshot: &StatusSnapshot) -> io::Result<()> {
        for (field, text) in snapshot.render_fields() {
            writeln!(out, "{}: {text}", field.element_id())?;
        }
        writeln!(out)?;
        out.flush()
    }
}

impl<W: Write> StatusRenderer for TerminalRenderer<W> {
    fn render(&self, snapshot: &StatusSnapshot) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = Self::write_snapshot(&mut out, snapshot) {
            tracing::warn!(%err, "failed to render status");
        }
    }
}

//! # espanel-adapter-terminal
//!
//! Text-stream implementations of the presentation ports:
//!
//! - [`TerminalRenderer`] writes each snapshot as one `<element-id>: <text>`
//!   line per render target.
//! - [`TerminalNotifier`] writes a user notification and flushes before
//!   returning, so the message is on screen when the call completes.
//!
//! Both wrap any [`std::io::Write`]; write failures are logged and otherwise
//! ignored, since neither port can report an error.
//!
//! ## Dependency rule
//!
//! Depends on `espanel-app` (port traits) and `espanel-domain` only.

mod notifier;
mod renderer;

pub use notifier::TerminalNotifier;
pub use renderer::TerminalRenderer;

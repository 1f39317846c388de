//! Renderer port: presentation of a status snapshot.

use espanel_domain::status::StatusSnapshot;

/// Writes a snapshot into its render targets.
///
/// Each call overwrites whatever the previous call wrote (last write wins).
pub trait StatusRenderer {
    fn render(&self, snapshot: &StatusSnapshot);
}

impl<T: StatusRenderer + ?Sized> StatusRenderer for std::sync::Arc<T> {
    fn render(&self, snapshot: &StatusSnapshot) {
        (**self).render(snapshot);
    }
}

//! Notifier port: user-facing messages.

/// Shows a message to the user and returns once it has been presented.
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<T: Notifier + ?Sized> Notifier for std::sync::Arc<T> {
    fn notify(&self, message: &str) {
        (**self).notify(message);
    }
}

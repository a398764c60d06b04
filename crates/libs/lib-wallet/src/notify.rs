//! Notification sink.

use shared::Notification;
use tracing::info;

/// Receives user-facing notifications from the session.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<F> Notifier for F
where
    F: Fn(Notification),
{
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}

/// Writes notifications to the log; for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        info!(message = %notification.message, "{}", notification.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_closures_are_notifiers() {
        let seen = RefCell::new(Vec::new());
        let notifier = |n: Notification| seen.borrow_mut().push(n.description);

        notifier.notify(Notification::wallet_disconnected());
        assert_eq!(*seen.borrow(), vec!["Disconnected from wallet".to_string()]);
    }

    #[test]
    fn test_log_notifier_accepts_notifications() {
        LogNotifier.notify(Notification::wallet_connected("8W6Qgin.....SKuJKAL"));
    }
}

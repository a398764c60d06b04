//! Toast notifications.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use lib_wallet::Notifier;
use shared::Notification;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 4_500;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

#[derive(Clone, Copy)]
pub struct NotificationsContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl NotificationsContext {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    /// Show `notification` until it is dismissed or times out.
    pub fn push(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, notification }));

        let this = *self;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        // The app may be gone by the time a timer fires
        self.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Notifier for NotificationsContext {
    fn notify(&self, notification: Notification) {
        log::info!("{}: {}", notification.message, notification.description);
        self.push(notification);
    }
}

pub fn provide_notifications() -> NotificationsContext {
    let context = NotificationsContext {
        toasts: RwSignal::new(Vec::new()),
        next_id: StoredValue::new(0),
    };
    provide_context(context);
    context
}

pub fn use_notifications() -> NotificationsContext {
    expect_context::<NotificationsContext>()
}

//! Toast stack, top right.

use leptos::prelude::*;

use crate::state::notifications::{use_notifications, Toast};

#[component]
pub fn Toasts() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toasts" style="position: fixed; top: 72px; right: 24px; z-index: 1000; width: 320px;">
            <For
                each=move || notifications.toasts()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class="card toast" style="margin-bottom: 12px; cursor: pointer;" on:click=move |_| notifications.dismiss(id)>
                            <strong>{toast.notification.message}</strong>
                            <p style="margin: 4px 0 0;">{toast.notification.description}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}

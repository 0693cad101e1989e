//! Notify Button Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;

/// Ask the server to send a low-stock notice for the current filter
#[component]
pub fn NotifyButton() -> impl IntoView {
    let ctx = use_app_context();
    let (sending, set_sending) = signal(false);

    let on_click = move |_| {
        set_sending.set(true);
        spawn_local(async move {
            commands::notify(ctx).await;
            set_sending.set(false);
        });
    };

    view! {
        <button class="notify-btn" disabled=move || sending.get() on:click=on_click>
            "🔔 通知"
        </button>
    }
}

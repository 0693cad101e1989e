//! Toast Host Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_dismiss_toast, AppStateStoreFields};

/// Notices stacked at the bottom of the page; click to dismiss
#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <div class="toast-host">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast toast-{}", toast.kind.as_str())
                            on:click=move |_| store_dismiss_toast(&store, id)
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

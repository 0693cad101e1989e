//! Zaiko Frontend App
//!
//! Main application component: header actions, item cards and forms.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use rolling_logger::LogHandle;

use crate::commands;
use crate::components::{
    DeleteItemForm, FilterBar, ItemList, LogPanel, NewItemForm, NotifyButton, ToastHost,
};
use crate::context::AppContext;
use crate::models::FormState;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(logs: Option<LogHandle>) -> impl IntoView {
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(store);

    provide_context(store);
    provide_context(ctx);

    // Initial load; filter changes refetch from the select handler
    Effect::new(move |_| {
        tracing::info!(api = %commands::config().base_url, "loading inventory");
        spawn_local(commands::refresh(ctx));
    });

    let form = move || store.view().read().form();

    view! {
        <div class="app-layout">
            <h1>"📦 消耗品管理アプリ"</h1>

            <div class="toolbar">
                <FilterBar />
                <button class="add-btn" on:click=move |_| ctx.open_add_form()>
                    "➕ 新しい消耗品追加"
                </button>
                <button class="remove-btn" on:click=move |_| ctx.open_delete_form()>
                    "🗑 消耗品削除"
                </button>
                <NotifyButton />
            </div>

            <ItemList />

            <Show when=move || form() == FormState::AddOpen>
                <NewItemForm />
            </Show>
            <Show when=move || form() == FormState::DeleteOpen>
                <DeleteItemForm />
            </Show>

            <LogPanel logs=logs.clone() />
            <ToastHost />
        </div>
    }
}

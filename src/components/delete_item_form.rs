//! Delete Item Form Component
//!
//! Delete by exact item name.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;

#[component]
pub fn DeleteItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let (name, set_name) = signal(String::new());

    let on_delete = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let target = name.get_untracked();
        spawn_local(async move {
            if commands::delete_by_name(ctx, target).await {
                set_name.set(String::new());
            }
        });
    };

    view! {
        <form class="delete-item-form" on:submit=on_delete>
            <input
                type="text"
                placeholder="削除する名前"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <div class="form-actions">
                <button type="submit" class="danger">"削除"</button>
                <button type="button" class="secondary" on:click=move |_| ctx.close_form()>
                    "キャンセル"
                </button>
            </div>
        </form>
    }
}

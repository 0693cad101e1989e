//! New Item Form Component
//!
//! Form for adding an item with an existing or new category.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::NewItemDraft;
use crate::store::AppStateStoreFields;

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (name, set_name) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (selected, set_selected) = signal(String::new());
    let (custom, set_custom) = signal(String::new());

    let categories = move || store.view().read().categories().to_vec();

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = NewItemDraft::new(
            &name.get_untracked(),
            &quantity.get_untracked(),
            &selected.get_untracked(),
            &custom.get_untracked(),
        );
        spawn_local(async move {
            if commands::add_item(ctx, draft).await {
                set_name.set(String::new());
                set_quantity.set(String::new());
                set_selected.set(String::new());
                set_custom.set(String::new());
            }
        });
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <input
                type="text"
                placeholder="名前"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="number"
                min="0"
                placeholder="個数"
                prop:value=move || quantity.get()
                on:input=move |ev| set_quantity.set(event_target_value(&ev))
            />
            <select
                prop:value=move || selected.get()
                on:change=move |ev| set_selected.set(event_target_value(&ev))
            >
                <option value="">"カテゴリー選択（既存）"</option>
                <For
                    each=categories
                    key=|category| category.clone()
                    children=move |category| {
                        view! { <option value=category.clone()>{category.clone()}</option> }
                    }
                />
            </select>
            <input
                type="text"
                placeholder="新規カテゴリーを入力（任意）"
                prop:value=move || custom.get()
                on:input=move |ev| set_custom.set(event_target_value(&ev))
            />
            <div class="form-actions">
                <button type="submit" class="primary">"追加"</button>
                <button type="button" class="secondary" on:click=move |_| ctx.close_form()>
                    "キャンセル"
                </button>
            </div>
        </form>
    }
}

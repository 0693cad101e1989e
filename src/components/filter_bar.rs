//! Filter Bar Component
//!
//! Category select; changing it refetches items and categories.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let categories = move || store.view().read().categories().to_vec();
    let current = move || store.view().read().filter().unwrap_or_default().to_string();

    view! {
        <select
            class="filter-select"
            prop:value=current
            on:change=move |ev| {
                let filter = event_target_value(&ev);
                spawn_local(commands::change_filter(ctx, filter));
            }
        >
            <option value="">"すべて"</option>
            <For
                each=categories
                key=|category| category.clone()
                children=move |category| {
                    let value = category.clone();
                    let selected = move || current() == value;
                    view! {
                        <option value=category.clone() selected=selected>{category.clone()}</option>
                    }
                }
            />
        </select>
    }
}

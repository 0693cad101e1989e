//! Quantity Editor Component
//!
//! Pending stock change for one item: direct input, quick steps and confirm.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

use crate::commands;
use crate::context::use_app_context;
use crate::models::ItemId;
use crate::store::AppStateStoreFields;

const STEPS: &[(i64, &str)] = &[(-1, "－1"), (1, "＋1"), (5, "＋5"), (10, "＋10")];

#[component]
pub fn QuantityEditor(id: ItemId) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let id = StoredValue::new(id);

    // Memo so half-typed input ("-", "") is not overwritten by unrelated writes
    let delta = Memo::new(move |_| id.with_value(|id| store.view().read().pending_delta(id)));

    view! {
        <div class="quantity-editor">
            <input
                type="number"
                class="delta-input"
                prop:value=move || delta.get().to_string()
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    let kept = id.with_value(|id| commands::set_pending(ctx, id, &raw));
                    if let Some(kept) = kept {
                        event_target::<HtmlInputElement>(&ev).set_value(&kept.to_string());
                    }
                }
            />
            {STEPS.iter().map(|&(step, label)| {
                view! {
                    <button
                        class=if step < 0 { "step-btn minus" } else { "step-btn plus" }
                        on:click=move |_| id.with_value(|id| commands::bump_pending(ctx, id, step))
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
            <button
                class="confirm-btn"
                on:click=move |_| spawn_local(commands::confirm(ctx, id.get_value()))
            >
                "確定"
            </button>
        </div>
    }
}

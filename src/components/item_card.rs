//! Item Card Component
//!
//! One item: name, quantity badge, days left, category and stock editor.

use leptos::prelude::*;
use leptos::task::spawn_local;

use inventory_sync::{days_left_label, days_level, quantity_level, StockLevel};

use crate::commands;
use crate::components::{DeleteConfirmButton, QuantityEditor};
use crate::context::use_app_context;
use crate::models::Item;

fn badge_class(level: StockLevel) -> String {
    format!("qty-badge level-{}", level.as_str())
}

#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let id = item.id.clone();
    let days_class = format!("days-left level-{}", days_level(item.estimated_days_left).as_str());

    view! {
        <div class="item-card">
            <div class="item-card-header">
                <span class="item-name">{item.name.clone()}</span>
                <span class=badge_class(quantity_level(item.quantity))>{item.quantity}</span>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    on_confirm=Callback::new(move |_| {
                        spawn_local(commands::delete_item(ctx, id.clone()));
                    })
                />
            </div>
            <div class=days_class>{days_left_label(item.estimated_days_left)}</div>
            <div class="item-category">"カテゴリー: " {item.category.clone()}</div>
            <QuantityEditor id=item.id.clone() />
        </div>
    }
}

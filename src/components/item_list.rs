//! Item List Component

use leptos::prelude::*;

use crate::components::ItemCard;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Cards for the loaded items, in server order
#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_context().store;
    let items = move || store.view().read().items().to_vec();

    view! {
        <div class="item-list">
            // Keyed on the displayed fields so a refetch re-renders changed cards
            <For
                each=items
                key=|item| {
                    (
                        item.id.clone(),
                        item.name.clone(),
                        item.quantity,
                        item.category.clone(),
                        item.estimated_days_left.map(f64::to_bits),
                    )
                }
                children=move |item| view! { <ItemCard item=item /> }
            />
        </div>
    }
}

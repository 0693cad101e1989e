//! Delete Confirm Button Component
//!
//! Inline delete with a confirm/cancel step.

use leptos::prelude::*;

/// Shows a × button; clicking it asks "削除?" with ✓/✗.
///
/// # Arguments
/// * `button_class` - CSS class for the initial button
/// * `on_confirm` - Runs when the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);

    view! {
        <Show
            when=move || asking.get()
            fallback=move || view! {
                <button class=button_class.clone() on:click=move |_| set_asking.set(true)>
                    "×"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"削除?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        set_asking.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button class="cancel-btn" on:click=move |_| set_asking.set(false)>
                    "✗"
                </button>
            </span>
        </Show>
    }
}

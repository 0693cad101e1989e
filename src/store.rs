//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use inventory_sync::{InventoryView, ViewHandle};

use crate::models::{Toast, ToastKind};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items, categories, filter, pending deltas and form state
    pub view: InventoryView,
    /// Notices currently on screen
    pub toasts: Vec<Toast>,
    /// Id for the next toast
    pub next_toast_id: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// The store's view field, as the sync controller sees it
#[derive(Clone, Copy)]
pub struct StoreView(pub AppStore);

impl ViewHandle for StoreView {
    fn read<R>(&self, f: impl FnOnce(&InventoryView) -> R) -> R {
        let view = self.0.view().read_untracked();
        f(&*view)
    }

    fn update<R>(&self, f: impl FnOnce(&mut InventoryView) -> R) -> R {
        let field = self.0.view();
        let mut view = field.write();
        f(&mut *view)
    }
}

// ========================
// Store Helper Functions
// ========================

/// Add a toast, returning its id
pub fn store_push_toast(store: &AppStore, kind: ToastKind, message: String) -> u32 {
    let id = store.next_toast_id().get_untracked();
    store.next_toast_id().set(id.wrapping_add(1));
    store.toasts().write().push(Toast { id, kind, message });
    id
}

/// Remove a toast by id (no-op if already gone)
pub fn store_dismiss_toast(store: &AppStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

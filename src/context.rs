//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use inventory_sync::ViewHandle;

use crate::models::ToastKind;
use crate::store::{store_dismiss_toast, store_push_toast, AppStore, StoreView};

/// How long a toast stays up
const TOAST_MILLIS: u32 = 2500;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    pub fn view(&self) -> StoreView {
        StoreView(self.store)
    }

    /// Show a notice; it removes itself after a few seconds
    pub fn toast(&self, kind: ToastKind, message: impl Into<String>) {
        let store = self.store;
        let id = store_push_toast(&store, kind, message.into());
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MILLIS).await;
            store_dismiss_toast(&store, id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.toast(ToastKind::Success, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.toast(ToastKind::Info, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.toast(ToastKind::Error, message);
    }

    pub fn open_add_form(&self) {
        self.view().update(|v| v.open_add_form());
    }

    pub fn open_delete_form(&self) {
        self.view().update(|v| v.open_delete_form());
    }

    pub fn close_form(&self) {
        self.view().update(|v| v.close_form());
    }
}

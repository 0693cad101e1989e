//! Inventory Commands
//!
//! UI-facing actions against the inventory API, organized by domain. Each
//! one runs through the sync controller and turns the outcome into notices.

mod item;
mod notify;

use std::cell::RefCell;

use inventory_sync::{
    ClientConfig, Collection, HttpTransport, InventoryClient, InventoryController, RefreshOutcome,
    SyncResult,
};

use crate::context::AppContext;
use crate::store::StoreView;

pub use item::*;
pub use notify::*;

pub type Controller = InventoryController<HttpTransport, StoreView>;

// ========================
// User-facing notices
// ========================

const CLIENT_UNAVAILABLE: &str = "APIクライアントを初期化できませんでした";
const LIST_ITEMS_FAILED: &str = "アイテム一覧を取得できませんでした";
const LIST_CATEGORIES_FAILED: &str = "カテゴリー一覧を取得できませんでした";

thread_local! {
    static CLIENT: RefCell<Option<InventoryClient<HttpTransport>>> = const { RefCell::new(None) };
}

pub fn config() -> ClientConfig {
    ClientConfig::from_build_env()
}

/// Shared API client, built on first use
fn client() -> SyncResult<InventoryClient<HttpTransport>> {
    CLIENT.with(|cell| {
        if let Some(client) = cell.borrow().as_ref() {
            return Ok(client.clone());
        }
        let client = InventoryClient::new(HttpTransport::new(config())?);
        *cell.borrow_mut() = Some(client.clone());
        Ok(client)
    })
}

/// Controller bound to the app store, or `None` after telling the user
fn controller(ctx: AppContext) -> Option<Controller> {
    match client() {
        Ok(client) => Some(InventoryController::new(client, ctx.view())),
        Err(e) => {
            tracing::error!(error = %e, "cannot build API client");
            ctx.error(CLIENT_UNAVAILABLE);
            None
        }
    }
}

fn report_refresh(ctx: AppContext, outcome: &RefreshOutcome) {
    if outcome.failed(Collection::Items) {
        ctx.error(LIST_ITEMS_FAILED);
    }
    if outcome.failed(Collection::Categories) {
        ctx.error(LIST_CATEGORIES_FAILED);
    }
}

/// Initial load and manual reload
pub async fn refresh(ctx: AppContext) {
    let Some(controller) = controller(ctx) else {
        return;
    };
    let outcome = controller.refresh().await;
    report_refresh(ctx, &outcome);
}

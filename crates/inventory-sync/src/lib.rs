//! Inventory Sync
//!
//! Client side of the consumables inventory:
//! - domain: items, add-form drafts and the error taxonomy
//! - transport: HTTP seam (`Transport` trait, reqwest implementation)
//! - client: one typed call per API operation, with local validation
//! - pending: per-item quantity deltas awaiting confirmation
//! - view: the page state as a plain value with pure transitions
//! - controller: user actions = validate, request, refetch
//! - stock: display thresholds

pub mod client;
pub mod config;
pub mod controller;
pub mod domain;
pub mod pending;
pub mod stock;
pub mod transport;
pub mod view;

#[cfg(test)]
mod fake;

pub use client::{items_path, InventoryClient, NotifyResponse};
pub use config::{ClientConfig, DEFAULT_API_BASE};
pub use controller::{Collection, InventoryController, RefreshOutcome, Refreshed, ViewHandle};
pub use domain::{resolve_category, Item, ItemId, NewItem, NewItemDraft, SyncError, SyncResult};
pub use pending::PendingChanges;
pub use stock::{days_left_label, days_level, quantity_level, StockLevel};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
pub use view::{FetchTicket, FormState, InventoryView};

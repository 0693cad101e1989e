//! Domain Layer
//!
//! Entities exchanged with the inventory API and the error taxonomy.
//! This layer has NO I/O (serde only).

mod error;
mod item;

pub use error::{SyncError, SyncResult};
pub use item::{resolve_category, Item, ItemId, NewItem, NewItemDraft};

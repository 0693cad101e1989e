//! Pending-Change Buffer
//!
//! Per-item quantity deltas the user is composing. Nothing here touches the
//! network; a delta only leaves the client when it is confirmed.

use std::collections::HashMap;

use crate::domain::{Item, ItemId, SyncError, SyncResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingChanges {
    deltas: HashMap<ItemId, i64>,
}

impl PendingChanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffered delta for an item, 0 when nothing is buffered
    pub fn delta(&self, id: &ItemId) -> i64 {
        self.deltas.get(id).copied().unwrap_or(0)
    }

    pub fn set(&mut self, id: &ItemId, value: i64) {
        self.deltas.insert(id.clone(), value);
    }

    /// Parse direct numeric input. Blank input means 0; anything else that
    /// is not a whole number leaves the buffer untouched.
    pub fn set_from_input(&mut self, id: &ItemId, raw: &str) -> SyncResult<i64> {
        let raw = raw.trim();
        let value = if raw.is_empty() {
            0
        } else {
            raw.parse::<i64>().map_err(|_| {
                SyncError::validation(format!("{raw:?} is not a whole number"))
            })?
        };
        self.set(id, value);
        Ok(value)
    }

    pub fn bump(&mut self, id: &ItemId, delta: i64) -> i64 {
        let entry = self.deltas.entry(id.clone()).or_insert(0);
        *entry = entry.saturating_add(delta);
        *entry
    }

    pub fn reset(&mut self, id: &ItemId) {
        if let Some(entry) = self.deltas.get_mut(id) {
            *entry = 0;
        }
    }

    /// Start over for a freshly fetched list: one zero entry per item,
    /// entries for vanished items dropped.
    pub fn replace_for(&mut self, items: &[Item]) {
        self.deltas = items.iter().map(|item| (item.id.clone(), 0)).collect();
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.deltas.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }
}

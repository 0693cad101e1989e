//! Item Entity
//!
//! A tracked consumable as served by the inventory API, plus the add-form
//! draft that becomes one.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{SyncError, SyncResult};

/// Server-assigned item identifier (opaque)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A consumable item (matches the API's JSON shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: ItemId,
    pub name: String,
    /// Server-authoritative stock count
    pub quantity: u32,
    pub category: String,
    /// Computed server-side; absent until enough history exists
    #[serde(rename = "estimatedDaysLeft", default)]
    pub estimated_days_left: Option<f64>,
}

impl Item {
    pub fn new(id: impl Into<String>, name: &str, quantity: u32, category: &str) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.to_string(),
            quantity,
            category: category.to_string(),
            estimated_days_left: None,
        }
    }

    pub fn with_days_left(mut self, days: f64) -> Self {
        self.estimated_days_left = Some(days);
        self
    }
}

/// Raw add-form input, exactly as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewItemDraft {
    pub name: String,
    pub quantity: String,
    /// Value picked from the existing-category select
    pub selected_category: String,
    /// Free-text category; wins over the select when non-blank
    pub custom_category: String,
}

/// Validated body of a create request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub name: String,
    pub quantity: u32,
    pub category: String,
}

/// Pick the category for a new item. A non-blank free-text value always
/// takes precedence over the selected one.
pub fn resolve_category(custom: &str, selected: &str) -> String {
    let custom = custom.trim();
    if custom.is_empty() {
        selected.trim().to_string()
    } else {
        custom.to_string()
    }
}

fn parse_quantity(raw: &str) -> SyncResult<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(SyncError::validation("quantity is required"));
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| SyncError::validation(format!("quantity {raw:?} is not a number")))?;
    if !value.is_finite() {
        return Err(SyncError::validation(format!("quantity {raw:?} is not finite")));
    }
    if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(SyncError::validation(format!(
            "quantity {raw:?} must be a non-negative whole number"
        )));
    }
    Ok(value as u32)
}

impl NewItemDraft {
    pub fn new(name: &str, quantity: &str, selected_category: &str, custom_category: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: quantity.to_string(),
            selected_category: selected_category.to_string(),
            custom_category: custom_category.to_string(),
        }
    }

    /// Check the draft without touching the network.
    pub fn validate(&self) -> SyncResult<NewItem> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(SyncError::validation("name is required"));
        }
        let quantity = parse_quantity(&self.quantity)?;
        let category = resolve_category(&self.custom_category, &self.selected_category);
        if category.is_empty() {
            return Err(SyncError::validation("category is required"));
        }
        Ok(NewItem {
            name: name.to_string(),
            quantity,
            category,
        })
    }
}

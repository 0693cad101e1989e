//! Inventory View Model
//!
//! Everything the page shows, as one plain value. Each method is a
//! transition (state, event) -> state with no I/O, so the whole page logic
//! can be exercised without a browser.
//!
//! Fetches are tagged with a [`FetchTicket`]. Only the response carrying the
//! latest ticket for its collection is applied; a slow response that lands
//! after a newer request was issued is dropped.

use crate::domain::{Item, ItemId, SyncError, SyncResult};
use crate::pending::PendingChanges;

/// Which form is shown. Forms only open from `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Closed,
    AddOpen,
    DeleteOpen,
}

/// Sequence number handed out when a fetch starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryView {
    items: Vec<Item>,
    categories: Vec<String>,
    filter: Option<String>,
    pending: PendingChanges,
    form: FormState,
    items_seq: u64,
    categories_seq: u64,
}

impl InventoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn pending(&self) -> &PendingChanges {
        &self.pending
    }

    pub fn pending_delta(&self, id: &ItemId) -> i64 {
        self.pending.delta(id)
    }

    pub fn form(&self) -> FormState {
        self.form
    }

    // ========================
    // Fetch results
    // ========================

    pub fn begin_items_fetch(&mut self) -> FetchTicket {
        self.items_seq += 1;
        FetchTicket(self.items_seq)
    }

    /// Replace the item list if `ticket` is still the latest one. Resets the
    /// pending buffer to match the new list. Returns whether it was applied.
    pub fn apply_items(&mut self, ticket: FetchTicket, items: Vec<Item>) -> bool {
        if !self.is_latest_items(ticket) {
            tracing::debug!(ticket = ticket.0, latest = self.items_seq, "dropping stale item list");
            return false;
        }
        self.pending.replace_for(&items);
        self.items = items;
        true
    }

    /// False once a newer item fetch has started
    pub fn is_latest_items(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.items_seq
    }

    pub fn begin_categories_fetch(&mut self) -> FetchTicket {
        self.categories_seq += 1;
        FetchTicket(self.categories_seq)
    }

    pub fn apply_categories(&mut self, ticket: FetchTicket, categories: Vec<String>) -> bool {
        if !self.is_latest_categories(ticket) {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.categories_seq,
                "dropping stale category list"
            );
            return false;
        }
        self.categories = categories;
        true
    }

    pub fn is_latest_categories(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.categories_seq
    }

    // ========================
    // Filter
    // ========================

    /// Blank counts as "no filter". Returns true when the filter changed.
    pub fn set_filter(&mut self, filter: Option<&str>) -> bool {
        let filter = filter.map(str::trim).filter(|f| !f.is_empty()).map(str::to_string);
        if filter == self.filter {
            return false;
        }
        self.filter = filter;
        true
    }

    // ========================
    // Pending changes
    // ========================

    /// Overwrite an item's buffered delta. Unknown ids are ignored so the
    /// buffer never holds entries for items that are not shown.
    pub fn set_pending_delta(&mut self, id: &ItemId, value: i64) -> bool {
        if self.item(id).is_none() {
            return false;
        }
        self.pending.set(id, value);
        true
    }

    pub fn set_pending_from_input(&mut self, id: &ItemId, raw: &str) -> SyncResult<i64> {
        if self.item(id).is_none() {
            return Err(SyncError::NotFound(id.to_string()));
        }
        self.pending.set_from_input(id, raw)
    }

    pub fn bump_pending(&mut self, id: &ItemId, delta: i64) -> Option<i64> {
        self.item(id)?;
        Some(self.pending.bump(id, delta))
    }

    pub fn reset_pending(&mut self, id: &ItemId) {
        self.pending.reset(id);
    }

    // ========================
    // Forms
    // ========================

    pub fn open_add_form(&mut self) -> bool {
        self.open(FormState::AddOpen)
    }

    pub fn open_delete_form(&mut self) -> bool {
        self.open(FormState::DeleteOpen)
    }

    fn open(&mut self, form: FormState) -> bool {
        if self.form != FormState::Closed {
            return false;
        }
        self.form = form;
        true
    }

    pub fn close_form(&mut self) {
        self.form = FormState::Closed;
    }

    // ========================
    // Lookup
    // ========================

    /// Resolve a delete-by-name target among the loaded items. The trimmed
    /// name must match exactly one item.
    pub fn find_by_name(&self, name: &str) -> SyncResult<&Item> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SyncError::validation("name is required"));
        }
        let mut matches = self.items.iter().filter(|item| item.name == name);
        match (matches.next(), matches.count()) {
            (None, _) => Err(SyncError::NotFound(name.to_string())),
            (Some(item), 0) => Ok(item),
            (Some(_), rest) => Err(SyncError::Ambiguous {
                name: name.to_string(),
                count: rest + 1,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(items: Vec<Item>) -> InventoryView {
        let mut view = InventoryView::new();
        let ticket = view.begin_items_fetch();
        assert!(view.apply_items(ticket, items));
        view
    }

    fn soap() -> Item {
        Item::new("a", "Soap", 0, "Bath")
    }

    #[test]
    fn test_apply_items_resets_pending() {
        let mut view = loaded(vec![soap()]);
        view.set_pending_delta(&"a".into(), 4);

        let ticket = view.begin_items_fetch();
        view.apply_items(ticket, vec![soap(), Item::new("b", "Rice", 2, "Kitchen")]);

        assert_eq!(view.items().len(), 2);
        assert_eq!(view.pending_delta(&"a".into()), 0);
        assert!(view.pending().contains(&"b".into()));
    }

    #[test]
    fn test_stale_items_dropped() {
        let mut view = InventoryView::new();
        let slow = view.begin_items_fetch();
        let fast = view.begin_items_fetch();
        assert!(!view.is_latest_items(slow));
        assert!(view.is_latest_items(fast));

        assert!(view.apply_items(fast, vec![soap()]));
        assert!(!view.apply_items(slow, vec![]));
        assert_eq!(view.items(), &[soap()]);
    }

    #[test]
    fn test_stale_categories_dropped() {
        let mut view = InventoryView::new();
        let slow = view.begin_categories_fetch();
        let fast = view.begin_categories_fetch();
        assert!(!view.is_latest_categories(slow));

        assert!(view.apply_categories(fast, vec!["Bath".into()]));
        assert!(!view.apply_categories(slow, vec!["Old".into()]));
        assert_eq!(view.categories(), &["Bath".to_string()]);
    }

    #[test]
    fn test_set_filter() {
        let mut view = InventoryView::new();
        assert!(!view.set_filter(Some("  ")));
        assert!(view.set_filter(Some("Bath")));
        assert!(!view.set_filter(Some("Bath")));
        assert_eq!(view.filter(), Some("Bath"));
        assert!(view.set_filter(None));
        assert_eq!(view.filter(), None);
    }

    #[test]
    fn test_pending_only_for_loaded_items() {
        let mut view = loaded(vec![soap()]);
        assert!(!view.set_pending_delta(&"zzz".into(), 3));
        assert_eq!(view.bump_pending(&"zzz".into(), 1), None);
        assert!(view.set_pending_from_input(&"zzz".into(), "2").is_err());
        assert!(!view.pending().contains(&"zzz".into()));
    }

    #[test]
    fn test_bump_then_read() {
        let mut view = loaded(vec![soap()]);
        let id = ItemId::new("a");
        view.set_pending_delta(&id, 0);
        view.bump_pending(&id, 1);
        view.bump_pending(&id, 1);
        view.bump_pending(&id, -1);
        assert_eq!(view.pending_delta(&id), 1);
    }

    #[test]
    fn test_form_transitions() {
        let mut view = InventoryView::new();
        assert_eq!(view.form(), FormState::Closed);

        assert!(view.open_add_form());
        assert!(!view.open_delete_form());
        assert_eq!(view.form(), FormState::AddOpen);

        view.close_form();
        assert!(view.open_delete_form());
        assert!(!view.open_add_form());
        assert_eq!(view.form(), FormState::DeleteOpen);

        view.close_form();
        assert_eq!(view.form(), FormState::Closed);
    }

    #[test]
    fn test_find_by_name() {
        let view = loaded(vec![
            soap(),
            Item::new("b", "Rice", 2, "Kitchen"),
            Item::new("c", "Rice", 5, "Storage"),
        ]);

        assert_eq!(view.find_by_name("  Soap ").unwrap().id, ItemId::new("a"));
        assert_eq!(view.find_by_name("soap"), Err(SyncError::NotFound("soap".into())));
        assert_eq!(
            view.find_by_name("Rice"),
            Err(SyncError::Ambiguous {
                name: "Rice".into(),
                count: 2,
            })
        );
        assert!(matches!(view.find_by_name(" "), Err(SyncError::Validation(_))));
    }
}

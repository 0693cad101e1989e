//! Inventory Controller
//!
//! Runs user actions against the API and feeds the results into the view
//! model. Mutations never patch the view locally: every successful create,
//! delete or quantity update is followed by a refetch.
//!
//! The view lives behind a [`ViewHandle`] so the same controller drives a
//! `RefCell` in tests and a reactive store in the UI. Borrows of the view
//! are never held across an `.await`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::client::InventoryClient;
use crate::domain::{Item, ItemId, NewItemDraft, SyncError, SyncResult};
use crate::transport::Transport;
use crate::view::InventoryView;


/// Access to wherever the view model is stored
pub trait ViewHandle {
    fn read<R>(&self, f: impl FnOnce(&InventoryView) -> R) -> R;
    fn update<R>(&self, f: impl FnOnce(&mut InventoryView) -> R) -> R;
}

impl ViewHandle for RefCell<InventoryView> {
    fn read<R>(&self, f: impl FnOnce(&InventoryView) -> R) -> R {
        f(&*self.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut InventoryView) -> R) -> R {
        f(&mut *self.borrow_mut())
    }
}

impl<V: ViewHandle + ?Sized> ViewHandle for Rc<V> {
    fn read<R>(&self, f: impl FnOnce(&InventoryView) -> R) -> R {
        (**self).read(f)
    }

    fn update<R>(&self, f: impl FnOnce(&mut InventoryView) -> R) -> R {
        (**self).update(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Items,
    Categories,
}

/// Fetches that failed during a refresh. The view keeps its previous
/// contents for those collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefreshOutcome {
    pub failures: Vec<(Collection, SyncError)>,
}

impl RefreshOutcome {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed(&self, collection: Collection) -> bool {
        self.failures.iter().any(|(c, _)| *c == collection)
    }
}

/// A successful mutation plus the refetch that followed it
#[derive(Debug, Clone, PartialEq)]
pub struct Refreshed<T> {
    pub value: T,
    pub refresh: RefreshOutcome,
}

#[derive(Debug, Clone)]
pub struct InventoryController<T, V> {
    client: InventoryClient<T>,
    view: V,
}

impl<T: Transport, V: ViewHandle> InventoryController<T, V> {
    pub fn new(client: InventoryClient<T>, view: V) -> Self {
        Self { client, view }
    }

    pub fn client(&self) -> &InventoryClient<T> {
        &self.client
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    // ========================
    // Refresh
    // ========================

    /// Fetch items (with the active filter) and categories. Failures of
    /// fetches already superseded by a newer one are not reported.
    pub async fn refresh(&self) -> RefreshOutcome {
        let mut outcome = self.refresh_items().await;
        if let Err(e) = self.fetch_categories().await {
            outcome.failures.push((Collection::Categories, e));
        }
        outcome
    }

    pub async fn refresh_items(&self) -> RefreshOutcome {
        let mut outcome = RefreshOutcome::default();
        if let Err(e) = self.fetch_items().await {
            outcome.failures.push((Collection::Items, e));
        }
        outcome
    }

    async fn fetch_items(&self) -> SyncResult<bool> {
        let (ticket, filter) = self
            .view
            .update(|v| (v.begin_items_fetch(), v.filter().map(str::to_string)));
        match self.client.list_items(filter.as_deref()).await {
            Ok(items) => {
                tracing::debug!(count = items.len(), filter = ?filter, "items fetched");
                Ok(self.view.update(|v| v.apply_items(ticket, items)))
            }
            Err(e) if !self.view.read(|v| v.is_latest_items(ticket)) => {
                tracing::debug!(error = %e, "ignoring failure of superseded item fetch");
                Ok(false)
            }
            Err(e) => {
                tracing::warn!(error = %e, "item list fetch failed");
                Err(e)
            }
        }
    }

    async fn fetch_categories(&self) -> SyncResult<bool> {
        let ticket = self.view.update(|v| v.begin_categories_fetch());
        match self.client.list_categories().await {
            Ok(categories) => Ok(self.view.update(|v| v.apply_categories(ticket, categories))),
            Err(e) if !self.view.read(|v| v.is_latest_categories(ticket)) => {
                tracing::debug!(error = %e, "ignoring failure of superseded category fetch");
                Ok(false)
            }
            Err(e) => {
                tracing::warn!(error = %e, "category list fetch failed");
                Err(e)
            }
        }
    }

    /// Set the category filter; refreshes only when it actually changed.
    pub async fn change_filter(&self, filter: Option<&str>) -> Option<RefreshOutcome> {
        if !self.view.update(|v| v.set_filter(filter)) {
            return None;
        }
        Some(self.refresh().await)
    }

    // ========================
    // Mutations
    // ========================

    pub async fn add_item(&self, draft: &NewItemDraft) -> SyncResult<Refreshed<Item>> {
        let created = self.client.create_item(draft).await?;
        self.view.update(|v| v.close_form());
        let refresh = self.refresh().await;
        Ok(Refreshed {
            value: created,
            refresh,
        })
    }

    /// Delete the single loaded item with this exact (trimmed) name.
    pub async fn delete_by_name(&self, name: &str) -> SyncResult<Refreshed<Item>> {
        let target = self.view.read(|v| v.find_by_name(name).cloned())?;
        self.client.delete_item(&target.id).await?;
        self.view.update(|v| v.close_form());
        let refresh = self.refresh().await;
        Ok(Refreshed {
            value: target,
            refresh,
        })
    }

    pub async fn delete_item(&self, id: &ItemId) -> SyncResult<Refreshed<()>> {
        self.client.delete_item(id).await?;
        let refresh = self.refresh().await;
        Ok(Refreshed { value: (), refresh })
    }

    /// Send the buffered delta for an item. A zero delta is refused
    /// locally and leaves the buffer as it was.
    pub async fn confirm(&self, id: &ItemId) -> SyncResult<Refreshed<Item>> {
        let delta = self.view.read(|v| v.pending_delta(id));
        let updated = self.client.update_quantity(id, delta).await?;
        self.view.update(|v| v.reset_pending(id));
        let refresh = self.refresh_items().await;
        Ok(Refreshed {
            value: updated,
            refresh,
        })
    }

    /// Low-stock notification for the active filter (or everything).
    pub async fn notify(&self) -> SyncResult<String> {
        let filter = self.view.read(|v| v.filter().map(str::to_string));
        self.client.notify(filter.as_deref()).await
    }

    // ========================
    // Local edits
    // ========================

    pub fn set_pending_from_input(&self, id: &ItemId, raw: &str) -> SyncResult<i64> {
        self.view.update(|v| v.set_pending_from_input(id, raw))
    }

    pub fn bump_pending(&self, id: &ItemId, delta: i64) -> Option<i64> {
        self.view.update(|v| v.bump_pending(id, delta))
    }
}

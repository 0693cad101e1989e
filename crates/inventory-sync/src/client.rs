//! Sync Layer
//!
//! One method per inventory API operation. Everything that can be checked
//! without the network is checked before a request is built.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{Item, ItemId, NewItemDraft, SyncError, SyncResult};
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// Same reserved set as JavaScript's `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode(component: &str) -> String {
    utf8_percent_encode(component, COMPONENT).to_string()
}

/// `/items`, scoped to a category when one is given
pub fn items_path(filter: Option<&str>) -> String {
    match filter.map(str::trim).filter(|c| !c.is_empty()) {
        Some(category) => format!("/items?category={}", encode(category)),
        None => "/items".to_string(),
    }
}

fn item_path(id: &ItemId) -> String {
    format!("/items/{}", encode(id.as_str()))
}

#[derive(Debug, Serialize)]
struct NotifyArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NotifyResponse {
    pub message: String,
}

/// Typed client for the inventory API
#[derive(Debug, Clone)]
pub struct InventoryClient<T> {
    transport: T,
}

impl<T: Transport> InventoryClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call(&self, request: ApiRequest) -> SyncResult<ApiResponse> {
        let resp = self.transport.send(&request).await?;
        if !resp.is_success() {
            tracing::warn!(
                method = ?request.method,
                path = %request.path,
                status = resp.status,
                "inventory API rejected request"
            );
            return Err(SyncError::Api {
                status: resp.status,
                body: resp.body,
            });
        }
        Ok(resp)
    }

    async fn call_json<R: DeserializeOwned>(&self, request: ApiRequest) -> SyncResult<R> {
        let resp = self.call(request).await?;
        serde_json::from_str(&resp.body).map_err(|e| SyncError::Decode(e.to_string()))
    }

    pub async fn list_items(&self, filter: Option<&str>) -> SyncResult<Vec<Item>> {
        self.call_json(ApiRequest::get(items_path(filter))).await
    }

    pub async fn list_categories(&self) -> SyncResult<Vec<String>> {
        self.call_json(ApiRequest::get("/categories")).await
    }

    /// Validates the draft locally, then creates the item.
    pub async fn create_item(&self, draft: &NewItemDraft) -> SyncResult<Item> {
        let new_item = draft.validate()?;
        let body = serde_json::to_value(&new_item).map_err(|e| SyncError::Decode(e.to_string()))?;
        let created: Item = self.call_json(ApiRequest::post("/items", body)).await?;
        tracing::info!(id = %created.id, name = %created.name, "item created");
        Ok(created)
    }

    pub async fn delete_item(&self, id: &ItemId) -> SyncResult<()> {
        self.call(ApiRequest::delete(item_path(id))).await?;
        tracing::info!(%id, "item deleted");
        Ok(())
    }

    /// Applies a stock delta. A zero delta is refused without a request.
    pub async fn update_quantity(&self, id: &ItemId, delta: i64) -> SyncResult<Item> {
        if delta == 0 {
            return Err(SyncError::validation("quantity change is 0"));
        }
        let path = format!("{}/quantity", item_path(id));
        let updated: Item = self
            .call_json(ApiRequest::put(path, json!({ "change": delta })))
            .await?;
        tracing::info!(%id, delta, quantity = updated.quantity, "quantity updated");
        Ok(updated)
    }

    /// Asks the service to send a low-stock notification; returns its message.
    pub async fn notify(&self, category: Option<&str>) -> SyncResult<String> {
        let args = NotifyArgs {
            category: category.map(str::trim).filter(|c| !c.is_empty()),
        };
        let body = serde_json::to_value(&args).map_err(|e| SyncError::Decode(e.to_string()))?;
        let resp: NotifyResponse = self.call_json(ApiRequest::post("/notify", body)).await?;
        Ok(resp.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeRemote;
    use crate::transport::Method;

    fn setup() -> (FakeRemote, InventoryClient<FakeRemote>) {
        let remote = FakeRemote::new();
        remote.insert(Item::new("a", "Soap", 0, "Bath"));
        remote.insert(Item::new("b", "Sponge", 4, "Kitchen").with_days_left(9.0));
        (remote.clone(), InventoryClient::new(remote))
    }

    #[test]
    fn test_items_path() {
        assert_eq!(items_path(None), "/items");
        assert_eq!(items_path(Some("  ")), "/items");
        assert_eq!(items_path(Some("Bath")), "/items?category=Bath");
        assert_eq!(
            items_path(Some("台所 & 浴室")),
            "/items?category=%E5%8F%B0%E6%89%80%20%26%20%E6%B5%B4%E5%AE%A4"
        );
    }

    #[test]
    fn test_item_path_is_encoded() {
        assert_eq!(item_path(&ItemId::new("a/b")), "/items/a%2Fb");
    }

    #[tokio::test]
    async fn test_list_items_with_filter() {
        let (remote, client) = setup();
        let items = client.list_items(Some("Kitchen")).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Sponge");
        assert_eq!(remote.requests()[0].path, "/items?category=Kitchen");
    }

    #[tokio::test]
    async fn test_list_categories() {
        let (_remote, client) = setup();
        let categories = client.list_categories().await.unwrap();
        assert_eq!(categories, vec!["Bath".to_string(), "Kitchen".to_string()]);
    }

    #[tokio::test]
    async fn test_create_rejected_locally() {
        let (remote, client) = setup();
        let err = client
            .create_item(&NewItemDraft::new("", "3", "Kitchen", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, SyncError::Validation(_)));
        assert!(remote.requests().is_empty());
    }

    #[tokio::test]
    async fn test_create_sends_resolved_category() {
        let (remote, client) = setup();
        let created = client
            .create_item(&NewItemDraft::new("Shampoo", "2", "Kitchen", " Bath "))
            .await
            .unwrap();
        assert_eq!(created.category, "Bath");

        let sent = remote.requests().pop().unwrap();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(
            sent.body.unwrap(),
            json!({"name": "Shampoo", "quantity": 2, "category": "Bath"})
        );
    }

    #[tokio::test]
    async fn test_zero_delta_never_sent() {
        let (remote, client) = setup();
        let err = client.update_quantity(&"a".into(), 0).await.unwrap_err();
        assert!(err.is_local());
        assert!(remote.requests().is_empty());
    }

    #[tokio::test]
    async fn test_update_quantity_body() {
        let (remote, client) = setup();
        let updated = client.update_quantity(&"b".into(), -3).await.unwrap();
        assert_eq!(updated.quantity, 1);

        let sent = remote.requests().pop().unwrap();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.path, "/items/b/quantity");
        assert_eq!(sent.body.unwrap(), json!({"change": -3}));
    }

    #[tokio::test]
    async fn test_api_error_status() {
        let (remote, client) = setup();
        remote.fail_next(500);
        let err = client.list_items(None).await.unwrap_err();
        assert_eq!(
            err,
            SyncError::Api {
                status: 500,
                body: "injected failure".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_network_error() {
        let (remote, client) = setup();
        remote.go_offline();
        let err = client.delete_item(&"a".into()).await.unwrap_err();
        assert!(matches!(err, SyncError::Network(_)));
    }

    #[tokio::test]
    async fn test_notify_scopes_category() {
        let (remote, client) = setup();
        let message = client.notify(Some("Bath")).await.unwrap();
        assert_eq!(message, "1 item(s) low in Bath");
        assert_eq!(remote.requests()[0].body, Some(json!({"category": "Bath"})));

        client.notify(None).await.unwrap();
        assert_eq!(remote.requests()[1].body, Some(json!({})));
    }
}

//! In-memory stand-in for the inventory API, used by tests.
//!
//! Stores items, derives categories, applies quantity deltas and records
//! every request it receives.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use async_trait::async_trait;
use percent_encoding::percent_decode_str;
use serde_json::{json, Value};

use crate::domain::{Item, ItemId, SyncError, SyncResult};
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

#[derive(Debug, Default)]
struct RemoteState {
    items: Vec<Item>,
    next_id: u32,
    requests: Vec<ApiRequest>,
    fail_next: Option<u16>,
    offline: bool,
}

#[derive(Debug, Clone, Default)]
pub struct FakeRemote {
    state: Rc<RefCell<RemoteState>>,
}

fn decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

fn ok(body: Value) -> ApiResponse {
    ApiResponse::new(200, body.to_string())
}

fn status(code: u16, msg: &str) -> ApiResponse {
    ApiResponse::new(code, msg)
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, item: Item) {
        self.state.borrow_mut().items.push(item);
    }

    /// Server-side state as a fresh list fetch would see it
    pub fn items(&self) -> Vec<Item> {
        self.state.borrow().items.clone()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn clear_requests(&self) {
        self.state.borrow_mut().requests.clear();
    }

    /// Answer the next request with this status instead of handling it
    pub fn fail_next(&self, code: u16) {
        self.state.borrow_mut().fail_next = Some(code);
    }

    pub fn go_offline(&self) {
        self.state.borrow_mut().offline = true;
    }

    fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let mut state = self.state.borrow_mut();
        let (path, query) = match request.path.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (request.path.as_str(), None),
        };
        let segments: Vec<String> = path.trim_start_matches('/').split('/').map(decode).collect();
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

        match (request.method, segments.as_slice()) {
            (Method::Get, ["items"]) => {
                let filter = query
                    .and_then(|q| q.strip_prefix("category="))
                    .map(decode);
                let items: Vec<&Item> = state
                    .items
                    .iter()
                    .filter(|i| filter.as_deref().map_or(true, |c| i.category == c))
                    .collect();
                ok(json!(items))
            }
            (Method::Get, ["categories"]) => {
                let categories: BTreeSet<&str> =
                    state.items.iter().map(|i| i.category.as_str()).collect();
                ok(json!(categories))
            }
            (Method::Post, ["items"]) => {
                let body = request.body.clone().unwrap_or(Value::Null);
                let (Some(name), Some(quantity), Some(category)) = (
                    body["name"].as_str(),
                    body["quantity"].as_u64(),
                    body["category"].as_str(),
                ) else {
                    return status(400, "bad item");
                };
                state.next_id += 1;
                let id = format!("srv-{}", state.next_id);
                let item = Item::new(id, name, quantity as u32, category);
                state.items.push(item.clone());
                ok(json!(item))
            }
            (Method::Delete, ["items", id]) => {
                let before = state.items.len();
                state.items.retain(|i| i.id.as_str() != *id);
                if state.items.len() == before {
                    status(404, "not found")
                } else {
                    ok(json!({ "ok": true }))
                }
            }
            (Method::Put, ["items", id, "quantity"]) => {
                let Some(change) = request.body.as_ref().and_then(|b| b["change"].as_i64()) else {
                    return status(400, "bad change");
                };
                let Some(item) = state.items.iter_mut().find(|i| i.id == ItemId::new(*id)) else {
                    return status(404, "not found");
                };
                let quantity = i64::from(item.quantity) + change;
                if quantity < 0 {
                    return status(400, "quantity below zero");
                }
                item.quantity = quantity as u32;
                ok(json!(item))
            }
            (Method::Post, ["notify"]) => {
                let category = request
                    .body
                    .as_ref()
                    .and_then(|b| b["category"].as_str())
                    .map(str::to_string);
                let low = state
                    .items
                    .iter()
                    .filter(|i| category.as_deref().map_or(true, |c| i.category == c))
                    .filter(|i| i.quantity <= 1)
                    .count();
                let message = match category {
                    Some(c) => format!("{low} item(s) low in {c}"),
                    None => format!("{low} item(s) low"),
                };
                ok(json!({ "message": message }))
            }
            _ => status(404, "no route"),
        }
    }
}

#[async_trait(?Send)]
impl Transport for FakeRemote {
    async fn send(&self, request: &ApiRequest) -> SyncResult<ApiResponse> {
        {
            let mut state = self.state.borrow_mut();
            state.requests.push(request.clone());
            if state.offline {
                return Err(SyncError::Network("connection refused".into()));
            }
            if let Some(code) = state.fail_next.take() {
                return Ok(status(code, "injected failure"));
            }
        }
        Ok(self.handle(request))
    }
}

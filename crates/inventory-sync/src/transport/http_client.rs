//! HTTP transport backed by reqwest (fetch API on wasm32).
//!
//! No retry: a failed request is reported once and the user re-triggers it.

use async_trait::async_trait;

use super::{ApiRequest, ApiResponse, Method, Transport};
use crate::config::ClientConfig;
use crate::domain::{SyncError, SyncResult};

fn net_err(e: reqwest::Error) -> SyncError {
    SyncError::Network(e.to_string())
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: ClientConfig,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> SyncResult<Self> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout());
        let client = builder.build().map_err(net_err)?;
        Ok(Self {
            config: config.normalized(),
            client,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> SyncResult<ApiResponse> {
        let url = self.config.url(&request.path);
        tracing::debug!(method = ?request.method, %url, "inventory request");

        let mut req = self.client.request(request.method.into(), &url);
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(net_err)?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(net_err)?;
        Ok(ApiResponse { status, body })
    }
}

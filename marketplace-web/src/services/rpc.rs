//! JSON-RPC over `fetch` using gloo-net.

use async_trait::async_trait;
use gloo_net::http::Request;
use lib_solana::rpc::{decode_response, RequestIds, RpcError, RpcRequest, RpcTransport};
use serde_json::Value;

pub struct GlooRpcTransport {
    endpoint: String,
    ids: RequestIds,
}

impl GlooRpcTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ids: RequestIds::default(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl RpcTransport for GlooRpcTransport {
    async fn send(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        let request = RpcRequest::new(self.ids.next(), method, &params);
        log::debug!("RPC {} #{} -> {}", method, request.id, self.endpoint);

        let response = Request::post(&self.endpoint)
            .json(&request)
            .map_err(|e| RpcError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| RpcError::Transport(e.to_string()))?;

        let ok = response.ok();
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RpcError::Transport(e.to_string()))?;

        if !ok {
            log::warn!("RPC {} failed with HTTP {}", method, status);
            return Err(RpcError::Http { status, body });
        }

        decode_response(&body)
    }
}

//! # JSON-RPC 2.0 Transport
//!
//! [`RpcTransport`] is the seam between the marketplace and a Solana node.
//! Implementations only move bytes; building the envelope and interpreting
//! the reply is shared here so every transport reports errors the same way.
//!
//! The trait is `?Send`: the browser transport wraps `fetch`, whose futures
//! cannot cross threads.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use lib_core::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const JSONRPC_VERSION: &str = "2.0";

#[derive(Debug, Error)]
pub enum RpcError {
    /// The request never produced an HTTP response (DNS, connect, fetch).
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx HTTP status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The node answered with a JSON-RPC `error` object.
    #[error("RPC error {code}: {message}")]
    Rpc {
        code: i64,
        message: String,
        data: Option<Value>,
    },

    /// The body was not a JSON-RPC response.
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<RpcError> for AppError {
    fn from(err: RpcError) -> Self {
        match err {
            RpcError::Decode(msg) => AppError::Decoding(msg),
            other => AppError::Rpc(other.to_string()),
        }
    }
}

/// Something that can deliver a JSON-RPC call and return its `result`.
#[async_trait(?Send)]
pub trait RpcTransport {
    /// Send `method` with `params` and return the `result` member verbatim.
    async fn send(&self, method: &str, params: Value) -> Result<Value, RpcError>;
}

/// Request envelope.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: &'a Value,
}

impl<'a> RpcRequest<'a> {
    pub fn new(id: u64, method: &'a str, params: &'a Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            method,
            params,
        }
    }
}

/// Error member of a response.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

impl RpcResponse {
    /// Turn the envelope into the call outcome: `error` wins over `result`.
    pub fn into_result(self) -> Result<Value, RpcError> {
        match self.error {
            Some(err) => Err(RpcError::Rpc {
                code: err.code,
                message: err.message,
                data: err.data,
            }),
            None => Ok(self.result),
        }
    }
}

/// Parse a raw response body.
pub fn decode_response(body: &str) -> Result<Value, RpcError> {
    let response: RpcResponse =
        serde_json::from_str(body).map_err(|e| RpcError::Decode(e.to_string()))?;
    response.into_result()
}

/// Monotonic request id source, one per transport.
#[derive(Debug, Default)]
pub struct RequestIds(AtomicU64);

impl RequestIds {
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }
}

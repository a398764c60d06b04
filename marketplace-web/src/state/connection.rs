//! Selected RPC endpoint, persisted under `connectionEndpoint`.

use leptos::prelude::*;
use lib_core::store::{KeyValueStore, CONNECTION_ENDPOINT_KEY};
use lib_solana::Network;

use crate::services::rpc::GlooRpcTransport;
use crate::services::storage::open_store;

#[derive(Clone, Copy)]
pub struct ConnectionContext {
    endpoint: RwSignal<String>,
}

impl ConnectionContext {
    pub fn endpoint(&self) -> String {
        self.endpoint.get()
    }

    pub fn endpoint_untracked(&self) -> String {
        self.endpoint.get_untracked()
    }

    /// Named network for the current endpoint; `None` for custom endpoints.
    pub fn network(&self) -> Option<Network> {
        self.endpoint.with(|endpoint| Network::from_endpoint(endpoint))
    }

    pub fn set_endpoint(&self, endpoint: impl Into<String>) {
        let endpoint = endpoint.into();
        if let Err(e) = open_store().set(CONNECTION_ENDPOINT_KEY, &endpoint) {
            log::warn!("Failed to persist endpoint: {}", e);
        }
        self.endpoint.set(endpoint);
    }

    pub fn rpc(&self) -> GlooRpcTransport {
        GlooRpcTransport::new(self.endpoint.get_untracked())
    }
}

pub fn provide_connection_context() -> ConnectionContext {
    let default = Network::default().endpoint();
    let endpoint = open_store()
        .get_or(CONNECTION_ENDPOINT_KEY, default)
        .unwrap_or_else(|e| {
            log::warn!("Failed to read endpoint: {}", e);
            default.to_string()
        });

    let context = ConnectionContext {
        endpoint: RwSignal::new(endpoint),
    };
    provide_context(context);
    context
}

pub fn use_connection() -> ConnectionContext {
    expect_context::<ConnectionContext>()
}

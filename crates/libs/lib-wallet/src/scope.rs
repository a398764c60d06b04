//! # Session Scope
//!
//! The slot a wallet session is provided into. The application root owns the
//! scope and hands it to components by reference; components read the session
//! with [`WalletScope::use_wallet`].

use lib_core::store::KeyValueStore;
use lib_solana::{Pubkey, RpcTransport};
use serde_json::Value;

use crate::adapter::AdapterFactory;
use crate::error::WalletError;
use crate::notify::Notifier;
use crate::session::WalletSession;

/// Holds at most one active [`WalletSession`].
pub struct WalletScope<F, S, N>
where
    F: AdapterFactory,
    S: KeyValueStore,
    N: Notifier,
{
    session: Option<WalletSession<F, S, N>>,
}

impl<F, S, N> Default for WalletScope<F, S, N>
where
    F: AdapterFactory,
    S: KeyValueStore,
    N: Notifier,
{
    fn default() -> Self {
        Self { session: None }
    }
}

impl<F, S, N> WalletScope<F, S, N>
where
    F: AdapterFactory,
    S: KeyValueStore,
    N: Notifier,
{
    /// An empty scope: `use_wallet` fails until a session is provided.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `session`, tearing down any session already in scope.
    pub fn provide(&mut self, session: WalletSession<F, S, N>) {
        self.unmount();
        self.session = Some(session);
    }

    /// Tear down and remove the session in scope, if any.
    pub fn unmount(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.teardown();
        }
    }

    pub fn is_provided(&self) -> bool {
        self.session.is_some()
    }

    /// Access the session in scope.
    ///
    /// # Errors
    ///
    /// [`WalletError::MissingContext`] when no session has been provided.
    pub fn use_wallet(&mut self) -> Result<UseWallet<'_, F, S, N>, WalletError> {
        self.session
            .as_mut()
            .map(|session| UseWallet { session })
            .ok_or(WalletError::MissingContext)
    }
}

/// What a component sees of the wallet session.
pub struct UseWallet<'a, F, S, N>
where
    F: AdapterFactory,
    S: KeyValueStore,
    N: Notifier,
{
    session: &'a mut WalletSession<F, S, N>,
}

impl<F, S, N> UseWallet<'_, F, S, N>
where
    F: AdapterFactory,
    S: KeyValueStore,
    N: Notifier,
{
    pub fn connected(&self) -> bool {
        self.session.is_connected()
    }

    pub fn wallet(&self) -> Option<&F::Adapter> {
        self.session.wallet()
    }

    pub fn provider_url(&self) -> &str {
        self.session.provider_url()
    }

    pub fn provider_name(&self) -> String {
        self.session.provider_name()
    }

    pub fn set_provider(&mut self, url: impl Into<String>) -> Result<(), WalletError> {
        self.session.set_provider_url(url)
    }

    pub fn connect(&self) -> Result<(), WalletError> {
        self.session.connect()
    }

    pub fn disconnect(&self) {
        self.session.disconnect()
    }

    pub fn connected_key(&self) -> Result<Pubkey, WalletError> {
        self.session.connected_key()
    }

    pub async fn token_accounts<T>(&self, rpc: &T) -> Result<Value, WalletError>
    where
        T: RpcTransport + ?Sized,
    {
        self.session.token_accounts(rpc).await
    }

    pub fn session(&mut self) -> &mut WalletSession<F, S, N> {
        self.session
    }
}

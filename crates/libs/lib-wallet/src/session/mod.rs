//! # Wallet Session
//!
//! Two-state machine (`Disconnected ⇄ Connected`) driven only by signals from
//! the current wallet handle.
//!
//! ## Lifecycle
//!
//! 1. [`WalletSession::new`] reads the persisted provider URL (default
//!    `https://www.sollet.io`) and builds a handle for `(provider_url, endpoint)`.
//! 2. Signals are queued on the channel and applied by [`WalletSession::process_pending`]
//!    (UI event loops) or [`WalletSession::next_signal`] (async callers).
//! 3. [`WalletSession::set_provider_url`] / [`WalletSession::set_endpoint`] release
//!    the handle and build a new one under the next generation.
//! 4. [`WalletSession::teardown`] (also run on drop) releases the handle and
//!    leaves the session disconnected.
//!
//! ## Stale signals
//!
//! Every handle sends through a [`SignalSender`] stamped with its generation.
//! Releasing a handle retires its generation, so a connect that was still in
//! flight when the provider changed, or the disconnect a handle emits while it
//! is being released, is ignored.
//!
//! Releasing a handle while connected performs the disconnect transition
//! locally (notification plus fee-discount invalidation) so it happens exactly
//! once whether or not the handle reports it.

use async_channel::{Receiver, Sender, TryRecvError};
use lib_core::store::{KeyValueStore, FEE_DISCOUNT_KEY, WALLET_PROVIDER_KEY};
use lib_solana::spl_token::get_program_accounts;
use lib_solana::{Pubkey, RpcTransport};
use serde_json::Value;
use shared::{abbreviate_public_key, Notification};
use tracing::{debug, info, warn};

use crate::adapter::{AdapterFactory, SignalEnvelope, SignalSender, WalletAdapter, WalletSignal};
use crate::error::WalletError;
use crate::notify::Notifier;
use crate::provider::{provider_name, DEFAULT_PROVIDER_URL};

#[cfg(test)]
mod tests;

/// Observable connection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connected { public_key: Pubkey },
}

impl SessionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, SessionState::Connected { .. })
    }
}

/// What happened to one delivered signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalOutcome {
    Applied(WalletSignal),
    /// Sent by a handle that has since been released.
    Stale(WalletSignal),
    /// A connect signal from a handle that could not report its public key.
    Rejected,
}

/// The wallet session: one handle, its connection flag, and the provider choice.
pub struct WalletSession<F, S, N>
where
    F: AdapterFactory,
    S: KeyValueStore,
    N: Notifier,
{
    factory: F,
    store: S,
    notifier: N,
    provider_url: String,
    endpoint: String,
    handle: Option<F::Adapter>,
    connected: bool,
    next_generation: u64,
    live_generation: Option<u64>,
    tx: Sender<SignalEnvelope>,
    rx: Receiver<SignalEnvelope>,
}

impl<F, S, N> WalletSession<F, S, N>
where
    F: AdapterFactory,
    S: KeyValueStore,
    N: Notifier,
{
    /// Start a session bound to `endpoint` and the persisted provider URL.
    ///
    /// # Errors
    ///
    /// Fails only if the store cannot be read.
    pub fn new(factory: F, store: S, notifier: N, endpoint: impl Into<String>) -> Result<Self, WalletError> {
        let provider_url = store.get_or(WALLET_PROVIDER_KEY, DEFAULT_PROVIDER_URL)?;
        let (tx, rx) = async_channel::unbounded();

        let mut session = Self {
            factory,
            store,
            notifier,
            provider_url,
            endpoint: endpoint.into(),
            handle: None,
            connected: false,
            next_generation: 0,
            live_generation: None,
            tx,
            rx,
        };
        session.mount();
        Ok(session)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn state(&self) -> SessionState {
        match self.public_key() {
            Some(public_key) => SessionState::Connected { public_key },
            None => SessionState::Disconnected,
        }
    }

    /// Public key of the connected wallet; `None` while disconnected.
    pub fn public_key(&self) -> Option<Pubkey> {
        if !self.connected {
            return None;
        }
        self.handle.as_ref().and_then(WalletAdapter::public_key)
    }

    pub fn wallet(&self) -> Option<&F::Adapter> {
        self.handle.as_ref()
    }

    pub fn provider_url(&self) -> &str {
        &self.provider_url
    }

    /// Display name of the provider, or the raw URL when it is not a known one.
    pub fn provider_name(&self) -> String {
        provider_name(&self.provider_url)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Generation of the live handle; `None` after teardown.
    pub fn generation(&self) -> Option<u64> {
        self.live_generation
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ------------------------------------------------------------------
    // Handle lifecycle
    // ------------------------------------------------------------------

    /// Persist `url` as the provider and rebind the handle if it changed.
    pub fn set_provider_url(&mut self, url: impl Into<String>) -> Result<(), WalletError> {
        let url = url.into();
        self.store.set(WALLET_PROVIDER_KEY, &url)?;

        let url = if url.is_empty() {
            DEFAULT_PROVIDER_URL.to_string()
        } else {
            url
        };
        if url == self.provider_url && self.handle.is_some() {
            return Ok(());
        }

        info!(from = %self.provider_url, to = %url, "Switching wallet provider");
        self.release();
        self.provider_url = url;
        self.mount();
        Ok(())
    }

    /// Rebind the handle to a new network endpoint.
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        let endpoint = endpoint.into();
        if endpoint == self.endpoint && self.handle.is_some() {
            return;
        }

        info!(from = %self.endpoint, to = %endpoint, "Switching RPC endpoint");
        self.release();
        self.endpoint = endpoint;
        self.mount();
    }

    /// Ask the handle to connect; the state changes when the signal arrives.
    pub fn connect(&self) -> Result<(), WalletError> {
        self.handle.as_ref().ok_or(WalletError::Released)?.connect()
    }

    /// Ask the handle to disconnect; the state changes when the signal arrives.
    pub fn disconnect(&self) {
        if let Some(handle) = &self.handle {
            handle.disconnect();
        }
    }

    /// Release the handle and leave the session disconnected. Idempotent.
    pub fn teardown(&mut self) {
        self.release();
    }

    fn mount(&mut self) {
        self.next_generation += 1;
        let generation = self.next_generation;
        debug!(generation, provider = %self.provider_url, endpoint = %self.endpoint, "trying to connect");

        let signals = SignalSender::new(generation, self.tx.clone());
        self.handle = Some(self.factory.create(&self.provider_url, &self.endpoint, signals));
        self.live_generation = Some(generation);
    }

    fn release(&mut self) {
        let retired = self.live_generation.take();
        let was_connected = self.connected;

        if let Some(handle) = self.handle.take() {
            debug!(generation = ?retired, "Releasing wallet handle");
            handle.disconnect();
        }
        self.connected = false;

        if was_connected {
            self.notifier.notify(Notification::wallet_disconnected());
            self.clear_fee_discount();
        }
    }

    // ------------------------------------------------------------------
    // Signals
    // ------------------------------------------------------------------

    /// Apply every queued signal without waiting. Returns how many were applied.
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        loop {
            match self.rx.try_recv() {
                Ok(envelope) => {
                    if matches!(self.apply(envelope), SignalOutcome::Applied(_)) {
                        applied += 1;
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        applied
    }

    /// Wait for the next signal and apply it.
    pub async fn next_signal(&mut self) -> SignalOutcome {
        // The session keeps a sender, so the channel never closes under us.
        let received = self.rx.recv().await;
        match received {
            Ok(envelope) => self.apply(envelope),
            Err(_) => SignalOutcome::Rejected,
        }
    }

    fn apply(&mut self, envelope: SignalEnvelope) -> SignalOutcome {
        if self.live_generation != Some(envelope.generation) {
            debug!(
                generation = envelope.generation,
                live = ?self.live_generation,
                signal = ?envelope.signal,
                "Ignoring stale wallet signal"
            );
            return SignalOutcome::Stale(envelope.signal);
        }

        match envelope.signal {
            WalletSignal::Connected => self.on_connected(),
            WalletSignal::Disconnected => self.on_disconnected(),
        }
    }

    fn on_connected(&mut self) -> SignalOutcome {
        let Some(public_key) = self.handle.as_ref().and_then(WalletAdapter::public_key) else {
            warn!("Wallet reported a connection without a public key");
            return SignalOutcome::Rejected;
        };

        debug!(%public_key, "connected");
        self.clear_fee_discount();
        self.connected = true;

        let display_key = abbreviate_public_key(&public_key.to_base58());
        self.notifier.notify(Notification::wallet_connected(&display_key));
        SignalOutcome::Applied(WalletSignal::Connected)
    }

    fn on_disconnected(&mut self) -> SignalOutcome {
        debug!("disconnected");
        self.connected = false;
        self.notifier.notify(Notification::wallet_disconnected());
        self.clear_fee_discount();
        SignalOutcome::Applied(WalletSignal::Disconnected)
    }

    /// The cached fee-discount account belongs to the previous wallet.
    fn clear_fee_discount(&self) {
        if let Err(e) = self.store.remove(FEE_DISCOUNT_KEY) {
            warn!("Failed to clear {}: {}", FEE_DISCOUNT_KEY, e);
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Public key of the connected wallet, for queries that need one.
    ///
    /// # Errors
    ///
    /// [`WalletError::NotConnected`] while disconnected.
    pub fn connected_key(&self) -> Result<Pubkey, WalletError> {
        self.public_key().ok_or(WalletError::NotConnected)
    }

    /// Token accounts owned by the connected wallet, as returned by the node.
    pub async fn token_accounts<T>(&self, rpc: &T) -> Result<Value, WalletError>
    where
        T: RpcTransport + ?Sized,
    {
        let owner = self.connected_key()?;
        Ok(get_program_accounts(rpc, &owner).await?)
    }
}

impl<F, S, N> Drop for WalletSession<F, S, N>
where
    F: AdapterFactory,
    S: KeyValueStore,
    N: Notifier,
{
    fn drop(&mut self) {
        self.release();
    }
}

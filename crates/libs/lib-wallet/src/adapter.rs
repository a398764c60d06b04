//! # Wallet Handle Seam
//!
//! A [`WalletAdapter`] is one live connection to a wallet provider, bound to a
//! `(provider_url, endpoint)` pair for its whole life. It never mutates session
//! state itself: it reports what happened through the [`SignalSender`] it was
//! created with.

use async_channel::Sender;
use lib_solana::Pubkey;
use tracing::debug;

use crate::error::WalletError;

/// What a wallet handle can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletSignal {
    Connected,
    Disconnected,
}

/// A signal stamped with the generation of the handle that sent it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalEnvelope {
    pub generation: u64,
    pub signal: WalletSignal,
}

/// Sending half handed to a wallet handle at construction.
///
/// Cloneable so browser event listeners can each keep one. Sending after the
/// session is gone is a no-op.
#[derive(Debug, Clone)]
pub struct SignalSender {
    generation: u64,
    tx: Sender<SignalEnvelope>,
}

impl SignalSender {
    pub(crate) fn new(generation: u64, tx: Sender<SignalEnvelope>) -> Self {
        Self { generation, tx }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn send(&self, signal: WalletSignal) {
        let envelope = SignalEnvelope {
            generation: self.generation,
            signal,
        };
        if self.tx.try_send(envelope).is_err() {
            debug!(generation = self.generation, ?signal, "Wallet session gone, dropping signal");
        }
    }

    pub fn connected(&self) {
        self.send(WalletSignal::Connected);
    }

    pub fn disconnected(&self) {
        self.send(WalletSignal::Disconnected);
    }
}

/// One wallet handle.
pub trait WalletAdapter {
    /// Public key of the wallet, once the provider has shared it.
    fn public_key(&self) -> Option<Pubkey>;

    /// Ask the provider to connect. Completion is reported as a
    /// [`WalletSignal::Connected`] signal, not by this call returning.
    fn connect(&self) -> Result<(), WalletError>;

    /// Disconnect from the provider. Safe to call repeatedly.
    fn disconnect(&self);

    fn provider_url(&self) -> &str;

    fn endpoint(&self) -> &str;
}

/// Builds wallet handles.
pub trait AdapterFactory {
    type Adapter: WalletAdapter;

    fn create(&self, provider_url: &str, endpoint: &str, signals: SignalSender) -> Self::Adapter;
}

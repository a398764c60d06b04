//! # Wallet Context
//!
//! Provides the wallet session to the component tree. The session itself
//! lives in a [`WalletScope`] held in a local [`StoredValue`]; reactive
//! mirrors of its observable state (`connected`, provider URL, public key)
//! are refreshed whenever the session changes.
//!
//! Wallet events wake an effect through an [`ArcTrigger`]; the effect drains
//! the session's signal queue, so the session stays the only mutator of its
//! own state.

use std::rc::Rc;

use leptos::prelude::*;
use lib_core::store::KeyValueStore;
use lib_solana::spl_token::get_program_accounts;
use lib_solana::Pubkey;
use lib_wallet::{provider_name, UseWallet, WalletError, WalletScope, WalletSession};
use serde_json::Value;
use shared::abbreviate_public_key;

use crate::services::adapter::BrowserAdapterFactory;
use crate::state::connection::ConnectionContext;
use crate::state::notifications::NotificationsContext;

type BrowserStore = Rc<dyn KeyValueStore>;
type BrowserScope = WalletScope<BrowserAdapterFactory, BrowserStore, NotificationsContext>;
type BrowserWallet<'a> = UseWallet<'a, BrowserAdapterFactory, BrowserStore, NotificationsContext>;

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    scope: StoredValue<BrowserScope, LocalStorage>,
    connected: RwSignal<bool>,
    provider_url: RwSignal<String>,
    public_key: RwSignal<Option<Pubkey>>,
    connection: ConnectionContext,
}

impl WalletContext {
    pub fn connected(&self) -> bool {
        self.connected.get()
    }

    pub fn provider_url(&self) -> String {
        self.provider_url.get()
    }

    pub fn provider_name(&self) -> String {
        self.provider_url.with(|url| provider_name(url))
    }

    pub fn public_key(&self) -> Option<Pubkey> {
        self.public_key.get()
    }

    /// Public key shortened for display.
    pub fn display_key(&self) -> Option<String> {
        self.public_key().map(|key| abbreviate_public_key(&key.to_base58()))
    }

    pub fn set_provider(&self, url: String) {
        match self.with_wallet(|wallet| wallet.set_provider(url)) {
            Ok(Ok(())) => {}
            Ok(Err(e)) | Err(e) => log::error!("Failed to switch wallet provider: {}", e),
        }
        self.sync();
    }

    pub fn connect(&self) -> Result<(), WalletError> {
        self.with_wallet(|wallet| wallet.connect())?
    }

    pub fn disconnect(&self) {
        if let Err(e) = self.with_wallet(|wallet| wallet.disconnect()) {
            log::warn!("{}", e);
        }
    }

    /// Token accounts owned by the connected wallet on the current endpoint.
    ///
    /// The key is taken from the session; the session borrow ends before the
    /// request is awaited.
    pub async fn token_accounts(&self) -> Result<Value, WalletError> {
        let owner = self.with_wallet(|wallet| wallet.connected_key())??;
        let rpc = self.connection.rpc();
        Ok(get_program_accounts(&rpc, &owner).await?)
    }

    fn with_wallet<R>(&self, f: impl FnOnce(&mut BrowserWallet<'_>) -> R) -> Result<R, WalletError> {
        self.scope
            .try_update_value(|scope| scope.use_wallet().map(|mut wallet| f(&mut wallet)))
            .unwrap_or(Err(WalletError::MissingContext))
    }

    /// Apply queued wallet signals, then refresh the mirrors.
    fn process_signals(&self) {
        if let Err(e) = self.with_wallet(|wallet| wallet.session().process_pending()) {
            log::warn!("{}", e);
        }
        self.sync();
    }

    fn rebind(&self, endpoint: String) {
        if let Err(e) = self.with_wallet(|wallet| wallet.session().set_endpoint(endpoint)) {
            log::warn!("{}", e);
        }
        self.sync();
    }

    fn sync(&self) {
        let snapshot = self.with_wallet(|wallet| {
            (
                wallet.connected(),
                wallet.provider_url().to_string(),
                wallet.session().public_key(),
            )
        });
        let (connected, provider_url, public_key) = match snapshot {
            Ok(snapshot) => snapshot,
            Err(_) => (false, self.provider_url.get_untracked(), None),
        };

        if self.connected.get_untracked() != connected {
            self.connected.set(connected);
        }
        if self.provider_url.get_untracked() != provider_url {
            self.provider_url.set(provider_url);
        }
        if self.public_key.get_untracked() != public_key {
            self.public_key.set(public_key);
        }
    }
}

/// Start the wallet session and provide it to the tree.
pub fn provide_wallet_context(
    connection: ConnectionContext,
    notifications: NotificationsContext,
) -> WalletContext {
    let wake = ArcTrigger::new();
    let factory = BrowserAdapterFactory::new(wake.clone());
    let store: BrowserStore = crate::services::storage::open_store();

    let mut scope = WalletScope::new();
    match WalletSession::new(factory, store, notifications, connection.endpoint_untracked()) {
        Ok(session) => scope.provide(session),
        Err(e) => log::error!("Failed to start wallet session: {}", e),
    }

    let context = WalletContext {
        scope: StoredValue::new_local(scope),
        connected: RwSignal::new(false),
        provider_url: RwSignal::new(String::new()),
        public_key: RwSignal::new(None),
        connection,
    };
    context.sync();

    Effect::new(move |_| {
        wake.track();
        context.process_signals();
    });

    // A new endpoint means a new wallet handle
    Effect::new(move |previous: Option<String>| {
        let endpoint = connection.endpoint();
        if previous.is_some_and(|p| p != endpoint) {
            context.rebind(endpoint.clone());
        }
        endpoint
    });

    on_cleanup(move || {
        context.scope.try_update_value(|scope| scope.unmount());
    });

    provide_context(context);
    context
}

/// The wallet context.
///
/// # Errors
///
/// [`WalletError::MissingContext`] outside [`provide_wallet_context`].
pub fn use_wallet() -> Result<WalletContext, WalletError> {
    use_context::<WalletContext>().ok_or(WalletError::MissingContext)
}

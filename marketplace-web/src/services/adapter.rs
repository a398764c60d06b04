//! # sol-wallet-adapter Bindings
//!
//! Each [`BrowserAdapter`] wraps one `new Wallet(providerUrl, endpoint)` from
//! `@project-serum/sol-wallet-adapter` (loaded by `index.html` as
//! `window.SolWalletAdapter`). Its `connect`/`disconnect` events are forwarded
//! to the session through the handle's [`SignalSender`], then the shared
//! trigger wakes the effect that drains the session's queue.
//!
//! Dropping a handle removes its listeners before the closures are freed.

use leptos::prelude::{ArcTrigger, Notify};
use lib_solana::Pubkey;
use lib_wallet::{AdapterFactory, SignalSender, WalletAdapter, WalletError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen(inline_js = "
function walletClass() {
    const lib = window.SolWalletAdapter;
    if (!lib) {
        return null;
    }
    return lib.default || lib;
}

export function createWallet(providerUrl, endpoint, onConnect, onDisconnect) {
    const Wallet = walletClass();
    if (!Wallet) {
        throw new Error('sol-wallet-adapter is not loaded');
    }
    const wallet = new Wallet(providerUrl, endpoint);
    wallet.on('connect', onConnect);
    wallet.on('disconnect', onDisconnect);
    return wallet;
}

export function walletPublicKey(wallet) {
    return wallet.publicKey ? wallet.publicKey.toBase58() : null;
}

export function connectWallet(wallet) {
    // Completion is reported through the connect event
    Promise.resolve(wallet.connect()).catch((e) => console.error('Wallet connection failed', e));
}

export function disconnectWallet(wallet) {
    try {
        Promise.resolve(wallet.disconnect()).catch((e) => console.warn('Wallet disconnect failed', e));
    } catch (e) {
        console.warn('Wallet disconnect failed', e);
    }
}

export function detachWallet(wallet, onConnect, onDisconnect) {
    wallet.removeListener('connect', onConnect);
    wallet.removeListener('disconnect', onDisconnect);
}
")]
extern "C" {
    #[wasm_bindgen(catch, js_name = createWallet)]
    fn create_wallet(
        provider_url: &str,
        endpoint: &str,
        on_connect: &Closure<dyn FnMut()>,
        on_disconnect: &Closure<dyn FnMut()>,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = walletPublicKey)]
    fn wallet_public_key(wallet: &JsValue) -> Option<String>;

    #[wasm_bindgen(catch, js_name = connectWallet)]
    fn connect_wallet(wallet: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = disconnectWallet)]
    fn disconnect_wallet(wallet: &JsValue);

    #[wasm_bindgen(js_name = detachWallet)]
    fn detach_wallet(wallet: &JsValue, on_connect: &Closure<dyn FnMut()>, on_disconnect: &Closure<dyn FnMut()>);
}

/// One sol-wallet-adapter instance.
pub struct BrowserAdapter {
    provider_url: String,
    endpoint: String,
    /// `None` when the adapter script failed to construct a wallet
    wallet: Option<JsValue>,
    on_connect: Closure<dyn FnMut()>,
    on_disconnect: Closure<dyn FnMut()>,
}

impl WalletAdapter for BrowserAdapter {
    fn public_key(&self) -> Option<Pubkey> {
        let key = wallet_public_key(self.wallet.as_ref()?)?;
        match key.parse() {
            Ok(pubkey) => Some(pubkey),
            Err(e) => {
                log::warn!("Wallet returned an invalid public key {}: {}", key, e);
                None
            }
        }
    }

    fn connect(&self) -> Result<(), WalletError> {
        let wallet = self
            .wallet
            .as_ref()
            .ok_or_else(|| WalletError::Adapter(format!("no wallet available for {}", self.provider_url)))?;
        connect_wallet(wallet).map_err(|e| WalletError::Adapter(js_message(&e)))
    }

    fn disconnect(&self) {
        if let Some(wallet) = &self.wallet {
            disconnect_wallet(wallet);
        }
    }

    fn provider_url(&self) -> &str {
        &self.provider_url
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Drop for BrowserAdapter {
    fn drop(&mut self) {
        if let Some(wallet) = &self.wallet {
            detach_wallet(wallet, &self.on_connect, &self.on_disconnect);
        }
    }
}

/// Builds [`BrowserAdapter`]s whose events wake `wake`.
pub struct BrowserAdapterFactory {
    wake: ArcTrigger,
}

impl BrowserAdapterFactory {
    pub fn new(wake: ArcTrigger) -> Self {
        Self { wake }
    }
}

impl AdapterFactory for BrowserAdapterFactory {
    type Adapter = BrowserAdapter;

    fn create(&self, provider_url: &str, endpoint: &str, signals: SignalSender) -> BrowserAdapter {
        let on_connect = {
            let signals = signals.clone();
            let wake = self.wake.clone();
            Closure::<dyn FnMut()>::new(move || {
                signals.connected();
                wake.notify();
            })
        };
        let on_disconnect = {
            let wake = self.wake.clone();
            Closure::<dyn FnMut()>::new(move || {
                signals.disconnected();
                wake.notify();
            })
        };

        let wallet = match create_wallet(provider_url, endpoint, &on_connect, &on_disconnect) {
            Ok(wallet) => Some(wallet),
            Err(e) => {
                log::error!("Failed to create wallet for {}: {}", provider_url, js_message(&e));
                None
            }
        };

        BrowserAdapter {
            provider_url: provider_url.to_string(),
            endpoint: endpoint.to_string(),
            wallet,
            on_connect,
            on_disconnect,
        }
    }
}

fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

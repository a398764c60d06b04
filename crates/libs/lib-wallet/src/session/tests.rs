use super::*;
use crate::adapter::SignalSender;
use crate::provider::DEFAULT_PROVIDER_URL;
use async_trait::async_trait;
use lib_core::store::MemoryStore;
use lib_core::Result as CoreResult;
use lib_solana::RpcError;
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const ENDPOINT: &str = "https://solana-api.projectserum.com";
const DEVNET: &str = "https://api.devnet.solana.com";
const BONFIDA: &str = "https://www.bonfida.com/wallet";
const WALLET_KEY: &str = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";

// region:    --- Test doubles

#[derive(Debug, Clone, PartialEq)]
enum AdapterEvent {
    Created { provider: String, endpoint: String, generation: u64 },
    Connect(u64),
    Disconnect(u64),
}

struct MockAdapter {
    provider_url: String,
    endpoint: String,
    key: Option<Pubkey>,
    signals: SignalSender,
    events: Rc<RefCell<Vec<AdapterEvent>>>,
}

impl WalletAdapter for MockAdapter {
    fn public_key(&self) -> Option<Pubkey> {
        self.key
    }

    fn connect(&self) -> Result<(), WalletError> {
        self.events.borrow_mut().push(AdapterEvent::Connect(self.signals.generation()));
        self.signals.connected();
        Ok(())
    }

    fn disconnect(&self) {
        self.events.borrow_mut().push(AdapterEvent::Disconnect(self.signals.generation()));
        self.signals.disconnected();
    }

    fn provider_url(&self) -> &str {
        &self.provider_url
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Builds mock handles and keeps every sender so tests can fire signals directly.
#[derive(Clone)]
struct MockFactory {
    key: Option<Pubkey>,
    events: Rc<RefCell<Vec<AdapterEvent>>>,
    senders: Rc<RefCell<Vec<SignalSender>>>,
}

impl MockFactory {
    fn new() -> Self {
        Self::with_key(Some(WALLET_KEY.parse().unwrap()))
    }

    fn with_key(key: Option<Pubkey>) -> Self {
        Self {
            key,
            events: Rc::default(),
            senders: Rc::default(),
        }
    }

    fn sender(&self, generation: u64) -> SignalSender {
        self.senders
            .borrow()
            .iter()
            .find(|s| s.generation() == generation)
            .cloned()
            .expect("no handle with that generation")
    }

    fn events(&self) -> Vec<AdapterEvent> {
        self.events.borrow().clone()
    }
}

impl AdapterFactory for MockFactory {
    type Adapter = MockAdapter;

    fn create(&self, provider_url: &str, endpoint: &str, signals: SignalSender) -> MockAdapter {
        self.events.borrow_mut().push(AdapterEvent::Created {
            provider: provider_url.to_string(),
            endpoint: endpoint.to_string(),
            generation: signals.generation(),
        });
        self.senders.borrow_mut().push(signals.clone());
        MockAdapter {
            provider_url: provider_url.to_string(),
            endpoint: endpoint.to_string(),
            key: self.key,
            signals,
            events: self.events.clone(),
        }
    }
}

/// Memory store that counts fee-discount invalidations.
#[derive(Default)]
struct CountingStore {
    inner: MemoryStore,
    fee_clears: Cell<usize>,
}

impl KeyValueStore for CountingStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        if key == FEE_DISCOUNT_KEY {
            self.fee_clears.set(self.fee_clears.get() + 1);
        }
        self.inner.remove(key)
    }
}

#[derive(Clone, Default)]
struct RecordingNotifier(Rc<RefCell<Vec<Notification>>>);

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.0.borrow_mut().push(notification);
    }
}

impl RecordingNotifier {
    fn descriptions(&self) -> Vec<String> {
        self.0.borrow().iter().map(|n| n.description.clone()).collect()
    }
}

type TestSession = WalletSession<MockFactory, Rc<CountingStore>, RecordingNotifier>;

struct Harness {
    factory: MockFactory,
    store: Rc<CountingStore>,
    notifier: RecordingNotifier,
}

impl Harness {
    fn new() -> Self {
        Self::with_factory(MockFactory::new())
    }

    fn with_factory(factory: MockFactory) -> Self {
        Self {
            factory,
            store: Rc::default(),
            notifier: RecordingNotifier::default(),
        }
    }

    fn session(&self) -> TestSession {
        WalletSession::new(
            self.factory.clone(),
            self.store.clone(),
            self.notifier.clone(),
            ENDPOINT,
        )
        .unwrap()
    }

    fn connected_session(&self) -> TestSession {
        let mut session = self.session();
        session.connect().unwrap();
        assert_eq!(session.process_pending(), 1);
        assert!(session.is_connected());
        session
    }
}

struct RecordingTransport {
    calls: RefCell<Vec<(String, Value)>>,
}

#[async_trait(?Send)]
impl RpcTransport for RecordingTransport {
    async fn send(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        self.calls.borrow_mut().push((method.to_string(), params));
        Ok(json!([]))
    }
}

// endregion: --- Test doubles

// region:    --- Initialization

#[test]
fn test_defaults_to_sollet_without_persisted_provider() {
    let h = Harness::new();
    let session = h.session();

    assert_eq!(session.provider_url(), DEFAULT_PROVIDER_URL);
    assert_eq!(session.provider_url(), "https://www.sollet.io");
    assert_eq!(session.provider_name(), "sollet.io");
    assert_eq!(session.endpoint(), ENDPOINT);
    assert_eq!(session.generation(), Some(1));
    assert!(!session.is_connected());
    assert_eq!(session.state(), SessionState::Disconnected);
    assert_eq!(
        h.factory.events(),
        vec![AdapterEvent::Created {
            provider: DEFAULT_PROVIDER_URL.to_string(),
            endpoint: ENDPOINT.to_string(),
            generation: 1,
        }]
    );
}

#[test]
fn test_uses_persisted_provider() {
    let h = Harness::new();
    h.store.set(WALLET_PROVIDER_KEY, BONFIDA).unwrap();

    let session = h.session();
    assert_eq!(session.provider_url(), BONFIDA);
    assert_eq!(session.provider_name(), "Bonfida Wallet");
    assert_eq!(session.wallet().unwrap().provider_url(), BONFIDA);
}

#[test]
fn test_empty_persisted_provider_falls_back_to_default() {
    let h = Harness::new();
    h.store.set(WALLET_PROVIDER_KEY, "").unwrap();
    assert_eq!(h.session().provider_url(), DEFAULT_PROVIDER_URL);
}

// endregion: --- Initialization

// region:    --- Signals

#[test]
fn test_connect_signal() {
    let h = Harness::new();
    h.store.set(FEE_DISCOUNT_KEY, "FeeDiscountAccount111").unwrap();
    let mut session = h.session();

    h.factory.sender(1).connected();
    assert_eq!(session.process_pending(), 1);

    assert!(session.is_connected());
    assert_eq!(
        session.state(),
        SessionState::Connected {
            public_key: WALLET_KEY.parse().unwrap()
        }
    );
    assert_eq!(h.store.get(FEE_DISCOUNT_KEY).unwrap(), None);
    assert_eq!(h.store.fee_clears.get(), 1);
    assert_eq!(
        *h.notifier.0.borrow(),
        vec![Notification::new("Wallet update", "Connected to wallet 8W6Qgin.....SKuJKAL")]
    );
}

#[test]
fn test_disconnect_signal() {
    let h = Harness::new();
    let mut session = h.connected_session();
    h.store.set(FEE_DISCOUNT_KEY, "FeeDiscountAccount111").unwrap();

    h.factory.sender(1).disconnected();
    assert_eq!(session.process_pending(), 1);

    assert!(!session.is_connected());
    assert_eq!(session.public_key(), None);
    assert_eq!(h.store.get(FEE_DISCOUNT_KEY).unwrap(), None);
    assert_eq!(h.store.fee_clears.get(), 2);
    assert_eq!(
        h.notifier.descriptions(),
        vec![
            "Connected to wallet 8W6Qgin.....SKuJKAL".to_string(),
            "Disconnected from wallet".to_string(),
        ]
    );
}

#[test]
fn test_each_signal_clears_fee_discount_once() {
    let h = Harness::new();
    let mut session = h.session();
    let sender = h.factory.sender(1);

    for round in 1..=3 {
        sender.connected();
        session.process_pending();
        assert_eq!(h.store.fee_clears.get(), 2 * round - 1);
        assert!(session.is_connected());

        sender.disconnected();
        session.process_pending();
        assert_eq!(h.store.fee_clears.get(), 2 * round);
        assert!(!session.is_connected());
    }
}

#[test]
fn test_connect_without_public_key_is_rejected() {
    let h = Harness::with_factory(MockFactory::with_key(None));
    let mut session = h.session();

    h.factory.sender(1).connected();
    assert_eq!(session.process_pending(), 0);
    assert!(!session.is_connected());
    assert!(h.notifier.0.borrow().is_empty());
    assert_eq!(h.store.fee_clears.get(), 0);
}

#[test]
fn test_disconnect_request_goes_through_the_handle() {
    let h = Harness::new();
    let mut session = h.connected_session();

    session.disconnect();
    // Nothing changes until the handle's signal is applied
    assert!(session.is_connected());
    assert_eq!(session.process_pending(), 1);
    assert!(!session.is_connected());
    assert_eq!(h.factory.events().last(), Some(&AdapterEvent::Disconnect(1)));
}

#[tokio::test]
async fn test_next_signal_waits_for_the_handle() {
    let h = Harness::new();
    let mut session = h.session();

    session.connect().unwrap();
    assert_eq!(session.next_signal().await, SignalOutcome::Applied(WalletSignal::Connected));
    assert!(session.is_connected());
}

// endregion: --- Signals

// region:    --- Rebinding and teardown

#[test]
fn test_switching_provider_rebinds_handle() {
    let h = Harness::new();
    h.store.set(FEE_DISCOUNT_KEY, "FeeDiscountAccount111").unwrap();
    let mut session = h.connected_session();
    let clears_before = h.store.fee_clears.get();

    session.set_provider_url(BONFIDA).unwrap();

    assert_eq!(h.store.get(WALLET_PROVIDER_KEY).unwrap().as_deref(), Some(BONFIDA));
    assert_eq!(session.provider_url(), BONFIDA);
    assert_eq!(session.generation(), Some(2));
    assert!(!session.is_connected());
    assert_eq!(h.store.fee_clears.get(), clears_before + 1);

    // The old handle's own disconnect signal is stale and must not double-apply
    assert_eq!(session.process_pending(), 0);
    assert_eq!(h.store.fee_clears.get(), clears_before + 1);
    assert_eq!(
        h.notifier.descriptions(),
        vec![
            "Connected to wallet 8W6Qgin.....SKuJKAL".to_string(),
            "Disconnected from wallet".to_string(),
        ]
    );

    let events = h.factory.events();
    assert_eq!(
        &events[events.len() - 2..],
        &[
            AdapterEvent::Disconnect(1),
            AdapterEvent::Created {
                provider: BONFIDA.to_string(),
                endpoint: ENDPOINT.to_string(),
                generation: 2,
            },
        ]
    );
}

#[test]
fn test_same_provider_keeps_handle() {
    let h = Harness::new();
    let mut session = h.session();

    session.set_provider_url(DEFAULT_PROVIDER_URL).unwrap();
    session.set_endpoint(ENDPOINT);

    assert_eq!(session.generation(), Some(1));
    assert_eq!(h.factory.events().len(), 1);
}

#[test]
fn test_connect_in_flight_during_endpoint_change_is_stale() {
    let h = Harness::new();
    let mut session = h.session();

    // Handle 1 reports a connection, but the endpoint changes before it is applied
    h.factory.sender(1).connected();
    session.set_endpoint(DEVNET);

    assert_eq!(session.process_pending(), 0);
    assert!(!session.is_connected());
    assert_eq!(session.endpoint(), DEVNET);
    assert_eq!(session.wallet().unwrap().endpoint(), DEVNET);
    assert!(h.notifier.0.borrow().is_empty());
}

#[test]
fn test_new_handle_signals_apply_after_rebind() {
    let h = Harness::new();
    let mut session = h.session();
    session.set_endpoint(DEVNET);

    h.factory.sender(2).connected();
    assert_eq!(session.process_pending(), 1);
    assert!(session.is_connected());
}

#[test]
fn test_teardown_is_idempotent() {
    let h = Harness::new();
    let mut session = h.connected_session();

    session.teardown();
    assert!(!session.is_connected());
    assert!(session.wallet().is_none());
    assert_eq!(session.generation(), None);
    let events_after_first = h.factory.events();
    let notes_after_first = h.notifier.descriptions();
    assert_eq!(events_after_first.last(), Some(&AdapterEvent::Disconnect(1)));

    session.teardown();
    assert!(!session.is_connected());
    assert_eq!(h.factory.events(), events_after_first);
    assert_eq!(h.notifier.descriptions(), notes_after_first);

    // Late signals from the released handle are ignored
    h.factory.sender(1).connected();
    assert_eq!(session.process_pending(), 0);
    assert!(!session.is_connected());

    assert!(matches!(session.connect(), Err(WalletError::Released)));
}

#[test]
fn test_teardown_when_never_connected() {
    let h = Harness::new();
    let mut session = h.session();
    session.teardown();

    assert!(!session.is_connected());
    assert!(h.notifier.0.borrow().is_empty());
    assert_eq!(h.store.fee_clears.get(), 0);
    assert_eq!(h.factory.events().last(), Some(&AdapterEvent::Disconnect(1)));
}

#[test]
fn test_drop_releases_handle() {
    let h = Harness::new();
    let session = h.connected_session();
    drop(session);
    assert_eq!(h.factory.events().last(), Some(&AdapterEvent::Disconnect(1)));
}

// endregion: --- Rebinding and teardown

// region:    --- Queries

#[tokio::test]
async fn test_token_accounts_requires_connection() {
    let h = Harness::new();
    let session = h.session();
    let rpc = RecordingTransport {
        calls: RefCell::new(Vec::new()),
    };

    assert!(matches!(
        session.token_accounts(&rpc).await,
        Err(WalletError::NotConnected)
    ));
    assert!(rpc.calls.borrow().is_empty());
}

#[tokio::test]
async fn test_token_accounts_for_connected_key() {
    let h = Harness::new();
    let session = h.connected_session();
    let rpc = RecordingTransport {
        calls: RefCell::new(Vec::new()),
    };

    assert_eq!(session.token_accounts(&rpc).await.unwrap(), json!([]));
    let calls = rpc.calls.borrow();
    assert_eq!(calls[0].0, "getProgramAccounts");
    assert_eq!(calls[0].1[1]["filters"][1]["memcmp"]["bytes"], WALLET_KEY);
}

#[test]
fn test_connected_key_follows_connection_state() {
    let h = Harness::new();
    let mut session = h.session();
    assert!(matches!(session.connected_key(), Err(WalletError::NotConnected)));

    session.connect().unwrap();
    session.process_pending();
    assert_eq!(session.connected_key().unwrap().to_base58(), WALLET_KEY);

    session.teardown();
    assert!(matches!(session.connected_key(), Err(WalletError::NotConnected)));
}

// endregion: --- Queries

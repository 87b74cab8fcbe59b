use std::cell::RefCell;
use std::rc::Rc;

use account_viewer_core::store::JOURNAL_CAPACITY;
use account_viewer_core::{
    sign_out, AccountData, AccountWatcherPort, Action, ActionStatus, AppState, Dispatch, PortError,
    PublicKey, Store, TxHistoryWatcherPort,
};

const KEY: &str = "GAAZI4TCR3TY5OJHCTJC2A4QSY6CJWJH5IAJTGKIN2ER7LBNVKOCCWN7";

type Log = Rc<RefCell<Vec<String>>>;

struct FakeWatcher {
    name: &'static str,
    log: Log,
    running: RefCell<bool>,
    inbox: RefCell<Vec<Action>>,
    start_error: Option<&'static str>,
}

impl FakeWatcher {
    fn new(name: &'static str, log: &Log) -> Self {
        Self {
            name,
            log: Rc::clone(log),
            running: RefCell::new(false),
            inbox: RefCell::new(Vec::new()),
            start_error: None,
        }
    }

    fn refusing(name: &'static str, log: &Log, reason: &'static str) -> Self {
        Self {
            start_error: Some(reason),
            ..Self::new(name, log)
        }
    }

    fn start(&self, key: &PublicKey) -> Result<(), PortError> {
        if let Some(reason) = self.start_error {
            return Err(PortError::Policy(reason.to_owned()));
        }
        self.log
            .borrow_mut()
            .push(format!("{}:start:{}", self.name, key.short()));
        *self.running.borrow_mut() = true;
        Ok(())
    }

    fn stop(&self) -> Result<(), PortError> {
        self.log.borrow_mut().push(format!("{}:stop", self.name));
        *self.running.borrow_mut() = false;
        Ok(())
    }

    fn drain(&self) -> Result<Vec<Action>, PortError> {
        Ok(std::mem::take(&mut *self.inbox.borrow_mut()))
    }
}

struct FakeAccountWatcher(FakeWatcher);
struct FakeTxWatcher(FakeWatcher);

impl AccountWatcherPort for FakeAccountWatcher {
    fn start(&self, public_key: &PublicKey) -> Result<(), PortError> {
        self.0.start(public_key)
    }
    fn stop(&self) -> Result<(), PortError> {
        self.0.stop()
    }
    fn is_running(&self) -> bool {
        *self.0.running.borrow()
    }
    fn drain(&self) -> Result<Vec<Action>, PortError> {
        self.0.drain()
    }
}

impl TxHistoryWatcherPort for FakeTxWatcher {
    fn start(&self, public_key: &PublicKey) -> Result<(), PortError> {
        self.0.start(public_key)
    }
    fn stop(&self) -> Result<(), PortError> {
        self.0.stop()
    }
    fn is_running(&self) -> bool {
        *self.0.running.borrow()
    }
    fn drain(&self) -> Result<Vec<Action>, PortError> {
        self.0.drain()
    }
}

fn new_store(log: &Log) -> Store<FakeAccountWatcher, FakeTxWatcher> {
    Store::new(
        FakeAccountWatcher(FakeWatcher::new("account", log)),
        FakeTxWatcher(FakeWatcher::new("tx", log)),
    )
}

fn key() -> PublicKey {
    PublicKey::parse(KEY).expect("valid key")
}

fn sign_in(store: &mut Store<FakeAccountWatcher, FakeTxWatcher>) {
    store.dispatch(Action::FetchAccountStart(key()));
    store.dispatch(Action::StartAccountWatcher);
    store.dispatch(Action::StartTxHistoryWatcher);
}

#[test]
fn sign_in_starts_both_watchers() {
    let log = Log::default();
    let mut store = new_store(&log);
    sign_in(&mut store);

    assert_eq!(
        *log.borrow(),
        vec!["account:start:GAAZ…CWN7", "tx:start:GAAZ…CWN7"]
    );
    assert!(store.state().account.is_watching);
    assert!(store.state().tx_history.is_watching);
}

#[test]
fn pump_applies_watcher_results() {
    let log = Log::default();
    let mut store = new_store(&log);
    sign_in(&mut store);

    store
        .account_watcher
        .0
        .inbox
        .borrow_mut()
        .push(Action::FetchAccountSuccess(AccountData {
            id: Some(KEY.to_owned()),
            ..AccountData::default()
        }));
    assert_eq!(store.pump(), 1);
    assert!(store.account().is_authenticated);
    assert_eq!(store.account().public_key(), Some(KEY));
    assert_eq!(store.pump(), 0);
}

#[test]
fn sign_out_stops_watchers_before_reset() {
    let log = Log::default();
    let mut store = new_store(&log);
    sign_in(&mut store);
    store.dispatch(Action::FetchAccountSuccess(AccountData {
        id: Some(KEY.to_owned()),
        ..AccountData::default()
    }));
    log.borrow_mut().clear();

    sign_out(&mut store);

    assert_eq!(*log.borrow(), vec!["account:stop", "tx:stop"]);
    assert_eq!(*store.state(), AppState::default());
    assert!(!store.account().is_authenticated);
    let tail: Vec<_> = store.journal().rev().take(3).collect();
    assert_eq!(
        tail,
        vec![
            "store/reset",
            "txHistory/stopTxHistoryWatcher",
            "account/stopAccountWatcher",
        ]
    );
}

#[test]
fn starting_without_key_records_error_instead_of_failing() {
    let log = Log::default();
    let mut store = new_store(&log);
    store.dispatch(Action::StartAccountWatcher);

    assert!(log.borrow().is_empty());
    assert!(!store.state().account.is_watching);
    let error = store.state().account.error.clone().expect("error recorded");
    assert!(error.contains("no public key"));
}

#[test]
fn refused_watcher_start_ends_pending_state() {
    let log = Log::default();
    let mut store = Store::new(
        FakeAccountWatcher(FakeWatcher::refusing("account", &log, "disabled")),
        FakeTxWatcher(FakeWatcher::refusing("tx", &log, "disabled")),
    );
    sign_in(&mut store);
    for _ in 0..5 {
        store.pump();
    }

    let account = &store.state().account;
    assert_eq!(account.status, ActionStatus::Error);
    assert!(!account.is_watching);
    assert_eq!(account.error.as_deref(), Some("policy error: disabled"));
    assert_eq!(store.state().tx_history.status, ActionStatus::Error);
    assert!(!store.state().tx_history.is_watching);
}

#[test]
fn failed_first_load_stops_both_watchers() {
    let log = Log::default();
    let mut store = new_store(&log);
    sign_in(&mut store);
    log.borrow_mut().clear();

    store
        .account_watcher
        .0
        .inbox
        .borrow_mut()
        .push(Action::FetchAccountFailure("not found".to_owned()));
    store.pump();

    assert_eq!(*log.borrow(), vec!["account:stop", "tx:stop"]);
    let account = &store.state().account;
    assert!(!account.is_authenticated);
    assert!(!account.is_watching);
    assert!(!store.state().tx_history.is_watching);
    assert_eq!(account.status, ActionStatus::Error);
    assert_eq!(account.error.as_deref(), Some("not found"));
}

#[test]
fn failure_after_load_keeps_watching() {
    let log = Log::default();
    let mut store = new_store(&log);
    sign_in(&mut store);
    store.dispatch(Action::FetchAccountSuccess(AccountData {
        id: Some(KEY.to_owned()),
        ..AccountData::default()
    }));
    log.borrow_mut().clear();

    store.dispatch(Action::FetchAccountFailure("timeout".to_owned()));

    assert!(log.borrow().is_empty());
    assert!(store.state().account.is_watching);
    assert!(store.account().is_authenticated);
}

#[test]
fn journal_is_bounded() {
    let log = Log::default();
    let mut store = new_store(&log);
    for _ in 0..JOURNAL_CAPACITY + 10 {
        store.dispatch(Action::ResetStore);
    }
    assert_eq!(store.journal().count(), JOURNAL_CAPACITY);
}

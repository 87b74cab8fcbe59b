//! Global state container: state slices, actions, the reducer and the
//! store that runs watcher effects.

use std::collections::VecDeque;

use crate::domain::{AccountData, AccountSnapshot, ActionStatus, PaymentRecord};
use crate::key::PublicKey;
use crate::ports::{AccountWatcherPort, PortError, TxHistoryWatcherPort};

/// Number of dispatched action names kept for diagnostics.
pub const JOURNAL_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FetchAccountStart(PublicKey),
    FetchAccountSuccess(AccountData),
    FetchAccountFailure(String),
    StartAccountWatcher,
    StopAccountWatcher,
    FetchTxHistorySuccess(Vec<PaymentRecord>),
    FetchTxHistoryFailure(String),
    StartTxHistoryWatcher,
    StopTxHistoryWatcher,
    ResetStore,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::FetchAccountStart(_) => "account/fetchAccountStart",
            Action::FetchAccountSuccess(_) => "account/fetchAccountSuccess",
            Action::FetchAccountFailure(_) => "account/fetchAccountFailure",
            Action::StartAccountWatcher => "account/startAccountWatcher",
            Action::StopAccountWatcher => "account/stopAccountWatcher",
            Action::FetchTxHistorySuccess(_) => "txHistory/fetchTxHistorySuccess",
            Action::FetchTxHistoryFailure(_) => "txHistory/fetchTxHistoryFailure",
            Action::StartTxHistoryWatcher => "txHistory/startTxHistoryWatcher",
            Action::StopTxHistoryWatcher => "txHistory/stopTxHistoryWatcher",
            Action::ResetStore => "store/reset",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountState {
    pub is_authenticated: bool,
    pub public_key: Option<PublicKey>,
    pub data: Option<AccountData>,
    pub is_watching: bool,
    pub status: ActionStatus,
    pub error: Option<String>,
}

impl AccountState {
    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            is_authenticated: self.is_authenticated,
            data: self.data.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TxHistoryState {
    pub records: Vec<PaymentRecord>,
    pub is_watching: bool,
    pub status: ActionStatus,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub account: AccountState,
    pub tx_history: TxHistoryState,
}

/// Pure state transition.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    let mut next = state.clone();
    match action {
        Action::FetchAccountStart(key) => {
            next.account.public_key = Some(key.clone());
            next.account.status = ActionStatus::Pending;
            next.account.error = None;
        }
        Action::FetchAccountSuccess(data) => {
            next.account.is_authenticated = true;
            next.account.data = Some(data.clone());
            next.account.status = ActionStatus::Success;
            next.account.error = None;
        }
        Action::FetchAccountFailure(message) => {
            next.account.status = ActionStatus::Error;
            next.account.error = Some(message.clone());
        }
        Action::StartAccountWatcher => next.account.is_watching = true,
        Action::StopAccountWatcher => next.account.is_watching = false,
        Action::FetchTxHistorySuccess(records) => {
            next.tx_history.records = records.clone();
            next.tx_history.status = ActionStatus::Success;
            next.tx_history.error = None;
        }
        Action::FetchTxHistoryFailure(message) => {
            next.tx_history.status = ActionStatus::Error;
            next.tx_history.error = Some(message.clone());
        }
        Action::StartTxHistoryWatcher => next.tx_history.is_watching = true,
        Action::StopTxHistoryWatcher => next.tx_history.is_watching = false,
        Action::ResetStore => next = AppState::default(),
    }
    next
}

/// Anything actions can be sent to.
pub trait Dispatch {
    fn dispatch(&mut self, action: Action);
}

pub struct Store<A, T>
where
    A: AccountWatcherPort,
    T: TxHistoryWatcherPort,
{
    state: AppState,
    pub account_watcher: A,
    pub tx_history_watcher: T,
    journal: VecDeque<&'static str>,
}

impl<A, T> Store<A, T>
where
    A: AccountWatcherPort,
    T: TxHistoryWatcherPort,
{
    pub fn new(account_watcher: A, tx_history_watcher: T) -> Self {
        Self {
            state: AppState::default(),
            account_watcher,
            tx_history_watcher,
            journal: VecDeque::with_capacity(JOURNAL_CAPACITY),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn account(&self) -> AccountSnapshot {
        self.state.account.snapshot()
    }

    /// Names of the most recent actions, oldest first.
    pub fn journal(&self) -> impl DoubleEndedIterator<Item = &'static str> + '_ {
        self.journal.iter().copied()
    }

    /// Move watcher results into the store. Returns how many actions were applied.
    pub fn pump(&mut self) -> usize {
        let mut pending = Vec::new();
        match self.account_watcher.drain() {
            Ok(actions) => pending.extend(actions),
            Err(e) => tracing::warn!(error = %e, "account watcher drain failed"),
        }
        match self.tx_history_watcher.drain() {
            Ok(actions) => pending.extend(actions),
            Err(e) => tracing::warn!(error = %e, "tx history watcher drain failed"),
        }
        let count = pending.len();
        for action in pending {
            self.dispatch(action);
        }
        count
    }

    fn run_effect(&mut self, action: &Action) -> Result<(), PortError> {
        match action {
            Action::StartAccountWatcher => {
                let key = self.pending_key("start account watcher")?;
                self.account_watcher.start(&key)
            }
            Action::StopAccountWatcher => self.account_watcher.stop(),
            Action::StartTxHistoryWatcher => {
                let key = self.pending_key("start tx history watcher")?;
                self.tx_history_watcher.start(&key)
            }
            Action::StopTxHistoryWatcher => self.tx_history_watcher.stop(),
            _ => Ok(()),
        }
    }

    fn pending_key(&self, what: &str) -> Result<PublicKey, PortError> {
        self.state
            .account
            .public_key
            .clone()
            .ok_or_else(|| PortError::Policy(format!("cannot {what}: no public key")))
    }

    fn record(&mut self, name: &'static str) {
        if self.journal.len() == JOURNAL_CAPACITY {
            self.journal.pop_front();
        }
        self.journal.push_back(name);
    }
}

impl<A, T> Dispatch for Store<A, T>
where
    A: AccountWatcherPort,
    T: TxHistoryWatcherPort,
{
    fn dispatch(&mut self, action: Action) {
        tracing::debug!(action = action.name(), "dispatch");
        let effect = self.run_effect(&action);
        self.state = reduce(&self.state, &action);

        if let Err(e) = effect {
            tracing::warn!(action = action.name(), error = %e, "watcher effect failed");
            let message = e.to_string();
            match action {
                Action::StartAccountWatcher | Action::StopAccountWatcher => {
                    let account = &mut self.state.account;
                    account.is_watching = self.account_watcher.is_running();
                    if matches!(action, Action::StartAccountWatcher) {
                        account.status = ActionStatus::Error;
                    }
                    account.error = Some(message);
                }
                Action::StartTxHistoryWatcher | Action::StopTxHistoryWatcher => {
                    let tx_history = &mut self.state.tx_history;
                    tx_history.is_watching = self.tx_history_watcher.is_running();
                    if matches!(action, Action::StartTxHistoryWatcher) {
                        tx_history.status = ActionStatus::Error;
                    }
                    tx_history.error = Some(message);
                }
                _ => {}
            }
        }

        self.record(action.name());

        // An account that never loaded has nothing to keep current
        if matches!(action, Action::FetchAccountFailure(_)) && !self.state.account.is_authenticated {
            if self.state.account.is_watching {
                tracing::info!("account failed to load, stopping watchers");
                self.dispatch(Action::StopAccountWatcher);
            }
            if self.state.tx_history.is_watching {
                self.dispatch(Action::StopTxHistoryWatcher);
            }
        }
    }
}

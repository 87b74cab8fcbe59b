//! Bridge between the egui shell and the viewer store.
//! Views read snapshots from here and send every state change through it.

use account_viewer_adapters::{AccountWatcherAdapter, TxHistoryWatcherAdapter, ViewerConfig};
use account_viewer_core::{
    sign_out, Action, AppState, Dispatch, HeaderModel, PublicKey, Store,
};

type ViewerStore = Store<AccountWatcherAdapter, TxHistoryWatcherAdapter>;

pub struct StoreBridge {
    store: ViewerStore,
}

impl StoreBridge {
    pub fn with_config(config: &ViewerConfig) -> Self {
        Self::from_watchers(
            AccountWatcherAdapter::with_config(config),
            TxHistoryWatcherAdapter::with_config(config),
        )
    }

    pub fn from_watchers(
        account_watcher: AccountWatcherAdapter,
        tx_history_watcher: TxHistoryWatcherAdapter,
    ) -> Self {
        Self {
            store: Store::new(account_watcher, tx_history_watcher),
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn header_model(&self) -> HeaderModel {
        HeaderModel::from_snapshot(&self.store.account())
    }

    pub fn is_watching(&self) -> bool {
        let state = self.store.state();
        state.account.is_watching || state.tx_history.is_watching
    }

    /// Begin loading an account and keep it current.
    pub fn sign_in(&mut self, public_key: PublicKey) {
        tracing::info!(account = %public_key.short(), "signing in");
        self.store.dispatch(Action::FetchAccountStart(public_key));
        self.store.dispatch(Action::StartAccountWatcher);
        self.store.dispatch(Action::StartTxHistoryWatcher);
    }

    pub fn sign_out(&mut self) {
        sign_out(&mut self.store);
    }

    /// Apply pending watcher results. Called once per frame.
    pub fn pump(&mut self) -> usize {
        self.store.pump()
    }

    #[cfg(test)]
    pub(crate) fn recent_actions(&self) -> Vec<&'static str> {
        self.store.journal().collect()
    }

    #[cfg(test)]
    pub(crate) fn watchers(&self) -> (&AccountWatcherAdapter, &TxHistoryWatcherAdapter) {
        (&self.store.account_watcher, &self.store.tx_history_watcher)
    }
}

use std::sync::{Arc, Mutex};
#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

use account_viewer_core::{
    AccountWatcherPort, Action, PortError, PublicKey, TxHistoryWatcherPort,
};

#[cfg(not(target_arch = "wasm32"))]
use crate::horizon::HorizonClient;
use crate::ViewerConfig;

#[cfg(not(target_arch = "wasm32"))]
type FetchFn = fn(&HorizonClient, &PublicKey) -> Action;

#[cfg(not(target_arch = "wasm32"))]
const STOP_CHECK_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
enum WatcherMode {
    Disabled(String),
    InMemory,
    #[cfg(not(target_arch = "wasm32"))]
    Http {
        client: HorizonClient,
        interval: Duration,
    },
}

#[derive(Debug, Default)]
struct PollerState {
    running: bool,
    /// Bumped on every start/stop; a polling thread exits once it no longer matches.
    generation: u64,
    watched: Option<PublicKey>,
    inbox: Vec<Action>,
}

#[derive(Debug, Clone)]
struct Poller {
    name: &'static str,
    mode: WatcherMode,
    state: Arc<Mutex<PollerState>>,
}

impl Poller {
    fn new(name: &'static str, mode: WatcherMode) -> Self {
        Self {
            name,
            mode,
            state: Arc::new(Mutex::new(PollerState::default())),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, PollerState>, PortError> {
        self.state
            .lock()
            .map_err(|e| PortError::Transport(format!("{} watcher lock poisoned: {e}", self.name)))
    }

    #[cfg_attr(target_arch = "wasm32", allow(unused_variables))]
    fn start(
        &self,
        public_key: &PublicKey,
        #[cfg(not(target_arch = "wasm32"))] fetch: FetchFn,
    ) -> Result<(), PortError> {
        if let WatcherMode::Disabled(reason) = &self.mode {
            return Err(PortError::Policy(reason.clone()));
        }

        let generation = {
            let mut g = self.lock()?;
            g.generation = g.generation.wrapping_add(1);
            g.running = true;
            g.watched = Some(public_key.clone());
            g.inbox.clear();
            g.generation
        };
        tracing::info!(watcher = self.name, account = %public_key.short(), "watcher started");

        #[cfg(not(target_arch = "wasm32"))]
        if let WatcherMode::Http { client, interval } = &self.mode {
            let client = client.clone();
            let interval = *interval;
            let state = Arc::clone(&self.state);
            let key = public_key.clone();
            let name = self.name;
            std::thread::Builder::new()
                .name(format!("{name}-watcher"))
                .spawn(move || poll_loop(name, &state, generation, &client, &key, interval, fetch))
                .map_err(|e| PortError::Transport(format!("failed to spawn {name} watcher: {e}")))?;
        }

        Ok(())
    }

    fn stop(&self) -> Result<(), PortError> {
        let mut g = self.lock()?;
        if g.running {
            tracing::info!(watcher = self.name, "watcher stopped");
        }
        g.generation = g.generation.wrapping_add(1);
        g.running = false;
        g.watched = None;
        g.inbox.clear();
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.lock().map(|g| g.running).unwrap_or(false)
    }

    fn drain(&self) -> Result<Vec<Action>, PortError> {
        let mut g = self.lock()?;
        Ok(std::mem::take(&mut g.inbox))
    }

    fn inject(&self, action: Action) -> Result<bool, PortError> {
        let mut g = self.lock()?;
        if !g.running {
            return Ok(false);
        }
        g.inbox.push(action);
        Ok(true)
    }

    fn watched(&self) -> Option<PublicKey> {
        self.lock().ok().and_then(|g| g.watched.clone())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn poll_loop(
    name: &'static str,
    state: &Mutex<PollerState>,
    generation: u64,
    client: &HorizonClient,
    key: &PublicKey,
    interval: Duration,
    fetch: FetchFn,
) {
    let is_current = |g: &PollerState| g.running && g.generation == generation;
    loop {
        let action = fetch(client, key);
        {
            let Ok(mut g) = state.lock() else { return };
            if !is_current(&*g) {
                tracing::debug!(watcher = name, "dropping result from stale watcher");
                return;
            }
            g.inbox.push(action);
        }

        let deadline = Instant::now() + interval;
        while Instant::now() < deadline {
            std::thread::sleep(STOP_CHECK_INTERVAL.min(interval));
            match state.lock() {
                Ok(g) if is_current(&*g) => {}
                _ => return,
            }
        }
    }
}

fn mode_for(name: &'static str, config: &ViewerConfig) -> WatcherMode {
    if !config.http_enabled {
        return WatcherMode::InMemory;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match HorizonClient::with_config(config) {
            Ok(client) => WatcherMode::Http {
                client,
                interval: Duration::from_millis(config.poll_interval_ms),
            },
            Err(e) => {
                tracing::error!(watcher = name, error = %e, "horizon client unavailable");
                WatcherMode::Disabled(e.to_string())
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        WatcherMode::Disabled(format!("{name} watcher: http polling is not available in the browser build"))
    }
}

/// Polls `GET /accounts/{id}` while running.
#[derive(Debug, Clone)]
pub struct AccountWatcherAdapter {
    poller: Poller,
}

impl Default for AccountWatcherAdapter {
    fn default() -> Self {
        Self::with_config(&ViewerConfig::from_env())
    }
}

impl AccountWatcherAdapter {
    pub fn with_config(config: &ViewerConfig) -> Self {
        Self {
            poller: Poller::new("account", mode_for("account", config)),
        }
    }

    /// No network; results are supplied through [`Self::debug_inject`].
    pub fn in_memory() -> Self {
        Self {
            poller: Poller::new("account", WatcherMode::InMemory),
        }
    }

    /// Queue a result as if a poll had produced it. Ignored while stopped.
    pub fn debug_inject(&self, action: Action) -> Result<bool, PortError> {
        self.poller.inject(action)
    }

    pub fn watched(&self) -> Option<PublicKey> {
        self.poller.watched()
    }
}

impl AccountWatcherPort for AccountWatcherAdapter {
    fn start(&self, public_key: &PublicKey) -> Result<(), PortError> {
        #[cfg(not(target_arch = "wasm32"))]
        return self.poller.start(public_key, |client, key| {
            match client.fetch_account(key) {
                Ok(data) => Action::FetchAccountSuccess(data),
                Err(e) => Action::FetchAccountFailure(e.to_string()),
            }
        });
        #[cfg(target_arch = "wasm32")]
        self.poller.start(public_key)
    }

    fn stop(&self) -> Result<(), PortError> {
        self.poller.stop()
    }

    fn is_running(&self) -> bool {
        self.poller.is_running()
    }

    fn drain(&self) -> Result<Vec<Action>, PortError> {
        self.poller.drain()
    }
}

/// Polls `GET /accounts/{id}/payments` while running.
#[derive(Debug, Clone)]
pub struct TxHistoryWatcherAdapter {
    poller: Poller,
}

impl Default for TxHistoryWatcherAdapter {
    fn default() -> Self {
        Self::with_config(&ViewerConfig::from_env())
    }
}

impl TxHistoryWatcherAdapter {
    pub fn with_config(config: &ViewerConfig) -> Self {
        Self {
            poller: Poller::new("tx-history", mode_for("tx-history", config)),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            poller: Poller::new("tx-history", WatcherMode::InMemory),
        }
    }

    pub fn debug_inject(&self, action: Action) -> Result<bool, PortError> {
        self.poller.inject(action)
    }

    pub fn watched(&self) -> Option<PublicKey> {
        self.poller.watched()
    }
}

impl TxHistoryWatcherPort for TxHistoryWatcherAdapter {
    fn start(&self, public_key: &PublicKey) -> Result<(), PortError> {
        #[cfg(not(target_arch = "wasm32"))]
        return self.poller.start(public_key, |client, key| {
            match client.fetch_payments(key) {
                Ok(records) => Action::FetchTxHistorySuccess(records),
                Err(e) => Action::FetchTxHistoryFailure(e.to_string()),
            }
        });
        #[cfg(target_arch = "wasm32")]
        self.poller.start(public_key)
    }

    fn stop(&self) -> Result<(), PortError> {
        self.poller.stop()
    }

    fn is_running(&self) -> bool {
        self.poller.is_running()
    }

    fn drain(&self) -> Result<Vec<Action>, PortError> {
        self.poller.drain()
    }
}

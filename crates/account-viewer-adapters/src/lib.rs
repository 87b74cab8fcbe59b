pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod horizon;
pub mod watcher;

pub use config::ViewerConfig;
#[cfg(not(target_arch = "wasm32"))]
pub use horizon::HorizonClient;
pub use watcher::{AccountWatcherAdapter, TxHistoryWatcherAdapter};

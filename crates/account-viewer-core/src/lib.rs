pub mod domain;
pub mod header;
pub mod identicon;
pub mod key;
pub mod ports;
pub mod store;

pub use domain::{AccountData, AccountSnapshot, ActionStatus, Balance, PaymentRecord};
pub use header::{sign_out, AccountSection, Branding, HeaderModel, SIGN_OUT_SEQUENCE};
pub use identicon::{Identicon, IDENTICON_SIZE};
pub use key::{format_public_key, PublicKey, PublicKeyError};
pub use ports::{AccountWatcherPort, PortError, TxHistoryWatcherPort};
pub use store::{reduce, AccountState, Action, AppState, Dispatch, Store, TxHistoryState};

use thiserror::Error;

use crate::key::PublicKey;
use crate::store::Action;

#[derive(Debug, Error)]
pub enum PortError {
    #[error("port not implemented: {0}")]
    NotImplemented(&'static str),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("http status {status}: {body}")]
    Http { status: u16, body: String },
    #[error("not found: {0}")]
    NotFound(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("policy error: {0}")]
    Policy(String),
}

/// Keeps the account slice current while running.
///
/// Results are not pushed into the store directly; the owner of the store
/// drains them as actions.
pub trait AccountWatcherPort {
    fn start(&self, public_key: &PublicKey) -> Result<(), PortError>;
    fn stop(&self) -> Result<(), PortError>;
    fn is_running(&self) -> bool;
    fn drain(&self) -> Result<Vec<Action>, PortError>;
}

pub trait TxHistoryWatcherPort {
    fn start(&self, public_key: &PublicKey) -> Result<(), PortError>;
    fn stop(&self) -> Result<(), PortError>;
    fn is_running(&self) -> bool;
    fn drain(&self) -> Result<Vec<Action>, PortError>;
}

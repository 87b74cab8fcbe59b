//! What the page header shows for a given account snapshot, and what it
//! dispatches on sign-out.

use crate::domain::AccountSnapshot;
use crate::identicon::Identicon;
use crate::key::format_public_key;
use crate::store::{Action, Dispatch};

pub const BRANDING_URL: &str = "https://www.stellar.org/";
pub const BRANDING_LABEL: &str = "Account Viewer";
pub const SIGN_OUT_LABEL: &str = "Sign out";

#[derive(Debug, Clone, PartialEq)]
pub struct Branding {
    pub url: &'static str,
    pub label: &'static str,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            url: BRANDING_URL,
            label: BRANDING_LABEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountSection {
    pub avatar: Option<Identicon>,
    pub display_key: String,
    pub copy_text: Option<String>,
    pub sign_out_label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderModel {
    pub branding: Branding,
    /// Present only for authenticated snapshots.
    pub account: Option<AccountSection>,
}

impl HeaderModel {
    pub fn from_snapshot(snapshot: &AccountSnapshot) -> Self {
        let account = snapshot.is_authenticated.then(|| {
            let public_key = snapshot.public_key();
            AccountSection {
                avatar: Identicon::from_public_key(public_key),
                display_key: format_public_key(public_key),
                copy_text: public_key.map(str::to_owned),
                sign_out_label: SIGN_OUT_LABEL,
            }
        });

        Self {
            branding: Branding::default(),
            account,
        }
    }
}

/// Watchers are stopped before the store holding their subscriptions is cleared.
pub const SIGN_OUT_SEQUENCE: [Action; 3] = [
    Action::StopAccountWatcher,
    Action::StopTxHistoryWatcher,
    Action::ResetStore,
];

pub fn sign_out<D: Dispatch + ?Sized>(dispatcher: &mut D) {
    tracing::info!("signing out");
    for action in SIGN_OUT_SEQUENCE {
        dispatcher.dispatch(action);
    }
}

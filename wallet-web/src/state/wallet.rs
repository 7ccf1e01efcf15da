//! Wallet state management

use leptos::prelude::*;
use lib_gate::{StellarNetwork, WalletIdentity};

use crate::services::StellarWalletKit;

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: StellarWalletKit,
    identity: RwSignal<Option<WalletIdentity>>,
}

impl WalletContext {
    pub fn new(network: StellarNetwork) -> Self {
        Self {
            wallet: StellarWalletKit::new(network),
            identity: RwSignal::new(None),
        }
    }

    pub fn identity(&self) -> Option<WalletIdentity> {
        self.identity.get()
    }

    /// Shortened identity for headers and badges.
    pub fn short_identity(&self) -> Option<String> {
        self.identity.with(|identity| identity.as_ref().map(|id| id.short()))
    }

    /// Record the identity a gate resolved. Unchanged values do not notify.
    pub fn set_identity(&self, identity: WalletIdentity) {
        if self.identity.with_untracked(|current| current.as_ref() != Some(&identity)) {
            self.identity.set(Some(identity));
        }
    }
}

pub fn provide_wallet_context(network: StellarNetwork) -> WalletContext {
    let context = WalletContext::new(network);
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}

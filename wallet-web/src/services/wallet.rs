//! Stellar Wallets Kit Integration via wasm-bindgen
//!
//! This module bridges the Stellar Wallets Kit to the gate's [`WalletCapability`].
//! The JavaScript side (`wallets_kit.js`) imports the kit on first use, so an
//! identity query made right after startup waits for the kit to load.
//! The kit owns the wallet picker; this side only asks "who is connected?"
//! and "please connect".

use async_trait::async_trait;
use lib_gate::{ConnectOutcome, GateError, StellarNetwork, WalletCapability, WalletIdentity};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

// ============================================================================
// STELLAR WALLETS KIT (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(module = "/src/services/wallets_kit.js")]
extern "C" {
    /// Address of the remembered wallet, or null if none was ever connected.
    #[wasm_bindgen(js_name = getPublicKey, catch)]
    async fn get_public_key(passphrase: &str) -> Result<JsValue, JsValue>;

    /// Open the kit's wallet picker. Resolves with `{ status, address }`.
    #[wasm_bindgen(js_name = connectWallet, catch)]
    async fn connect_wallet(passphrase: &str) -> Result<JsValue, JsValue>;
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

/// Reply of `connectWallet`.
#[derive(Debug, Deserialize)]
struct ConnectReply {
    status: String,
    address: Option<String>,
}

/// Wallet capability backed by the Stellar Wallets Kit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StellarWalletKit {
    network: StellarNetwork,
}

impl StellarWalletKit {
    pub fn new(network: StellarNetwork) -> Self {
        Self { network }
    }

    pub fn network(&self) -> StellarNetwork {
        self.network
    }
}

#[async_trait(?Send)]
impl WalletCapability for StellarWalletKit {
    async fn identity(&self) -> lib_gate::Result<Option<WalletIdentity>> {
        let value = get_public_key(self.network.passphrase())
            .await
            .map_err(|e| GateError::IdentityQuery(js_error_message(&e)))?;
        Ok(WalletIdentity::from_optional(value.as_string()))
    }

    async fn connect(&self) -> ConnectOutcome {
        let value = match connect_wallet(self.network.passphrase()).await {
            Ok(value) => value,
            Err(e) => {
                let reason = js_error_message(&e);
                log::warn!("Wallet connection failed: {}", reason);
                return ConnectOutcome::Failed(reason);
            }
        };

        match serde_wasm_bindgen::from_value::<ConnectReply>(value) {
            Ok(reply) if reply.status == "connected" => {
                if let Some(identity) = WalletIdentity::from_optional(reply.address) {
                    log::info!("Wallet connected: {}", identity.short());
                }
                ConnectOutcome::Connected
            }
            Ok(_) => ConnectOutcome::Cancelled,
            Err(e) => ConnectOutcome::Failed(format!("Unexpected wallet reply: {}", e)),
        }
    }
}

fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("Wallet error: {:?}", value))
}

#[cfg(test)]
mod tests {
    const BRIDGE_JS: &str = include_str!("wallets_kit.js");
    const INDEX_HTML: &str = include_str!("../../index.html");

    #[test]
    fn test_kit_is_loaded_by_the_bridge_not_the_page() {
        assert!(BRIDGE_JS.contains("await walletsKit(passphrase)"));
        assert!(BRIDGE_JS.contains("import(KIT_URL)"));
        assert!(!BRIDGE_JS.contains("window.StellarWalletsKit"));
        assert!(!INDEX_HTML.contains("stellar-wallets-kit"));
    }

    #[test]
    fn test_selection_is_marked_before_address_lookup() {
        let on_selected = BRIDGE_JS.find("onWalletSelected").unwrap();
        let handler = &BRIDGE_JS[on_selected..];
        let selected = handler.find("selected = true").unwrap();
        let lookup = handler.find("await kit.getAddress()").unwrap();
        assert!(selected < lookup);
        assert!(handler.contains("if (!selected)"));
    }
}

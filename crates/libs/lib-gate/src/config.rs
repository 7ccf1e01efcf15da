//! # Gate Configuration
//!
//! Configuration is read from named variables and validated once at startup so
//! a bad route fails fast instead of producing a redirect loop.
//!
//! | Variable | Default |
//! |---|---|
//! | `GATE_REDIRECT_ROUTE` | `/` |
//! | `GATE_PROTECTED_PREFIX` | `/dashboard` |
//! | `GATE_STELLAR_NETWORK` | `testnet` |
//! | `GATE_PLACEHOLDER_TEXT` | `Connect your wallet to continue` |
//!
//! ## Global Config Access
//!
//! Call [`init_config()`] once at startup, then use [`gate_config()`] anywhere:
//!
//! ```rust,no_run
//! use lib_gate::config::{gate_config, init_config, GateConfig};
//!
//! init_config(GateConfig::from_env()?);
//! let redirect = &gate_config().redirect_route;
//! # Ok::<(), lib_gate::GateError>(())
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::{GateError, Result};

pub const DEFAULT_REDIRECT_ROUTE: &str = "/";
pub const DEFAULT_PROTECTED_PREFIX: &str = "/dashboard";
pub const DEFAULT_PLACEHOLDER_TEXT: &str = "Connect your wallet to continue";

/// Stellar network the wallet kit is configured for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StellarNetwork {
    Public,
    #[default]
    Testnet,
    Futurenet,
}

impl StellarNetwork {
    /// Network passphrase expected by Stellar wallets.
    pub fn passphrase(&self) -> &'static str {
        match self {
            StellarNetwork::Public => "Public Global Stellar Network ; September 2015",
            StellarNetwork::Testnet => "Test SDF Network ; September 2015",
            StellarNetwork::Futurenet => "Test SDF Future Network ; October 2022",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StellarNetwork::Public => "public",
            StellarNetwork::Testnet => "testnet",
            StellarNetwork::Futurenet => "futurenet",
        }
    }
}

impl fmt::Display for StellarNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StellarNetwork {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" | "mainnet" => Ok(StellarNetwork::Public),
            "testnet" => Ok(StellarNetwork::Testnet),
            "futurenet" => Ok(StellarNetwork::Futurenet),
            other => Err(GateError::Config(format!(
                "GATE_STELLAR_NETWORK must be public, testnet or futurenet, got '{}'",
                other
            ))),
        }
    }
}

/// Wallet gate configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateConfig {
    /// Route a dismissed prompt navigates to. Must lie outside `protected_prefix`.
    pub redirect_route: String,

    /// Route prefix guarded by the wallet gate.
    pub protected_prefix: String,

    /// Network passed to the wallet kit.
    pub network: StellarNetwork,

    /// Text rendered behind the connect prompt.
    pub placeholder_text: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            redirect_route: DEFAULT_REDIRECT_ROUTE.to_string(),
            protected_prefix: DEFAULT_PROTECTED_PREFIX.to_string(),
            network: StellarNetwork::default(),
            placeholder_text: DEFAULT_PLACEHOLDER_TEXT.to_string(),
        }
    }
}

impl GateConfig {
    /// Load configuration through a key lookup, falling back to defaults, then validate.
    ///
    /// The wasm build passes values baked in at compile time; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let redirect_route = lookup("GATE_REDIRECT_ROUTE")
            .unwrap_or_else(|| DEFAULT_REDIRECT_ROUTE.to_string());

        let protected_prefix = lookup("GATE_PROTECTED_PREFIX")
            .unwrap_or_else(|| DEFAULT_PROTECTED_PREFIX.to_string());

        let network = match lookup("GATE_STELLAR_NETWORK") {
            Some(value) => value.parse()?,
            None => StellarNetwork::default(),
        };

        let placeholder_text = lookup("GATE_PLACEHOLDER_TEXT")
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER_TEXT.to_string());

        let config = Self {
            redirect_route,
            protected_prefix,
            network,
            placeholder_text,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Validate routes and texts.
    pub fn validate(&self) -> Result<()> {
        if !self.redirect_route.starts_with('/') {
            return Err(GateError::Config(
                "GATE_REDIRECT_ROUTE must start with '/'".to_string(),
            ));
        }

        if !self.protected_prefix.starts_with('/') || self.protected_prefix == "/" {
            return Err(GateError::Config(
                "GATE_PROTECTED_PREFIX must start with '/' and name a sub-route".to_string(),
            ));
        }

        if self.is_protected(&self.redirect_route) {
            return Err(GateError::Config(format!(
                "GATE_REDIRECT_ROUTE '{}' lies inside the protected prefix '{}'",
                self.redirect_route, self.protected_prefix
            )));
        }

        if self.placeholder_text.trim().is_empty() {
            return Err(GateError::Config(
                "GATE_PLACEHOLDER_TEXT must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether `route` falls under the protected prefix (segment-aware).
    pub fn is_protected(&self, route: &str) -> bool {
        let prefix = self.protected_prefix.trim_end_matches('/');
        match route.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
            None => false,
        }
    }
}

static CONFIG: OnceLock<GateConfig> = OnceLock::new();

/// Initialize the global configuration. Later calls are ignored.
pub fn init_config(config: GateConfig) {
    if CONFIG.set(config).is_err() {
        log::warn!("Gate configuration already initialized, ignoring new value");
    }
}

/// Global configuration; falls back to defaults when [`init_config()`] was never called.
pub fn gate_config() -> &'static GateConfig {
    CONFIG.get_or_init(GateConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GateConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, GateConfig::default());
        assert_eq!(config.redirect_route, "/");
        assert_eq!(config.network, StellarNetwork::Testnet);
    }

    #[test]
    fn test_overrides() {
        let config = GateConfig::from_lookup(lookup_from(&[
            ("GATE_REDIRECT_ROUTE", "/welcome"),
            ("GATE_PROTECTED_PREFIX", "/app"),
            ("GATE_STELLAR_NETWORK", "PUBLIC"),
            ("GATE_PLACEHOLDER_TEXT", "Wallet required"),
        ]))
        .unwrap();

        assert_eq!(config.redirect_route, "/welcome");
        assert_eq!(config.protected_prefix, "/app");
        assert_eq!(config.network, StellarNetwork::Public);
        assert_eq!(config.placeholder_text, "Wallet required");
    }

    #[test]
    fn test_rejects_redirect_into_protected_area() {
        let err = GateConfig::from_lookup(lookup_from(&[("GATE_REDIRECT_ROUTE", "/dashboard/home")]))
            .unwrap_err();
        assert!(matches!(err, GateError::Config(_)));

        let err = GateConfig::from_lookup(lookup_from(&[("GATE_REDIRECT_ROUTE", "home")])).unwrap_err();
        assert!(matches!(err, GateError::Config(_)));
    }

    #[test]
    fn test_rejects_unknown_network_and_blank_text() {
        assert!(GateConfig::from_lookup(lookup_from(&[("GATE_STELLAR_NETWORK", "devnet")])).is_err());
        assert!(GateConfig::from_lookup(lookup_from(&[("GATE_PLACEHOLDER_TEXT", "  ")])).is_err());
        assert!(GateConfig::from_lookup(lookup_from(&[("GATE_PROTECTED_PREFIX", "/")])).is_err());
    }

    #[test]
    fn test_is_protected_is_segment_aware() {
        let config = GateConfig::default();
        assert!(config.is_protected("/dashboard"));
        assert!(config.is_protected("/dashboard/groups"));
        assert!(config.is_protected("/dashboard?tab=1"));
        assert!(!config.is_protected("/dashboards"));
        assert!(!config.is_protected("/"));
    }

    #[test]
    fn test_network_passphrase() {
        assert_eq!(StellarNetwork::Testnet.passphrase(), "Test SDF Network ; September 2015");
        assert_eq!("mainnet".parse::<StellarNetwork>().unwrap(), StellarNetwork::Public);
        assert_eq!(StellarNetwork::Futurenet.to_string(), "futurenet");
    }

    #[test]
    fn test_network_text_form_parses_back() {
        for network in [StellarNetwork::Public, StellarNetwork::Testnet, StellarNetwork::Futurenet] {
            assert_eq!(network.name().parse::<StellarNetwork>().unwrap(), network);
        }
        assert_eq!(" TESTNET ".parse::<StellarNetwork>().unwrap(), StellarNetwork::Testnet);
    }
}

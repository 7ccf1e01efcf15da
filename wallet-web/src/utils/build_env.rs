//! Configuration baked in at compile time
//!
//! A browser has no process environment, so `GATE_*` variables are read by
//! `option_env!` when the WASM bundle is built (e.g. `GATE_STELLAR_NETWORK=public trunk build`).

use lib_gate::{GateConfig, GateError};

use crate::utils::constants::DASHBOARD_ROUTE;

/// Look up a `GATE_*` variable captured at build time.
pub fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "GATE_REDIRECT_ROUTE" => option_env!("GATE_REDIRECT_ROUTE"),
        "GATE_PROTECTED_PREFIX" => option_env!("GATE_PROTECTED_PREFIX"),
        "GATE_STELLAR_NETWORK" => option_env!("GATE_STELLAR_NETWORK"),
        "GATE_PLACEHOLDER_TEXT" => option_env!("GATE_PLACEHOLDER_TEXT"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Load and validate the build-time configuration.
///
/// The dashboard route is fixed by the router, so it must fall under the
/// configured protected prefix.
pub fn load_config() -> Result<GateConfig, GateError> {
    let config = GateConfig::from_lookup(build_env)?;
    if !config.is_protected(DASHBOARD_ROUTE) {
        return Err(GateError::Config(format!(
            "GATE_PROTECTED_PREFIX '{}' does not cover {}",
            config.protected_prefix, DASHBOARD_ROUTE
        )));
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_is_none() {
        assert_eq!(build_env("DATABASE_URL"), None);
    }

    #[test]
    fn test_default_prefix_covers_dashboard() {
        assert!(GateConfig::default().is_protected(DASHBOARD_ROUTE));
    }
}

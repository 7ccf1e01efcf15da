//! Wallet identity: the public identifier reported by a connected wallet.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GateError, Result};

/// Opaque public identifier of a connected wallet (a Stellar account address).
///
/// The gate never interprets the token. It only needs to know whether one is
/// present, and shows a shortened form in the UI.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WalletIdentity(String);

impl WalletIdentity {
    /// Parse an identity token, trimming surrounding whitespace.
    ///
    /// Empty tokens are rejected; wallet adapters treat them as "not connected".
    pub fn parse(token: impl AsRef<str>) -> Result<Self> {
        let token = token.as_ref().trim();
        if token.is_empty() {
            return Err(GateError::InvalidIdentity("identity token is empty".to_string()));
        }
        Ok(Self(token.to_string()))
    }

    /// Interpret an optional raw token from a wallet, mapping blank tokens to `None`.
    pub fn from_optional(token: Option<String>) -> Option<Self> {
        token.and_then(|t| Self::parse(t).ok())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form with the first and last four characters, e.g. `GABC...WXYZ`.
    ///
    /// Identities of eight characters or fewer are returned whole.
    pub fn short(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 8 {
            return self.0.clone();
        }
        let prefix: String = chars[..4].iter().collect();
        let suffix: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", prefix, suffix)
    }
}

impl fmt::Display for WalletIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for WalletIdentity {
    type Error = GateError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<WalletIdentity> for String {
    fn from(identity: WalletIdentity) -> Self {
        identity.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "GCEZWKCA5VLDNRLN3RPRJMRZOX3Z6G5CHCGSNFHEYVXM3XOJMDS674JZ";

    #[test]
    fn test_parse_trims_and_rejects_blank() {
        let id = WalletIdentity::parse(format!("  {}\n", ADDRESS)).unwrap();
        assert_eq!(id.as_str(), ADDRESS);

        assert!(matches!(WalletIdentity::parse(""), Err(GateError::InvalidIdentity(_))));
        assert!(matches!(WalletIdentity::parse("   "), Err(GateError::InvalidIdentity(_))));
    }

    #[test]
    fn test_from_optional() {
        assert_eq!(WalletIdentity::from_optional(None), None);
        assert_eq!(WalletIdentity::from_optional(Some(String::new())), None);
        assert_eq!(
            WalletIdentity::from_optional(Some(ADDRESS.to_string())).map(String::from),
            Some(ADDRESS.to_string())
        );
    }

    #[test]
    fn test_short() {
        let id = WalletIdentity::parse(ADDRESS).unwrap();
        assert_eq!(id.short(), "GCEZ...74JZ");
        assert_eq!(WalletIdentity::parse("GABCDEFG").unwrap().short(), "GABCDEFG");
    }

    #[test]
    fn test_serde_is_transparent_string() {
        let id = WalletIdentity::parse(ADDRESS).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", ADDRESS));

        let back: WalletIdentity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<WalletIdentity>("\"  \"").is_err());
    }
}

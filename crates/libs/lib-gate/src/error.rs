//! # Gate Error Types
//!
//! One error type, [`GateError`], covers every failure the gate can observe.
//! Each variant carries a context string; `thiserror` provides `Display`.
//!
//! ## Error Categories
//!
//! - **IdentityQuery**: the wallet could not report its current identity
//! - **Connect**: the wallet connection flow failed
//! - **Environment**: the browser environment (window, document, body) is missing
//! - **Config**: a configuration value failed validation
//! - **InvalidIdentity**: an identity token was rejected
//!
//! None of these are fatal to the page. Identity failures resolve the gate to
//! `Disconnected`, connect failures keep the prompt open, and a missing
//! environment makes overlays render nothing.

use thiserror::Error;

/// Convenience alias for `Result<T, GateError>`.
pub type Result<T> = std::result::Result<T, GateError>;

/// Error type for the wallet gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// The external wallet failed to answer an identity query.
    #[error("Identity query failed: {0}")]
    IdentityQuery(String),

    /// The external connect flow reported an error.
    #[error("Wallet connection failed: {0}")]
    Connect(String),

    /// Browser environment unavailable (no window, document or body).
    #[error("Environment not ready: {0}")]
    Environment(String),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Identity token rejected (empty or whitespace only).
    #[error("Invalid wallet identity: {0}")]
    InvalidIdentity(String),
}

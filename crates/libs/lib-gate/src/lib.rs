//! # Wallet Gate Core
//!
//! Framework-agnostic logic behind the wallet-gated pages of the web app.
//! Nothing in this crate touches the DOM; the `wallet-web` crate adapts these
//! types to Leptos components and browser APIs.
//!
//! ## Structure
//!
//! - **[`identity`]**: [`WalletIdentity`], the opaque public identifier of a connected wallet
//! - **[`capability`]**: traits for the external collaborators (wallet, navigation, scroll target)
//! - **[`gate`]**: [`GateModel`], the pure gate state machine
//! - **[`controller`]**: [`GateController`], async orchestration of the model over a wallet
//! - **[`prompt`]**: [`PromptSession`], per-visibility state of the connect prompt
//! - **[`prompt_controller`]**: [`PromptController`], the prompt's visibility resources and connect flow
//! - **[`scroll_lock`]**: reference-counted document scroll lock
//! - **[`config`]**: [`GateConfig`] loaded from named variables
//! - **[`error`]**: [`GateError`] and the crate [`Result`] alias
//!
//! ## Flow
//!
//! ```text
//! mount ──► identity() ──► present ──► Connected (children)
//!                     └──► absent  ──► Disconnected (placeholder + prompt)
//!                                        ├─ confirm ─► connect() ─► Connected ─► identity() again
//!                                        └─ dismiss ─► redirect
//! ```

pub mod capability;
pub mod config;
pub mod controller;
pub mod error;
pub mod gate;
pub mod identity;
pub mod prompt;
pub mod prompt_controller;
pub mod scroll_lock;

pub use capability::{ConnectOutcome, Navigator, ScrollTarget, WalletCapability};
pub use config::{GateConfig, StellarNetwork};
pub use controller::{GateController, MountedGate};
pub use error::{GateError, Result};
pub use gate::{DismissEffect, GateModel, GateState, GateView};
pub use identity::WalletIdentity;
pub use prompt::{is_cancel_key, PromptEffect, PromptSession};
pub use prompt_controller::{PromptCallbacks, PromptController};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};

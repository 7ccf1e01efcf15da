//! # External Capabilities
//!
//! The gate consumes three collaborators it does not implement:
//!
//! - [`WalletCapability`]: identity query and connect flow of the wallet kit
//! - [`Navigator`]: redirect away from the protected area
//! - [`ScrollTarget`]: the document element whose scrolling gets locked
//!
//! Futures are `?Send`: everything runs on the single-threaded browser event loop.

use std::rc::Rc;

use async_trait::async_trait;

use crate::error::Result;
use crate::identity::WalletIdentity;

/// Result of an external connect flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// A wallet connection was established.
    Connected,
    /// The user closed the wallet picker without connecting.
    Cancelled,
    /// The wallet reported an error.
    Failed(String),
}

impl ConnectOutcome {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectOutcome::Connected)
    }
}

/// External wallet connection capability.
#[async_trait(?Send)]
pub trait WalletCapability {
    /// Query the currently connected identity, `None` if never connected.
    async fn identity(&self) -> Result<Option<WalletIdentity>>;

    /// Run the wallet's connect flow (e.g. open its wallet picker).
    async fn connect(&self) -> ConnectOutcome;
}

#[async_trait(?Send)]
impl<W: WalletCapability + ?Sized> WalletCapability for Rc<W> {
    async fn identity(&self) -> Result<Option<WalletIdentity>> {
        (**self).identity().await
    }

    async fn connect(&self) -> ConnectOutcome {
        (**self).connect().await
    }
}

/// Navigation capability used when the prompt is dismissed without connecting.
pub trait Navigator {
    fn redirect(&self, route: &str);
}

impl<N: Navigator + ?Sized> Navigator for Rc<N> {
    fn redirect(&self, route: &str) {
        (**self).redirect(route)
    }
}

/// Element whose scrolling is suspended while a modal is visible.
pub trait ScrollTarget {
    fn set_scroll_locked(&self, locked: bool);
}

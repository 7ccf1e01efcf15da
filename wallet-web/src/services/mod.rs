//! Browser adapters for the gate's external capabilities

pub mod navigation;
pub mod scroll;
pub mod wallet;

pub use navigation::RouterNavigator;
pub use scroll::body_scroll_lock;
pub use wallet::StellarWalletKit;

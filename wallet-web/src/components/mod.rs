//! UI Components

pub mod connect_prompt;
pub mod loading_indicator;
pub mod navbar;
pub mod wallet_gate;

pub use connect_prompt::ConnectPrompt;
pub use loading_indicator::LoadingIndicator;
pub use navbar::Navbar;
pub use wallet_gate::WalletGate;

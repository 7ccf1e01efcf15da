//! Application constants

/// Static loading element in `index.html`, hidden once the app mounts.
pub const BOOT_SCREEN_ID: &str = "leptos-loading";

/// Route of the wallet-gated dashboard.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

// Connect prompt copy
pub const PROMPT_TITLE: &str = "CONNECT YOUR WALLET";
pub const PROMPT_DESCRIPTION: &str =
    "You need to connect your wallet to access this page. Connect your Stellar wallet to continue.";
pub const PROMPT_TITLE_ID: &str = "connect-wallet-modal-title";
pub const PROMPT_DESCRIPTION_ID: &str = "connect-wallet-modal-description";

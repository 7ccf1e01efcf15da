//! Dashboard Page - wallet-gated view of the connected account

use leptos::prelude::*;

use crate::components::WalletGate;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <WalletGate>
            <DashboardContent/>
        </WalletGate>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let network = wallet_ctx.wallet.network();

    view! {
        <div class="content-wrapper">
            <div class="card">
                <h1 class="card-title">"Dashboard"</h1>

                <p class="label">"Status"</p>
                <p class="status-connected">"Connected"</p>

                <p class="label">"Wallet Address"</p>
                <p class="wallet-address">
                    {move || wallet_ctx.identity().map(String::from)}
                </p>

                <p class="label">"Network"</p>
                <p class="network">{network.name()}</p>
            </div>
        </div>
    }
}

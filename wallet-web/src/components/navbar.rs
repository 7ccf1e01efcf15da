//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use lib_gate::config::gate_config;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let dashboard = gate_config().protected_prefix.clone();

    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">"Stellar Groups"</span>
                </A>
                <A href=dashboard attr:class="nav-link">"Dashboard"</A>
                {move || wallet_ctx.short_identity().map(|short| view! {
                    <span class="nav-identity" title=wallet_ctx.identity().map(String::from)>
                        {short}
                    </span>
                })}
            </div>
        </nav>
    }
}

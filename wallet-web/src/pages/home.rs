//! Home Page - public landing page and redirect target for dismissed prompts

use leptos::prelude::*;
use leptos_router::components::A;
use lib_gate::config::gate_config;

#[component]
pub fn HomePage() -> impl IntoView {
    let dashboard = gate_config().protected_prefix.clone();

    view! {
        <div class="content-wrapper">
            <div class="card">
                <h1 class="main-header">"Stellar Groups"</h1>
                <p class="main-subheader">"Shared fundraising and payouts on Stellar"</p>
                <p class="card-text">
                    "The dashboard needs a connected wallet. You will be asked to connect one when you open it."
                </p>
                <A href=dashboard>
                    <span class="btn">"Open Dashboard"</span>
                </A>
            </div>
        </div>
    }
}

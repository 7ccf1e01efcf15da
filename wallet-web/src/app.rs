//! Stellar Wallet Gate Web App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};
use lib_gate::config::gate_config;

use crate::components::Navbar;
use crate::environment::{provide_render_target, RenderTarget};
use crate::pages::{DashboardPage, HomePage};
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App(render_target: RenderTarget) -> impl IntoView {
    provide_render_target(render_target);
    provide_wallet_context(gate_config().network);

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/dashboard") view=DashboardPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="content-wrapper">
            <div class="card">
                <h1 class="card-title">"404 - Page Not Found"</h1>
                <p class="card-text">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn">"Go to Home"</span>
                </A>
            </div>
        </div>
    }
}

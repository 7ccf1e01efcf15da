//! Wallet Gate - blocks protected content until a wallet is connected
//!
//! On mount the gate asks the wallet kit for the current identity. Until the
//! answer arrives it shows the loading indicator; then either the children or
//! a placeholder with the connect prompt over it.

use leptos::prelude::*;
use lib_gate::config::gate_config;
use lib_gate::{GateController, GateState, MountedGate};

use crate::components::{ConnectPrompt, LoadingIndicator};
use crate::services::RouterNavigator;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn WalletGate(children: ChildrenFn) -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let config = gate_config();

    let controller = GateController::new(
        wallet_ctx.wallet,
        RouterNavigator::from_router(),
        config.redirect_route.clone(),
    );

    let model = RwSignal::new(controller.model());
    controller.set_listener(move |snapshot| {
        if let Some(identity) = snapshot.identity() {
            wallet_ctx.set_identity(identity.clone());
        }
        model.try_set(snapshot.clone());
    });

    let mounting = controller.clone();
    leptos::task::spawn_local(async move {
        mounting.mount().await;
    });

    // Dropping the stored gate (on unmount) discards late identity answers.
    let gate = StoredValue::new_local(MountedGate::new(controller));

    let on_dismiss = Callback::new(move |_| {
        gate.try_with_value(|g| g.dismiss());
    });

    let on_connected = Callback::new(move |_| {
        if let Some(verification) = gate.try_with_value(|g| g.connected()) {
            leptos::task::spawn_local(verification);
        }
    });

    let state = Memo::new(move |_| model.with(|m| m.state()));
    let prompt_visible = Signal::derive(move || model.with(|m| m.prompt_visible()));
    let placeholder = config.placeholder_text.clone();

    move || match state.get() {
        GateState::Loading => view! { <LoadingIndicator/> }.into_any(),
        GateState::Disconnected => view! {
            <div class="gate-placeholder">
                <p>{placeholder.clone()}</p>
            </div>
            <ConnectPrompt
                visible=prompt_visible
                on_dismiss=on_dismiss
                on_connected=on_connected
            />
        }
        .into_any(),
        GateState::Connected => children().into_any(),
    }
}

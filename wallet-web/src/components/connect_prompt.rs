//! Connect Prompt - modal asking the user to connect a Stellar wallet
//!
//! The dialog is portalled onto `document.body`. Everything besides drawing is
//! delegated to a [`PromptController`]: while visible it holds the body scroll
//! lock and the window `keydown` listener, both released on hide and on unmount.

use leptos::ev;
use leptos::portal::Portal;
use leptos::prelude::*;
use lib_gate::{PromptCallbacks, PromptController, PromptEffect};

use crate::environment::render_target_ready;
use crate::services::body_scroll_lock;
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::{
    PROMPT_DESCRIPTION, PROMPT_DESCRIPTION_ID, PROMPT_TITLE, PROMPT_TITLE_ID,
};

#[component]
pub fn ConnectPrompt(
    /// Whether the dialog is shown.
    #[prop(into)]
    visible: Signal<bool>,
    /// Called on cancel, backdrop click, cancel key, and after a successful connect.
    #[prop(into)]
    on_dismiss: Callback<()>,
    /// Called after a successful connect, before `on_dismiss`.
    #[prop(optional, into)]
    on_connected: Option<Callback<()>>,
) -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let ready = render_target_ready();

    let mut callbacks = PromptCallbacks::new(move || on_dismiss.run(()));
    if let Some(on_connected) = on_connected {
        callbacks = callbacks.on_connected(move || on_connected.run(()));
    }
    let prompt = StoredValue::new_local(PromptController::new(body_scroll_lock(), callbacks));

    let (confirming, set_confirming) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let dismiss = move || {
        if let Some(p) = prompt.try_get_value() {
            p.dismiss();
        }
    };

    Effect::new(move |_| {
        let shown = visible.get() && ready;
        let Some(p) = prompt.try_get_value() else {
            return;
        };
        if p.sync_visible(shown) {
            let keydown = window_event_listener(ev::keydown, move |ev| {
                if let Some(p) = prompt.try_get_value() {
                    p.key(&ev.key(), ev.repeat());
                }
            });
            p.on_release(move || keydown.remove());
        }
        if !shown {
            set_error.set(None);
            set_confirming.set(false);
        }
    });

    on_cleanup(move || {
        prompt.try_with_value(|p| p.release());
    });

    let confirm = move |_: web_sys::MouseEvent| {
        let Some(p) = prompt.try_get_value() else {
            return;
        };
        let Some(flow) = p.confirm(wallet_ctx.wallet) else {
            return;
        };
        set_confirming.set(true);
        set_error.set(None);

        leptos::task::spawn_local(async move {
            let effect = flow.await;
            set_confirming.try_set(false);
            if effect == PromptEffect::StayOpen {
                set_error.try_set(p.error());
            }
        });
    };

    view! {
        <Show when=move || visible.get() && ready>
            <Portal>
                <div
                    class="gate-backdrop"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby=PROMPT_TITLE_ID
                    aria-describedby=PROMPT_DESCRIPTION_ID
                    on:click=move |_| dismiss()
                >
                    <div
                        class="gate-dialog"
                        on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                    >
                        <h2 id=PROMPT_TITLE_ID class="gate-dialog-title">{PROMPT_TITLE}</h2>
                        <p id=PROMPT_DESCRIPTION_ID class="gate-dialog-text">{PROMPT_DESCRIPTION}</p>

                        {move || error.get().map(|err| view! {
                            <p class="gate-error" role="alert">{err}</p>
                        })}

                        <div class="gate-actions">
                            <button
                                type="button"
                                class="gate-btn gate-btn-cancel"
                                on:click=move |_| dismiss()
                            >
                                "CANCEL"
                            </button>
                            <button
                                type="button"
                                class="gate-btn gate-btn-connect"
                                disabled=move || confirming.get()
                                on:click=confirm
                            >
                                {move || if confirming.get() { "CONNECTING..." } else { "CONNECT WALLET" }}
                            </button>
                        </div>
                    </div>
                </div>
            </Portal>
        </Show>
    }
}
